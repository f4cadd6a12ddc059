//! # Girder
//!
//! Typed bindings over the remote automation object model of a structural
//! analysis host.
//!
//! The host publishes its entities (load patterns, materials, groups,
//! analysis control) as sub-objects answering string-named, positional
//! remote operations. Girder puts a statically typed surface over that
//! boundary:
//!
//! - **Slots** ([`Slot`], [`ArraySlot`]) carry the host's write-back
//!   ("by ref") results into typed cells, with discard sentinels for
//!   outputs the caller does not need.
//! - **Dispatch** lowers typed arguments onto the wire, runs one blocking
//!   round trip, copies results back, and narrows the raw return to the
//!   primitive shape each operation declares.
//! - **Component bindings** ([`ComponentBinding`]) resolve one sub-object
//!   at construction and own it for life.
//! - **Capability traits** ([`schema`]) declare each schema revision's
//!   operations once, as default bodies; the [`v22`] and [`v23`] release
//!   modules select revisions with empty impls.
//!
//! Domain-level rejections stay values: almost every operation returns a
//! status integer, `0` for success, and interpreting a nonzero code is the
//! caller's business. Only infrastructure failures (unreachable instance,
//! undocumented return shape) are Rust errors.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use girder::schema::{LoadPatternsV22, ModelV22};
//! use girder::sim::SimulatedInstance;
//! use girder::{v23, IntSlot, TextArraySlot};
//!
//! # fn main() -> girder::Result<()> {
//! let host = Arc::new(SimulatedInstance::new("Stratus"));
//! let app = v23::Application::attach(host, "Stratus")?;
//!
//! app.model.initialize_new_model_default()?;
//! assert_eq!(app.model.load_patterns.add_default("DEAD", 1)?, 0);
//!
//! let count = IntSlot::empty();
//! let names = TextArraySlot::empty();
//! assert_eq!(app.model.load_patterns.get_name_list(&count, &names)?, 0);
//! assert_eq!(names.to_vec(), vec!["DEAD".to_owned()]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod component;
pub mod dispatch;
pub mod error;
pub mod profile;
pub mod schema;
pub mod sim;
pub mod slot;
pub mod transport;
pub mod v22;
pub mod v23;
pub mod variant;

// Re-export main types
pub use component::{Bound, ComponentBinding};
pub use dispatch::Arg;
pub use error::{BindingError, Result};
pub use profile::{InstanceProfile, Revision};
pub use slot::{
    ArraySlot, BoolArraySlot, BoolSlot, DoubleArraySlot, DoubleSlot, IntArraySlot, IntSlot, Slot,
    SlotValue, TextArraySlot, TextSlot,
};
pub use transport::{Automation, TargetId, WireArg, WireValue};
pub use variant::Variant;

/// Girder version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
