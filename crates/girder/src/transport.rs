//! The automation boundary this crate rides on
//!
//! The binding layer owns no wire protocol of its own. Whatever automation
//! technology reaches the running host (a COM bridge on Windows, an
//! in-process simulator in tests) implements [`Automation`], and everything
//! above it is transport-agnostic.

use crate::error::Result;
use crate::variant::Variant;

/// Opaque handle to one resolved sub-object inside the running host.
///
/// Minted by [`Automation::resolve`] and meaningful only to the transport
/// that minted it. A target lives exactly as long as the component binding
/// that holds it; this layer never rebuilds or health-checks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(u64);

impl TargetId {
    /// Mint a handle. Transport implementations choose the raw value.
    pub fn new(raw: u64) -> Self {
        TargetId(raw)
    }

    /// The raw value, for the transport's own bookkeeping.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A lowered argument payload: one scalar or one homogeneous array.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// A single primitive
    Scalar(Variant),
    /// A homogeneous sequence
    Array(Vec<Variant>),
}

/// One positional argument on the wire.
///
/// By-ref arguments are mutable slots: the callee overwrites `value`
/// during the call and the dispatch adapter copies the result back into
/// the originating cell. By-value arguments are never written.
#[derive(Debug, Clone, PartialEq)]
pub struct WireArg {
    /// The argument payload
    pub value: WireValue,
    /// Whether the callee may write this argument back
    pub by_ref: bool,
}

impl WireArg {
    /// A plain input argument.
    pub fn by_value(value: Variant) -> Self {
        Self {
            value: WireValue::Scalar(value),
            by_ref: false,
        }
    }

    /// A writable argument (scalar or array).
    pub fn by_ref(value: WireValue) -> Self {
        Self { value, by_ref: true }
    }
}

/// A live connection to one running host instance.
///
/// Implementations perform two duties and nothing more: resolve a named
/// sub-object once, and execute single blocking positional calls against
/// a resolved target. No queueing, no retry, no timeout: one `call` is
/// one independent round trip, and a mutating operation must never be
/// silently replayed.
pub trait Automation: Send + Sync {
    /// Resolve the sub-object named by `path` (`parent.role`).
    ///
    /// # Errors
    ///
    /// [`BindingError::Unreachable`] if the instance is not running or the
    /// path names nothing.
    ///
    /// [`BindingError::Unreachable`]: crate::BindingError::Unreachable
    fn resolve(&self, path: &str) -> Result<TargetId>;

    /// Perform one remote operation, writing by-ref arguments in place,
    /// and return the raw result.
    ///
    /// # Errors
    ///
    /// [`BindingError::Unreachable`] if the boundary fails mid-call or the
    /// operation name is unknown to the target.
    ///
    /// [`BindingError::Unreachable`]: crate::BindingError::Unreachable
    fn call(&self, target: TargetId, operation: &str, args: &mut [WireArg]) -> Result<Variant>;
}
