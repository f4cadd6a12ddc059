//! Component bindings: one resolved sub-object, one invoke surface

use std::sync::Arc;

use crate::dispatch::{self, Arg};
use crate::error::Result;
use crate::transport::{Automation, TargetId};
use crate::variant::Variant;

/// The binding to one sub-object of the running host.
///
/// Construction composes the parent instance identity with a fixed role
/// suffix (`"Stratus.LoadPatterns"`), resolves the resulting path through
/// the transport exactly once, and keeps the handle for the binding's whole
/// lifetime. Nothing here re-resolves, reconnects, or health-checks: if the
/// instance goes away, every subsequent invoke fails at the boundary.
///
/// All remote traffic, every capability trait's default body included,
/// funnels through [`invoke`](ComponentBinding::invoke) and its narrowing
/// wrappers.
pub struct ComponentBinding {
    automation: Arc<dyn Automation>,
    target: TargetId,
    path: String,
}

impl ComponentBinding {
    /// Resolve `parent.role` and bind it.
    ///
    /// # Errors
    ///
    /// [`BindingError::Unreachable`] when the instance is not running or
    /// the role does not exist in it.
    ///
    /// [`BindingError::Unreachable`]: crate::BindingError::Unreachable
    pub fn bind(automation: Arc<dyn Automation>, parent: &str, role: &str) -> Result<Self> {
        let path = format!("{parent}.{role}");
        let target = automation.resolve(&path)?;
        tracing::debug!(%path, "bound automation target");
        Ok(Self {
            automation,
            target,
            path,
        })
    }

    /// The resolved path (`parent.role`), for diagnostics.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// A clone of the transport handle, for binding sibling components
    /// against the same instance.
    pub fn automation(&self) -> Arc<dyn Automation> {
        Arc::clone(&self.automation)
    }

    /// Perform one remote operation and return the raw, un-narrowed result.
    ///
    /// Cell-typed arguments are written in place as a side effect. The call
    /// blocks until the host responds; there is no timeout and no retry.
    pub fn invoke(&self, operation: &str, args: &[Arg<'_>]) -> Result<Variant> {
        dispatch::perform(
            self.automation.as_ref(),
            self.target,
            &self.path,
            operation,
            args,
        )
    }

    /// Invoke and narrow the result to a status/code integer.
    ///
    /// This is the shape of nearly every mutating and query operation:
    /// `0` means the host accepted it, nonzero means it was rejected. The
    /// status comes back as a plain value; interpreting a particular
    /// nonzero code is the caller's business.
    pub fn invoke_int(&self, operation: &str, args: &[Arg<'_>]) -> Result<i32> {
        dispatch::narrow_int(operation, self.invoke(operation, args)?)
    }

    /// Invoke and narrow the result to a double.
    pub fn invoke_double(&self, operation: &str, args: &[Arg<'_>]) -> Result<f64> {
        dispatch::narrow_double(operation, self.invoke(operation, args)?)
    }

    /// Invoke and narrow the result to a boolean.
    pub fn invoke_bool(&self, operation: &str, args: &[Arg<'_>]) -> Result<bool> {
        dispatch::narrow_bool(operation, self.invoke(operation, args)?)
    }

    /// Invoke and narrow the result to text.
    pub fn invoke_text(&self, operation: &str, args: &[Arg<'_>]) -> Result<String> {
        dispatch::narrow_text(operation, self.invoke(operation, args)?)
    }
}

impl std::fmt::Debug for ComponentBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ComponentBinding({})", self.path)
    }
}

/// Access to the component binding underneath a typed wrapper.
///
/// Every capability trait takes this as its supertrait, so one `Bound`
/// impl per wrapper struct is all the glue a release binding needs; the
/// operations themselves are inherited default bodies.
pub trait Bound {
    /// The component this wrapper forwards to.
    fn component(&self) -> &ComponentBinding;
}
