//! Error types for the binding layer

use thiserror::Error;

/// Failures the binding layer itself can signal.
///
/// Only infrastructure problems become errors. A nonzero status returned by
/// the host for a rejected operation is *not* an error: it flows back to the
/// caller as an ordinary `i32`, preserving the host API's own error-as-value
/// convention.
#[derive(Error, Debug)]
pub enum BindingError {
    /// The automation boundary could not be contacted: the host instance is
    /// not running, the target path did not resolve, or the dispatch was
    /// rejected outright (for example, an unknown operation name).
    #[error("automation target `{path}` is unreachable: {reason}")]
    Unreachable {
        /// The target path that failed (`parent.role`)
        path: String,
        /// Transport-supplied detail
        reason: String,
    },

    /// A raw result (or a value the callee wrote into a slot) does not fit
    /// the primitive shape this binding declares for the operation. This is
    /// a defect in the binding's contract, not a runtime condition.
    #[error("operation `{operation}` produced {got}, expected {expected}")]
    Coercion {
        /// The remote operation name
        operation: String,
        /// The primitive shape the binding declares
        expected: &'static str,
        /// What actually came back
        got: String,
    },
}

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, BindingError>;
