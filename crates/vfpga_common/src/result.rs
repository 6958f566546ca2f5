//! Common result and error types for the back-end.

/// The standard result type for fallible internal operations.
///
/// `Err` indicates an invariant violation — a bounds check or bookkeeping
/// inconsistency that should never occur for well-formed input. It is not
/// how capacity, divergence, or malformed-input failures are reported; those
/// have their own typed errors per stage.
pub type VfpgaResult<T> = Result<T, InternalError>;

/// A programmer-error / invariant-violation signal.
///
/// Raised when internal bookkeeping is inconsistent (an out-of-range tile
/// lookup, a node id with no backing entry). These should never occur during
/// normal operation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("internal invariant violation: {message}")]
pub struct InternalError {
    /// Description of the violated invariant.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}
