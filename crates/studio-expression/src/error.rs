use crate::simplicity::NotSimpleReason;
use thiserror::Error;

/// Structural errors: the input is outside the convertible subset.
///
/// Callers are expected to check [`is_simple`](crate::is_simple) first, so
/// these indicate a wiring bug rather than bad user input.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Expression is not simple: {expression} ({reason})")]
    NotSimple {
        expression: String,
        #[source]
        reason: NotSimpleReason,
    },

    #[error("Invalid expression JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the editing operations in [`edit`](crate::edit).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Subexpression index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
