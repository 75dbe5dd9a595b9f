//! # Error Types
//!
//! Both ledger errors are expected, user-triggerable conditions:
//! - No silent failures, no partial mutations
//! - Use `Result<T, LedgerError>` for fallible operations
//! - The ledger never panics; all errors must be recoverable

use crate::stage::Stage;
use thiserror::Error;

/// Errors a ledger operation can return.
///
/// The ledger is deterministic, so retrying with the same inputs produces
/// the same error; callers surface these to the user (e.g. as an HTTP 400)
/// rather than retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Malformed input that the type system could not rule out, such as a
    /// zero-model move request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A move asked for more models than the source stage holds. The
    /// snapshot is untouched; the caller may retry or report without
    /// re-fetching.
    #[error("stage '{stage}' holds {available} models, cannot move {requested}")]
    InsufficientStage {
        stage: Stage,
        available: u32,
        requested: u32,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stage_message_names_stage_and_counts() {
        let err = LedgerError::InsufficientStage {
            stage: Stage::Unbuilt,
            available: 2,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "stage 'unbuilt' holds 2 models, cannot move 5"
        );
    }

    #[test]
    fn invalid_argument_message() {
        let err = LedgerError::InvalidArgument("count must be at least 1".to_string());
        assert_eq!(err.to_string(), "invalid argument: count must be at least 1");
    }
}
