//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The requested board does not exist in the store.
    #[error("board not found: {0}")]
    BoardNotFound(Uuid),

    /// No two consecutive generations matched within the attempt budget.
    #[error("board did not reach a stable state within {max_attempts} attempts")]
    NoStableState {
        /// The attempt budget that was exhausted.
        max_attempts: u32,
    },

    /// Malformed input rejected before reaching the engine.
    #[error("validation error: {0}")]
    Validation(String),

    /// A storage error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
