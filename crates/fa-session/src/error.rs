//! Error types for a game session.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while setting up or running a round.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The word pool has no categories to draw from.
    #[error("word pool cannot be empty")]
    EmptyPool,

    /// Fewer than one player was requested.
    #[error("player count cannot be less than 1 (got {0})")]
    InvalidPlayerCount(i64),

    /// Clearing the screen or reading an acknowledgment failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Loading or storing the word pool failed.
    #[error("{0}")]
    Pool(#[from] fa_core::CoreError),
}
