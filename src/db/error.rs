use thiserror::Error;

/// Failures raised by the store itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A watchlist row points at a title that does not exist. This is an
    /// internal consistency violation, not a caller mistake.
    #[error("Watchlist entry {entry_id} references missing title {movie_id}")]
    DanglingReference { entry_id: i32, movie_id: i32 },

    /// Only raised when reference validation is enabled.
    #[error("User {0} not found")]
    MissingUser(i32),

    /// Only raised when reference validation is enabled.
    #[error("Title {0} not found")]
    MissingTitle(i32),
}
