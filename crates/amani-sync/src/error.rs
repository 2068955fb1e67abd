use thiserror::Error;

/// Errors surfaced by content store operations.
///
/// I/O-tier failures never appear here: cache and backend problems are
/// absorbed at the store boundary (logged, or reported through
/// [`crate::WriteOutcome`]) so consumers always keep a valid document.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("content serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for content store operations.
pub type SyncResult<T> = Result<T, SyncError>;
