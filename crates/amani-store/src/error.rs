use thiserror::Error;

/// Errors from the local snapshot cache tier.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The key contains characters the backing store cannot represent.
    #[error("invalid cache key: {0}")]
    InvalidKey(String),

    /// I/O error from the underlying storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors from the remote document backend.
///
/// `PermissionDenied` is the contract point the store depends on: a denied
/// or misconfigured subscription routes the session to permanent offline
/// operation.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend rejected the credentials or rules forbid access.
    #[error("permission denied")]
    PermissionDenied,

    /// The target document does not exist (partial writes cannot create it).
    #[error("document not found")]
    NotFound,

    /// The backend could not be reached or refused the operation.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Payload could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;
