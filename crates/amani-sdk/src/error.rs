use thiserror::Error;

/// Errors surfaced by the admin-side facade.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The media upload collaborator rejected the file.
    #[error("upload failed: {0}")]
    Upload(String),

    /// Error from the underlying content store.
    #[error(transparent)]
    Sync(#[from] amani_sync::SyncError),
}

/// Result alias for facade operations.
pub type SdkResult<T> = Result<T, SdkError>;
