use async_trait::async_trait;

use amani_types::MediaKind;

use crate::error::{SdkError, SdkResult};

/// A file handed to the upload collaborator.
#[derive(Clone, Debug)]
pub struct MediaBlob {
    pub file_name: String,
    /// MIME type, used to classify the asset as image or video.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// What the upload collaborator returns on success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedMedia {
    /// Public URL of the stored asset.
    pub url: String,
    /// Reference id in the external storage service.
    pub storage_ref: String,
    pub kind: MediaKind,
}

/// External media storage, fire-and-forget: one call, one URL back.
///
/// The engine never calls this itself; editors upload first, then hand
/// the result to the gallery upsert path.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, blob: MediaBlob) -> SdkResult<UploadedMedia>;
}

/// Uploader for local and demo sessions: derives a deterministic URL from
/// the file name instead of talking to any storage service.
pub struct InlineUploader {
    base_url: String,
}

impl InlineUploader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MediaUploader for InlineUploader {
    async fn upload(&self, blob: MediaBlob) -> SdkResult<UploadedMedia> {
        if blob.file_name.is_empty() {
            return Err(SdkError::Upload("file name is empty".into()));
        }
        let kind = if blob.content_type.starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::Image
        };
        Ok(UploadedMedia {
            url: format!("{}/{}", self.base_url.trim_end_matches('/'), blob.file_name),
            storage_ref: format!("inline/{}", blob.file_name),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(file_name: &str, content_type: &str) -> MediaBlob {
        MediaBlob {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: vec![0u8; 4],
        }
    }

    #[tokio::test]
    async fn classifies_kind_from_content_type() {
        let uploader = InlineUploader::new("https://media.example.org");

        let image = uploader.upload(blob("a.jpg", "image/jpeg")).await.unwrap();
        assert_eq!(image.kind, MediaKind::Image);

        let video = uploader.upload(blob("b.mp4", "video/mp4")).await.unwrap();
        assert_eq!(video.kind, MediaKind::Video);
    }

    #[tokio::test]
    async fn builds_url_and_storage_ref() {
        let uploader = InlineUploader::new("https://media.example.org/");
        let result = uploader.upload(blob("pic.png", "image/png")).await.unwrap();
        assert_eq!(result.url, "https://media.example.org/pic.png");
        assert_eq!(result.storage_ref, "inline/pic.png");
    }

    #[tokio::test]
    async fn rejects_nameless_files() {
        let uploader = InlineUploader::new("https://media.example.org");
        assert!(uploader.upload(blob("", "image/png")).await.is_err());
    }
}
