//! Admin-side facade for the Amani content engine.
//!
//! The content store's only write primitive replaces a whole section;
//! [`ContentEditor`] layers create/update/delete semantics for the four
//! entity collections (programs, children, stories, gallery) on top of it.
//! The media upload service and the admin authentication gate are external
//! collaborators, specified here at their interface boundary only.

pub mod auth;
pub mod editor;
pub mod error;
pub mod upload;

pub use auth::{AdminGate, OpenGate, SharedSecretGate};
pub use editor::{ContentEditor, EditResult};
pub use error::{SdkError, SdkResult};
pub use upload::{InlineUploader, MediaBlob, MediaUploader, UploadedMedia};
