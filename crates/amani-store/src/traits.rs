use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::mpsc;

use crate::error::{BackendResult, CacheResult};

/// Synchronous key-value cache on the local device.
///
/// All implementations must satisfy these invariants:
/// - `get` after `put` with the same key returns the stored value.
/// - Values are opaque strings; the cache never interprets them.
/// - Operations are synchronous: the caller may run them on the render
///   path before the first paint.
/// - A missing key is `Ok(None)`, never an error.
pub trait SnapshotCache: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> CacheResult<()>;
}

/// One delivery on a [`DocumentBackend`] watch stream.
#[derive(Clone, Debug)]
pub enum WatchEvent {
    /// The current state of the document. `None` means the document does
    /// not exist (yet).
    Snapshot(Option<Value>),
    /// The subscription died; no further events will be delivered.
    Lost(String),
}

/// Receiver half of a watch subscription.
pub type WatchStream = mpsc::UnboundedReceiver<WatchEvent>;

/// Remote document database holding the single site-content document.
///
/// The backend is an opaque capability: the store only relies on
/// - watch delivering a snapshot for every change, in the backend's own
///   causal order (last-writer-wins at the document level), and
/// - [`BackendError::NotFound`] from `update_fields` when the document has
///   never been created, so the caller can fall back to `set_merged`.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Open a live subscription to the document.
    ///
    /// The first event is a snapshot of the current state (existing or
    /// not); every subsequent change produces another snapshot. A dead
    /// subscription delivers [`WatchEvent::Lost`] once and then closes.
    async fn watch(&self) -> BackendResult<WatchStream>;

    /// Merge the given top-level fields into the document.
    ///
    /// Fails with [`BackendError::NotFound`] if the document does not
    /// exist; partial writes never create it.
    async fn update_fields(&self, fields: Map<String, Value>) -> BackendResult<()>;

    /// Write the full document with merge semantics, creating it if absent.
    async fn set_merged(&self, document: Value) -> BackendResult<()>;
}
