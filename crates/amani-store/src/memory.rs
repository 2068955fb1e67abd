//! In-memory tier implementations for tests, demos, and embedding.
//!
//! [`MemoryCache`] is a `HashMap` behind an `RwLock`. [`InMemoryBackend`]
//! is a full in-process stand-in for the remote document database: it
//! supports live watch subscriptions with fan-out, merge-semantics writes,
//! and failure injection so offline and degraded scenarios can be driven
//! deterministically.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::mpsc;

use crate::error::{BackendError, BackendResult, CacheResult};
use crate::traits::{DocumentBackend, SnapshotCache, WatchEvent, WatchStream};

/// An in-memory [`SnapshotCache`]. Data is lost when the cache is dropped.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }
}

impl SnapshotCache for MemoryCache {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> CacheResult<()> {
        let mut entries = self.entries.write().expect("lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// In-process fake of the remote document database.
///
/// Holds a single optional document. Watchers receive the current snapshot
/// on subscription and another snapshot after every write; closed watcher
/// channels are pruned on the next delivery.
pub struct InMemoryBackend {
    document: RwLock<Option<Value>>,
    watchers: Mutex<Vec<mpsc::UnboundedSender<WatchEvent>>>,
    deny_reads: AtomicBool,
    fail_writes: AtomicBool,
    write_attempts: AtomicUsize,
}

impl InMemoryBackend {
    /// Create a backend with no document.
    pub fn new() -> Self {
        Self {
            document: RwLock::new(None),
            watchers: Mutex::new(Vec::new()),
            deny_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            write_attempts: AtomicUsize::new(0),
        }
    }

    /// Create a backend already holding `document`.
    pub fn with_document(document: Value) -> Self {
        let backend = Self::new();
        *backend.document.write().expect("lock poisoned") = Some(document);
        backend
    }

    /// When set, `watch` fails with `PermissionDenied`.
    pub fn set_deny_reads(&self, deny: bool) {
        self.deny_reads.store(deny, Ordering::SeqCst);
    }

    /// When set, all writes fail with `Unavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of write operations attempted, including failed ones.
    pub fn write_attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }

    /// The current document, if any.
    pub fn document(&self) -> Option<Value> {
        self.document.read().expect("lock poisoned").clone()
    }

    /// Replace the document outright and notify watchers, as an edit from
    /// another session would.
    pub fn put_document(&self, document: Value) {
        *self.document.write().expect("lock poisoned") = Some(document);
        self.broadcast();
    }

    /// Kill all live subscriptions, as a mid-session permission revocation
    /// or network drop would.
    pub fn drop_subscriptions(&self, reason: &str) {
        let mut watchers = self.watchers.lock().expect("lock poisoned");
        for sender in watchers.drain(..) {
            let _ = sender.send(WatchEvent::Lost(reason.to_string()));
        }
    }

    fn broadcast(&self) {
        let snapshot = self.document();
        let mut watchers = self.watchers.lock().expect("lock poisoned");
        // Prune watchers whose receivers are gone.
        watchers.retain(|sender| sender.send(WatchEvent::Snapshot(snapshot.clone())).is_ok());
    }

    fn check_writable(&self) -> BackendResult<()> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(BackendError::Unavailable("write failure injected".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentBackend for InMemoryBackend {
    async fn watch(&self) -> BackendResult<WatchStream> {
        if self.deny_reads.load(Ordering::SeqCst) {
            return Err(BackendError::PermissionDenied);
        }
        let (tx, rx) = mpsc::unbounded_channel();
        // Initial delivery: the current state, before any change events.
        let snapshot = self.document();
        let _ = tx.send(WatchEvent::Snapshot(snapshot));
        self.watchers.lock().expect("lock poisoned").push(tx);
        Ok(rx)
    }

    async fn update_fields(&self, fields: Map<String, Value>) -> BackendResult<()> {
        self.check_writable()?;
        {
            let mut document = self.document.write().expect("lock poisoned");
            let Some(Value::Object(existing)) = document.as_mut() else {
                return Err(BackendError::NotFound);
            };
            for (key, value) in fields {
                existing.insert(key, value);
            }
        }
        self.broadcast();
        Ok(())
    }

    async fn set_merged(&self, incoming: Value) -> BackendResult<()> {
        self.check_writable()?;
        {
            let mut document = self.document.write().expect("lock poisoned");
            let merged = match (document.take(), incoming) {
                (Some(Value::Object(mut existing)), Value::Object(fields)) => {
                    for (key, value) in fields {
                        existing.insert(key, value);
                    }
                    Value::Object(existing)
                }
                (_, incoming) => incoming,
            };
            *document = Some(merged);
        }
        self.broadcast();
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBackend")
            .field("has_document", &self.document().is_some())
            .field("write_attempts", &self.write_attempts())
            .finish()
    }
}
