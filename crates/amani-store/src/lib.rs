//! Backing tiers for the Amani content engine.
//!
//! The content store composes two storage tiers behind explicit seams:
//!
//! - [`SnapshotCache`] — a synchronous key-value cache on the local device,
//!   large enough to hold the whole serialized document. Implemented by
//!   [`MemoryCache`] (tests, embedding) and [`FileCache`] (on disk).
//! - [`DocumentBackend`] — the remote document database: a live watch
//!   subscription plus merge-semantics writes. Implemented here by
//!   [`InMemoryBackend`], an in-process fake with failure injection that
//!   stands in for a hosted backend during tests and demos.
//!
//! [`BackendConfig`] is the one environment-driven input: a configuration
//! blob whose well-known placeholder value signals "no real backend
//! configured", routing the session to local-only operation.

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use config::BackendConfig;
pub use error::{BackendError, BackendResult, CacheError, CacheResult};
pub use file::FileCache;
pub use memory::{InMemoryBackend, MemoryCache};
pub use traits::{DocumentBackend, SnapshotCache, WatchEvent, WatchStream};
