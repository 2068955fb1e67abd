//! The Amani content store.
//!
//! [`ContentStore`] is the single source of truth for [`SiteContent`],
//! layered over three tiers: a remote document backend, a local snapshot
//! cache, and built-in defaults. Consumers always see a fully-shaped
//! document: the store bootstraps synchronously from the best local tier,
//! then attaches to the remote document and follows its changes. When the
//! backend is unreachable, misconfigured, or absent, the session degrades
//! to local-only operation and every write lands in the cache alone.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use amani_store::MemoryCache;
//! use amani_sync::ContentStore;
//!
//! let cache = Arc::new(MemoryCache::new());
//! let store = ContentStore::open(cache, None);
//! assert!(!store.content().hero.headline.is_empty());
//! ```
//!
//! [`SiteContent`]: amani_types::SiteContent

pub mod error;
pub mod merge;
pub mod normalize;
pub mod state;
pub mod store;

pub use error::{SyncError, SyncResult};
pub use merge::merge_value;
pub use normalize::normalize_gallery;
pub use state::{ContentEvent, SyncPhase, UpdateOrigin, WriteOutcome};
pub use store::{ContentStore, CONTENT_CACHE_KEY};
