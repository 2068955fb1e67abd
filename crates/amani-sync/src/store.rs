use std::sync::{Arc, Mutex, RwLock};

use serde_json::{Map, Value};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use amani_store::{BackendError, DocumentBackend, SnapshotCache, WatchEvent, WatchStream};
use amani_types::{SectionPatch, SiteContent};

use crate::error::SyncResult;
use crate::merge::merge_value;
use crate::normalize::normalize_gallery;
use crate::state::{ContentEvent, SyncPhase, UpdateOrigin, WriteOutcome};

/// Cache key the serialized document is stored under.
pub const CONTENT_CACHE_KEY: &str = "site_content_v1";

/// Capacity of the subscriber broadcast channel.
const EVENT_CAPACITY: usize = 64;

struct Shared {
    content: SiteContent,
    phase: SyncPhase,
    /// Cleared by the first remote response (snapshot or error).
    awaiting_first_response: bool,
}

/// State shared between the store handle and its watch task.
struct Inner {
    cache: Arc<dyn SnapshotCache>,
    shared: RwLock<Shared>,
    events: broadcast::Sender<ContentEvent>,
}

/// Single source of truth for [`SiteContent`].
///
/// Construct one store at process start and hand it by reference to every
/// consumer; public pages read through [`content`](Self::content) and
/// [`subscribe`](Self::subscribe), the admin surface writes through
/// [`update_section`](Self::update_section).
///
/// The in-memory document and the cache are mutated only here. A write
/// updates both before any remote round-trip, so a consumer always sees
/// its own edit immediately, and the in-memory document is never behind
/// the cache.
pub struct ContentStore {
    inner: Arc<Inner>,
    backend: Option<Arc<dyn DocumentBackend>>,
    watch_task: Mutex<Option<JoinHandle<()>>>,
}

impl ContentStore {
    /// Open a store over the given tiers.
    ///
    /// Bootstraps synchronously: the best locally-available snapshot
    /// (cache merged over defaults, or defaults outright) is readable the
    /// moment this returns; consumers never see an empty document. Pass
    /// `None` as the backend when no real project is configured; the
    /// session then serves local content only.
    ///
    /// Call [`attach`](Self::attach) afterwards to start following the
    /// remote document.
    pub fn open(
        cache: Arc<dyn SnapshotCache>,
        backend: Option<Arc<dyn DocumentBackend>>,
    ) -> Self {
        let content = bootstrap_snapshot(cache.as_ref());
        let phase = if backend.is_some() {
            SyncPhase::Connecting
        } else {
            info!("no remote backend configured; serving local content only");
            SyncPhase::Offline
        };
        let awaiting_first_response = backend.is_some();
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            inner: Arc::new(Inner {
                cache,
                shared: RwLock::new(Shared {
                    content,
                    phase,
                    awaiting_first_response,
                }),
                events,
            }),
            backend,
            watch_task: Mutex::new(None),
        }
    }

    /// Attach the live remote subscription.
    ///
    /// Spawns a task that follows the watch stream for the rest of the
    /// session. A subscription that cannot be opened (permission denied,
    /// misconfiguration) routes the session offline; the locally-seeded
    /// snapshot keeps serving.
    pub async fn attach(&self) {
        let Some(backend) = self.backend.clone() else {
            return;
        };
        {
            let task = self.watch_task.lock().expect("lock poisoned");
            if task.is_some() {
                return;
            }
        }

        let stream = match backend.watch().await {
            Ok(stream) => stream,
            Err(e) => {
                self.inner.go_offline(&e.to_string());
                return;
            }
        };

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(follow(inner, stream));
        *self.watch_task.lock().expect("lock poisoned") = Some(handle);
    }

    /// Stop following the remote document. No callbacks fire afterwards.
    pub fn detach(&self) {
        if let Some(handle) = self.watch_task.lock().expect("lock poisoned").take() {
            handle.abort();
        }
    }

    /// A snapshot of the current document. Always fully shaped.
    pub fn content(&self) -> SiteContent {
        self.inner
            .shared
            .read()
            .expect("lock poisoned")
            .content
            .clone()
    }

    /// Current sync phase.
    pub fn phase(&self) -> SyncPhase {
        self.inner.shared.read().expect("lock poisoned").phase
    }

    /// Returns `true` until the first remote response (snapshot or error)
    /// has been received. A store opened without a backend is never
    /// loading.
    pub fn is_loading(&self) -> bool {
        self.inner
            .shared
            .read()
            .expect("lock poisoned")
            .awaiting_first_response
    }

    /// Subscribe to store events.
    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.inner.events.subscribe()
    }

    /// Replace one section of the document.
    ///
    /// The in-memory document and the cache carry the new value before any
    /// remote I/O starts, and keep it whatever the remote outcome: a
    /// failed remote write is reported in the [`WriteOutcome`], never
    /// rolled back. When the remote document does not exist yet, the
    /// partial write falls back to a create-with-merge of the full
    /// document.
    pub async fn update_section(&self, patch: SectionPatch) -> SyncResult<WriteOutcome> {
        let kind = patch.kind();
        let (document, offline) = {
            let mut shared = self.inner.shared.write().expect("lock poisoned");
            shared.content.apply(patch);
            let document = serde_json::to_value(&shared.content)?;
            self.inner.refresh_cache(&document);
            (document, shared.phase == SyncPhase::Offline)
        };
        let _ = self
            .inner
            .events
            .send(ContentEvent::Updated(UpdateOrigin::Local));

        let backend = match (&self.backend, offline) {
            (Some(backend), false) => backend,
            _ => return Ok(WriteOutcome::CacheOnly),
        };

        let section_value = document.get(kind.as_str()).cloned().unwrap_or(Value::Null);
        let mut fields = Map::new();
        fields.insert(kind.as_str().to_string(), section_value);

        match backend.update_fields(fields).await {
            Ok(()) => {
                debug!(section = %kind, "section synced to remote");
                Ok(WriteOutcome::Synced)
            }
            Err(BackendError::NotFound) => {
                debug!(section = %kind, "remote document absent; creating with merge");
                match backend.set_merged(document).await {
                    Ok(()) => Ok(WriteOutcome::Synced),
                    Err(e) => {
                        warn!(section = %kind, error = %e, "remote create failed; edit kept locally");
                        Ok(WriteOutcome::RemoteFailed {
                            reason: e.to_string(),
                        })
                    }
                }
            }
            Err(e) => {
                warn!(section = %kind, error = %e, "remote write failed; edit kept locally");
                Ok(WriteOutcome::RemoteFailed {
                    reason: e.to_string(),
                })
            }
        }
    }
}

impl Drop for ContentStore {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Consume the watch stream until it closes or the subscription is lost.
async fn follow(inner: Arc<Inner>, mut stream: WatchStream) {
    while let Some(event) = stream.recv().await {
        match event {
            WatchEvent::Snapshot(Some(value)) => inner.apply_remote(value),
            WatchEvent::Snapshot(None) => inner.keep_local_snapshot(),
            WatchEvent::Lost(reason) => {
                inner.go_offline(&reason);
                return;
            }
        }
    }
}

impl Inner {
    /// A remote snapshot arrived: it becomes the document, wholesale
    /// (last-writer-wins), and refreshes the cache.
    fn apply_remote(&self, value: Value) {
        let content = hydrate(value, "remote");
        let phase_changed = {
            let mut shared = self.shared.write().expect("lock poisoned");
            shared.content = content;
            shared.awaiting_first_response = false;
            let changed = shared.phase != SyncPhase::Synced;
            shared.phase = SyncPhase::Synced;
            match serde_json::to_value(&shared.content) {
                Ok(document) => self.refresh_cache(&document),
                Err(e) => warn!(error = %e, "content failed to serialize; cache not refreshed"),
            }
            changed
        };
        if phase_changed {
            let _ = self.events.send(ContentEvent::PhaseChanged(SyncPhase::Synced));
        }
        let _ = self.events.send(ContentEvent::Updated(UpdateOrigin::Remote));
        debug!("remote snapshot applied");
    }

    /// The remote document does not exist: the locally-seeded snapshot
    /// stays the working value, nothing is overwritten.
    fn keep_local_snapshot(&self) {
        let phase_changed = {
            let mut shared = self.shared.write().expect("lock poisoned");
            shared.awaiting_first_response = false;
            let changed = shared.phase != SyncPhase::Synced;
            shared.phase = SyncPhase::Synced;
            changed
        };
        debug!("remote document absent; keeping local snapshot");
        if phase_changed {
            let _ = self.events.send(ContentEvent::PhaseChanged(SyncPhase::Synced));
        }
    }

    fn go_offline(&self, reason: &str) {
        {
            let mut shared = self.shared.write().expect("lock poisoned");
            if shared.phase == SyncPhase::Offline {
                return;
            }
            shared.phase = SyncPhase::Offline;
            shared.awaiting_first_response = false;
        }
        warn!(reason, "remote unavailable; continuing with local content");
        let _ = self.events.send(ContentEvent::PhaseChanged(SyncPhase::Offline));
    }

    /// Best-effort cache refresh; failures are logged, never fatal.
    fn refresh_cache(&self, document: &Value) {
        if let Err(e) = self.cache.put(CONTENT_CACHE_KEY, &document.to_string()) {
            warn!(error = %e, "cache refresh failed");
        }
    }
}

/// Compute the initial snapshot from the cache tier, falling back to the
/// built-in defaults on a missing or corrupt entry.
fn bootstrap_snapshot(cache: &dyn SnapshotCache) -> SiteContent {
    let raw = match cache.get(CONTENT_CACHE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return SiteContent::seed(),
        Err(e) => {
            warn!(error = %e, "cache read failed; using built-in defaults");
            return SiteContent::seed();
        }
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => hydrate(value, "cache"),
        Err(e) => {
            warn!(error = %e, "cached content is corrupt; using built-in defaults");
            SiteContent::seed()
        }
    }
}

/// Turn a raw document from either tier into a fully-shaped
/// [`SiteContent`]: merge over the defaults, migrate the legacy gallery,
/// decode. Both read paths go through here so they present one shape.
fn hydrate(overlay: Value, source: &str) -> SiteContent {
    let defaults = match serde_json::to_value(SiteContent::seed()) {
        Ok(defaults) => defaults,
        // Unreachable: the seed always serializes.
        Err(_) => return SiteContent::seed(),
    };
    let mut merged = merge_value(defaults, overlay);
    if normalize_gallery(&mut merged) {
        info!(source, "migrated legacy gallery entries");
    }
    match serde_json::from_value(merged) {
        Ok(content) => content,
        Err(e) => {
            warn!(source, error = %e, "document failed to decode; using built-in defaults");
            SiteContent::seed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use serde_json::json;
    use tokio::time::timeout;

    use amani_store::{InMemoryBackend, MemoryCache};
    use amani_types::{Contact, Hero, MediaCategory, MediaKind};

    fn new_hero(headline: &str) -> Hero {
        Hero {
            headline: headline.into(),
            subheadline: "sub".into(),
            hero_image: "https://example.org/hero.jpg".into(),
        }
    }

    fn new_contact() -> Contact {
        Contact {
            address: "1 New Street".into(),
            email: "new@example.org".into(),
            phone: "+1".into(),
            whatsapp: "+1".into(),
            bank_details: "bank".into(),
            mobile_money: "mm".into(),
            socials: None,
        }
    }

    async fn next_event(rx: &mut broadcast::Receiver<ContentEvent>) -> ContentEvent {
        timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event channel closed")
    }

    /// Drive the event stream until the store reaches the given phase.
    async fn wait_for_phase(
        store: &ContentStore,
        rx: &mut broadcast::Receiver<ContentEvent>,
        phase: SyncPhase,
    ) {
        while store.phase() != phase {
            next_event(rx).await;
        }
    }

    // -----------------------------------------------------------------------
    // Bootstrap: cache present / absent / corrupt
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn empty_cache_bootstraps_to_defaults() {
        let store = ContentStore::open(Arc::new(MemoryCache::new()), None);
        let content = store.content();
        assert_eq!(content, SiteContent::seed());
        assert_eq!(store.phase(), SyncPhase::Offline);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn corrupt_cache_falls_back_to_defaults() {
        let cache = Arc::new(MemoryCache::new());
        cache.put(CONTENT_CACHE_KEY, "{not json").unwrap();

        let store = ContentStore::open(cache, None);
        assert_eq!(store.content(), SiteContent::seed());
    }

    #[tokio::test]
    async fn partial_cache_merges_over_defaults() {
        let cache = Arc::new(MemoryCache::new());
        cache
            .put(CONTENT_CACHE_KEY, r#"{"hero": {"headline": "Old"}}"#)
            .unwrap();

        let store = ContentStore::open(cache, None);
        let content = store.content();
        assert_eq!(content.hero.headline, "Old");
        // The missing subheadline comes from the defaults.
        assert_eq!(
            content.hero.subheadline,
            SiteContent::seed().hero.subheadline
        );
        assert_eq!(content.contact, SiteContent::seed().contact);
    }

    #[tokio::test]
    async fn legacy_gallery_in_cache_is_normalized() {
        let cache = Arc::new(MemoryCache::new());
        cache
            .put(CONTENT_CACHE_KEY, r#"{"gallery": ["http://a", "http://b"]}"#)
            .unwrap();

        let store = ContentStore::open(cache, None);
        let gallery = store.content().gallery;
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery[0].url, "http://a");
        assert_eq!(gallery[1].url, "http://b");
    }

    // -----------------------------------------------------------------------
    // Attach: remote delivery, absent document, failures
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn remote_snapshot_replaces_document_and_refreshes_cache() {
        let cache = Arc::new(MemoryCache::new());
        let backend = Arc::new(InMemoryBackend::with_document(
            json!({"hero": {"headline": "From remote"}}),
        ));
        let store = ContentStore::open(cache.clone(), Some(backend));
        assert!(store.is_loading());
        assert_eq!(store.phase(), SyncPhase::Connecting);

        let mut rx = store.subscribe();
        store.attach().await;
        wait_for_phase(&store, &mut rx, SyncPhase::Synced).await;

        assert_eq!(store.content().hero.headline, "From remote");
        assert!(!store.is_loading());

        // The cache now holds the merged remote document.
        let cached = cache.get(CONTENT_CACHE_KEY).unwrap().unwrap();
        assert!(cached.contains("From remote"));
    }

    #[tokio::test]
    async fn absent_remote_document_keeps_local_snapshot() {
        let cache = Arc::new(MemoryCache::new());
        cache
            .put(CONTENT_CACHE_KEY, r#"{"hero": {"headline": "Local edit"}}"#)
            .unwrap();
        let backend = Arc::new(InMemoryBackend::new());
        let store = ContentStore::open(cache, Some(backend));

        let mut rx = store.subscribe();
        store.attach().await;
        wait_for_phase(&store, &mut rx, SyncPhase::Synced).await;

        assert_eq!(store.content().hero.headline, "Local edit");
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn denied_subscription_goes_offline() {
        let backend = Arc::new(InMemoryBackend::new());
        backend.set_deny_reads(true);
        let store = ContentStore::open(Arc::new(MemoryCache::new()), Some(backend));

        store.attach().await;
        assert_eq!(store.phase(), SyncPhase::Offline);
        assert!(!store.is_loading());
        assert_eq!(store.content(), SiteContent::seed());
    }

    #[tokio::test]
    async fn lost_subscription_goes_offline_mid_session() {
        let backend = Arc::new(InMemoryBackend::with_document(json!({})));
        let store = ContentStore::open(Arc::new(MemoryCache::new()), Some(backend.clone()));

        let mut rx = store.subscribe();
        store.attach().await;
        wait_for_phase(&store, &mut rx, SyncPhase::Synced).await;

        backend.drop_subscriptions("network gone");
        wait_for_phase(&store, &mut rx, SyncPhase::Offline).await;

        // Offline is terminal: writes no longer reach the backend.
        let attempts_before = backend.write_attempts();
        let outcome = store
            .update_section(SectionPatch::Hero(new_hero("After loss")))
            .await
            .unwrap();
        assert_eq!(outcome, WriteOutcome::CacheOnly);
        assert_eq!(backend.write_attempts(), attempts_before);
    }

    #[tokio::test]
    async fn legacy_gallery_from_remote_is_normalized() {
        let backend = Arc::new(InMemoryBackend::with_document(
            json!({"gallery": ["http://a", "http://b"]}),
        ));
        let store = ContentStore::open(Arc::new(MemoryCache::new()), Some(backend));

        let mut rx = store.subscribe();
        store.attach().await;
        wait_for_phase(&store, &mut rx, SyncPhase::Synced).await;

        let gallery = store.content().gallery;
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery[0].url, "http://a");
        assert_eq!(gallery[0].category, MediaCategory::General);
        assert_eq!(gallery[0].kind, MediaKind::Image);
    }

    #[tokio::test]
    async fn second_session_edits_flow_in() {
        let backend = Arc::new(InMemoryBackend::with_document(json!({})));
        let store = ContentStore::open(Arc::new(MemoryCache::new()), Some(backend.clone()));

        let mut rx = store.subscribe();
        store.attach().await;
        wait_for_phase(&store, &mut rx, SyncPhase::Synced).await;

        backend.put_document(json!({"hero": {"headline": "Other session"}}));
        // Deliveries apply before their event is broadcast, so drive the
        // stream until the edit shows up.
        timeout(Duration::from_secs(1), async {
            while store.content().hero.headline != "Other session" {
                next_event(&mut rx).await;
            }
        })
        .await
        .expect("remote edit never arrived");
    }

    #[tokio::test]
    async fn detach_stops_deliveries() {
        let backend = Arc::new(InMemoryBackend::with_document(json!({})));
        let store = ContentStore::open(Arc::new(MemoryCache::new()), Some(backend.clone()));

        let mut rx = store.subscribe();
        store.attach().await;
        wait_for_phase(&store, &mut rx, SyncPhase::Synced).await;

        store.detach();
        tokio::task::yield_now().await;
        let before = store.content();
        backend.put_document(json!({"hero": {"headline": "Ignored"}}));
        tokio::task::yield_now().await;
        assert_eq!(store.content(), before);
    }

    // -----------------------------------------------------------------------
    // update_section: optimistic writes
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn offline_write_is_cache_only() {
        let cache = Arc::new(MemoryCache::new());
        let store = ContentStore::open(cache.clone(), None);

        let contact = new_contact();
        let outcome = store
            .update_section(SectionPatch::Contact(contact.clone()))
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::CacheOnly);
        assert_eq!(store.content().contact, contact);
        let cached = cache.get(CONTENT_CACHE_KEY).unwrap().unwrap();
        assert!(cached.contains("new@example.org"));
    }

    #[tokio::test]
    async fn failed_remote_write_keeps_optimistic_state() {
        let cache = Arc::new(MemoryCache::new());
        let backend = Arc::new(InMemoryBackend::with_document(json!({})));
        let store = ContentStore::open(cache.clone(), Some(backend.clone()));

        let mut rx = store.subscribe();
        store.attach().await;
        wait_for_phase(&store, &mut rx, SyncPhase::Synced).await;

        backend.set_fail_writes(true);
        let outcome = store
            .update_section(SectionPatch::Hero(new_hero("Optimistic")))
            .await
            .unwrap();

        assert!(matches!(outcome, WriteOutcome::RemoteFailed { .. }));
        // The edit is visible and cached despite the failure.
        assert_eq!(store.content().hero.headline, "Optimistic");
        let cached = cache.get(CONTENT_CACHE_KEY).unwrap().unwrap();
        assert!(cached.contains("Optimistic"));
    }

    #[tokio::test]
    async fn successful_write_reaches_backend() {
        let backend = Arc::new(InMemoryBackend::with_document(json!({})));
        let store = ContentStore::open(Arc::new(MemoryCache::new()), Some(backend.clone()));

        let mut rx = store.subscribe();
        store.attach().await;
        wait_for_phase(&store, &mut rx, SyncPhase::Synced).await;

        let outcome = store
            .update_section(SectionPatch::Hero(new_hero("Synced headline")))
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Synced);
        let doc = backend.document().unwrap();
        assert_eq!(doc["hero"]["headline"], "Synced headline");
        // Only the hero field was written remotely.
        assert!(doc.get("contact").is_none());
    }

    #[tokio::test]
    async fn write_creates_remote_document_when_absent() {
        let backend = Arc::new(InMemoryBackend::new());
        let store = ContentStore::open(Arc::new(MemoryCache::new()), Some(backend.clone()));

        let mut rx = store.subscribe();
        store.attach().await;
        wait_for_phase(&store, &mut rx, SyncPhase::Synced).await;

        let outcome = store
            .update_section(SectionPatch::Hero(new_hero("First write")))
            .await
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Synced);
        // The fallback wrote the full document, not just the section.
        let doc = backend.document().unwrap();
        assert_eq!(doc["hero"]["headline"], "First write");
        assert!(doc.get("contact").is_some());
    }

    #[tokio::test]
    async fn local_edit_emits_updated_event() {
        let store = ContentStore::open(Arc::new(MemoryCache::new()), None);
        let mut rx = store.subscribe();

        store
            .update_section(SectionPatch::Hero(new_hero("Event")))
            .await
            .unwrap();

        assert_eq!(
            next_event(&mut rx).await,
            ContentEvent::Updated(UpdateOrigin::Local)
        );
    }
}
