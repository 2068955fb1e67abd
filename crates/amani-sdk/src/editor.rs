use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use amani_sync::{ContentStore, WriteOutcome};
use amani_types::{
    ChildProfile, Entity, EntityId, MediaCategory, MediaItem, Program, SectionPatch, Story,
};

use crate::error::SdkResult;
use crate::upload::UploadedMedia;

/// Where a new entity lands in its collection.
///
/// Programs, children, and stories append (newest-last, matching page
/// order); the gallery prepends so fresh uploads show first. This is a
/// deliberate per-collection policy, not a generic rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    Append,
    Prepend,
}

/// Outcome of an upsert: the entity's id (freshly generated for drafts)
/// and how far the write propagated.
#[derive(Clone, Debug)]
pub struct EditResult {
    pub id: EntityId,
    pub outcome: WriteOutcome,
}

/// Create/update/delete semantics over the entity collections.
///
/// Every single-entity edit round-trips the entire collection through one
/// `update_section` call; the store has no per-entity write granularity.
/// Construct one editor per admin session and pass the store in
/// explicitly.
pub struct ContentEditor {
    store: Arc<ContentStore>,
}

impl ContentEditor {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    /// The store this editor writes through.
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    // ---- Programs ----

    pub async fn upsert_program(&self, program: Program) -> SdkResult<EditResult> {
        let (programs, id) = upsert(self.store.content().programs, program, Placement::Append);
        let outcome = self
            .store
            .update_section(SectionPatch::Programs(programs))
            .await?;
        debug!(id = %id, "program upserted");
        Ok(EditResult { id, outcome })
    }

    pub async fn delete_program(&self, id: &EntityId) -> SdkResult<WriteOutcome> {
        let programs = remove(self.store.content().programs, id);
        Ok(self
            .store
            .update_section(SectionPatch::Programs(programs))
            .await?)
    }

    // ---- Children ----

    pub async fn upsert_child(&self, child: ChildProfile) -> SdkResult<EditResult> {
        let (children, id) = upsert(self.store.content().children, child, Placement::Append);
        let outcome = self
            .store
            .update_section(SectionPatch::Children(children))
            .await?;
        debug!(id = %id, "child profile upserted");
        Ok(EditResult { id, outcome })
    }

    pub async fn delete_child(&self, id: &EntityId) -> SdkResult<WriteOutcome> {
        let children = remove(self.store.content().children, id);
        Ok(self
            .store
            .update_section(SectionPatch::Children(children))
            .await?)
    }

    // ---- Stories ----

    pub async fn upsert_story(&self, story: Story) -> SdkResult<EditResult> {
        let (stories, id) = upsert(self.store.content().stories, story, Placement::Append);
        let outcome = self
            .store
            .update_section(SectionPatch::Stories(stories))
            .await?;
        debug!(id = %id, "story upserted");
        Ok(EditResult { id, outcome })
    }

    pub async fn delete_story(&self, id: &EntityId) -> SdkResult<WriteOutcome> {
        let stories = remove(self.store.content().stories, id);
        Ok(self
            .store
            .update_section(SectionPatch::Stories(stories))
            .await?)
    }

    // ---- Gallery ----

    /// Add a finished upload to the gallery.
    ///
    /// The item is stamped with the category chosen in the editor and a
    /// client-side timestamp taken now, at the moment of upsert, not when
    /// the upload completed.
    pub async fn add_gallery_item(
        &self,
        upload: UploadedMedia,
        category: MediaCategory,
    ) -> SdkResult<EditResult> {
        let item = MediaItem {
            id: EntityId::nil(),
            url: upload.url,
            storage_ref: upload.storage_ref,
            kind: upload.kind,
            category,
            created_at: Utc::now(),
        };
        self.upsert_gallery_item(item).await
    }

    pub async fn upsert_gallery_item(&self, item: MediaItem) -> SdkResult<EditResult> {
        let (gallery, id) = upsert(self.store.content().gallery, item, Placement::Prepend);
        let outcome = self
            .store
            .update_section(SectionPatch::Gallery(gallery))
            .await?;
        debug!(id = %id, "gallery item upserted");
        Ok(EditResult { id, outcome })
    }

    /// Remove a gallery entry. The asset itself stays in external storage;
    /// deleting there requires a signed server-side call, so only the
    /// reference is dropped.
    pub async fn delete_gallery_item(&self, id: &EntityId) -> SdkResult<WriteOutcome> {
        let gallery = remove(self.store.content().gallery, id);
        Ok(self
            .store
            .update_section(SectionPatch::Gallery(gallery))
            .await?)
    }
}

/// Upsert `entity` into `items`.
///
/// A draft (nil id) gets a fresh id and is inserted per `placement`. A
/// matching id replaces the existing entry in place, preserving its
/// position; an unmatched id is inserted per `placement`.
fn upsert<T: Entity>(mut items: Vec<T>, mut entity: T, placement: Placement) -> (Vec<T>, EntityId) {
    if entity.id().is_nil() {
        entity.assign_id(EntityId::generate());
    } else if let Some(slot) = items.iter_mut().find(|item| item.id() == entity.id()) {
        let id = entity.id().clone();
        *slot = entity;
        return (items, id);
    }
    let id = entity.id().clone();
    match placement {
        Placement::Append => items.push(entity),
        Placement::Prepend => items.insert(0, entity),
    }
    (items, id)
}

/// Filter out the entity with `id`. Removing an unknown id is a no-op.
fn remove<T: Entity>(items: Vec<T>, id: &EntityId) -> Vec<T> {
    items.into_iter().filter(|item| item.id() != id).collect()
}
