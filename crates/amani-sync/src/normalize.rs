//! Legacy gallery migration.
//!
//! Early revisions of the site stored the gallery as a bare array of URL
//! strings. Documents written back then still live in caches and in the
//! remote store, so every read path runs this normalization before the
//! value reaches a consumer: both tiers must present the same
//! [`MediaItem`] shape no matter when the data was written.
//!
//! [`MediaItem`]: amani_types::MediaItem

use chrono::Utc;
use serde_json::{json, Value};

use amani_types::{MediaCategory, MediaItem, MediaKind};

/// Convert legacy bare-string gallery entries to the [`MediaItem`] shape,
/// in place. Returns `true` if any entry was converted.
///
/// Already-normalized entries pass through untouched, so the operation is
/// idempotent. Converted entries get an index-derived synthetic id, the
/// original string as `url`, the legacy sentinel storage reference, image
/// kind, the `General` category, and a fresh timestamp.
///
/// [`MediaItem`]: amani_types::MediaItem
pub fn normalize_gallery(document: &mut Value) -> bool {
    let Some(Value::Array(entries)) = document.get_mut("gallery") else {
        return false;
    };
    if !entries.iter().any(Value::is_string) {
        return false;
    }

    let now = Utc::now();
    for (index, entry) in entries.iter_mut().enumerate() {
        if let Value::String(url) = entry {
            *entry = json!({
                "id": format!("legacy-{index}"),
                "url": std::mem::take(url),
                "storage_ref": MediaItem::LEGACY_STORAGE_REF,
                "kind": MediaKind::Image,
                "category": MediaCategory::General,
                "created_at": now,
            });
        }
    }
    true
}
