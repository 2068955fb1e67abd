use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::id::EntityId;

/// Whether a stored media reference points at an image or a video.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}

impl FromStr for MediaKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            other => Err(TypeError::UnknownKind(other.to_string())),
        }
    }
}

/// Category tag shown as a filter in the public gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaCategory {
    Education,
    Community,
    Welfare,
    #[default]
    General,
}

impl MediaCategory {
    /// All categories, in display order.
    pub const ALL: [MediaCategory; 4] = [
        Self::Education,
        Self::Community,
        Self::Welfare,
        Self::General,
    ];
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Education => write!(f, "Education"),
            Self::Community => write!(f, "Community"),
            Self::Welfare => write!(f, "Welfare"),
            Self::General => write!(f, "General"),
        }
    }
}

impl FromStr for MediaCategory {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "education" => Ok(Self::Education),
            "community" => Ok(Self::Community),
            "welfare" => Ok(Self::Welfare),
            "general" => Ok(Self::General),
            other => Err(TypeError::UnknownCategory(other.to_string())),
        }
    }
}

/// One normalized gallery entry.
///
/// Every gallery entry reaching a consumer has this shape, regardless of how
/// it was stored. Legacy documents that kept bare URL strings are converted
/// on each read path before the value is handed out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: EntityId,
    /// Public URL of the asset.
    pub url: String,
    /// Reference id in the external media storage, used for bookkeeping.
    /// Legacy entries carry [`MediaItem::LEGACY_STORAGE_REF`].
    pub storage_ref: String,
    pub kind: MediaKind,
    pub category: MediaCategory,
    /// Client-side creation time, stamped at the moment of upsert.
    pub created_at: DateTime<Utc>,
}

impl MediaItem {
    /// Sentinel storage reference for entries recovered from the legacy
    /// bare-URL gallery representation.
    pub const LEGACY_STORAGE_REF: &'static str = "legacy";
}
