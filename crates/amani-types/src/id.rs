use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for an entry in an entity collection.
///
/// Stored as a plain string so that seed data and legacy documents can carry
/// readable ids, while freshly created entities get a time-ordered UUID v7
/// token. The nil (empty) id marks a draft entity that has not been
/// assigned an identity yet; upsert assigns one before the entity is
/// written anywhere.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a new collision-resistant id (UUID v7).
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The nil id: a draft entity with no identity assigned.
    pub const fn nil() -> Self {
        Self(String::new())
    }

    /// Returns `true` for the nil (unassigned) id.
    pub fn is_nil(&self) -> bool {
        self.0.is_empty()
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short representation (first 8 bytes) for display. Falls back to the
    /// whole id when it is shorter or not sliceable at that boundary.
    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::nil()
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            write!(f, "EntityId(nil)")
        } else {
            write!(f, "EntityId({})", self.short())
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
