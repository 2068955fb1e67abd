use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::EntityId;
use crate::media::{MediaItem, MediaKind};

/// Common id accessor for entries of an entity collection.
///
/// Collection editing is generic over this trait: a nil id marks a draft
/// that gets a fresh id assigned on upsert, any other id identifies the
/// entry to replace.
pub trait Entity {
    fn id(&self) -> &EntityId;

    fn assign_id(&mut self, id: EntityId);
}

/// A program run by the organization (education support, nutrition, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Image or video URL, per `media_kind`.
    pub image: String,
    #[serde(default)]
    pub media_kind: MediaKind,
    /// Short impact line shown on the program card ("150+ students").
    pub impact_stat: String,
}

impl Entity for Program {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

/// Profile of a child available for sponsorship.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChildProfile {
    pub id: EntityId,
    pub name: String,
    pub age: u8,
    /// What the child wants to become.
    pub dream: String,
    pub bio: String,
    pub image: String,
    pub needs_sponsorship: bool,
}

impl Entity for ChildProfile {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

/// Editorial category of a published story.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoryCategory {
    Education,
    #[default]
    Community,
    SuccessStory,
}

/// A news item or testimony published on the stories page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: EntityId,
    pub title: String,
    pub author: String,
    pub date: NaiveDate,
    pub excerpt: String,
    pub body: String,
    pub image: String,
    #[serde(default)]
    pub media_kind: MediaKind,
    pub category: StoryCategory,
}

impl Entity for Story {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl Entity for MediaItem {
    fn id(&self) -> &EntityId {
        &self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
