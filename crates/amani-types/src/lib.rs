//! Document model for the Amani content engine.
//!
//! This crate defines the single synchronized document ([`SiteContent`]) that
//! holds every editable piece of the website, plus the types it is built
//! from. Every other Amani crate depends on `amani-types`.
//!
//! # Key Types
//!
//! - [`SiteContent`] — the whole site's content as one document
//! - [`SectionPatch`] / [`SectionKind`] — typed, section-level write units
//! - [`EntityId`] — collision-resistant identifier for collection entries
//! - [`MediaItem`] — normalized gallery entry
//! - [`Entity`] — common id accessor over collection entry types

pub mod document;
pub mod entity;
pub mod error;
pub mod id;
pub mod media;
pub mod section;

mod seed;

pub use document::SiteContent;
pub use entity::{ChildProfile, Entity, Program, Story, StoryCategory};
pub use error::TypeError;
pub use id::EntityId;
pub use media::{MediaCategory, MediaItem, MediaKind};
pub use section::{
    About, Contact, GetInvolved, Hero, HomePage, SectionKind, SectionPatch, SocialLinks,
    StatItem, Theme,
};
