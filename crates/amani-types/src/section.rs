use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::{ChildProfile, Program, Story};
use crate::error::TypeError;
use crate::id::EntityId;
use crate::media::MediaItem;

/// Site-wide visual theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Primary accent color as a hex code.
    pub primary_color: String,
}

/// The landing hero block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub hero_image: String,
}

/// One animated counter on the home page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    pub id: EntityId,
    pub value: i64,
    pub label: String,
    pub suffix: String,
}

/// Home page copy outside the hero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HomePage {
    pub stats: Vec<StatItem>,
    pub about_preview_title: String,
    pub about_preview_headline: String,
    pub programs_title: String,
    pub programs_subtitle: String,
}

/// The about page: mission, vision, founder story, values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub mission: String,
    pub vision: String,
    pub founder_story: String,
    pub values: Vec<String>,
    #[serde(default)]
    pub home_preview_image_1: Option<String>,
    #[serde(default)]
    pub home_preview_image_2: Option<String>,
}

/// Copy for the get-involved page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetInvolved {
    pub intro_title: String,
    pub intro_text: String,
    pub financial_text: String,
    pub supplies_text: String,
    pub volunteer_text: String,
}

/// Social media profile links.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub linkedin: String,
}

/// Contact and donation details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub address: String,
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub bank_details: String,
    pub mobile_money: String,
    #[serde(default)]
    pub socials: Option<SocialLinks>,
}

/// Names of the top-level document sections.
///
/// `as_str` is the stable wire name: it is both the serde field name inside
/// the document and the field key used for partial remote writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Theme,
    Hero,
    HomePage,
    About,
    GetInvolved,
    Contact,
    Programs,
    Children,
    Stories,
    Gallery,
}

impl SectionKind {
    /// All sections, in document order.
    pub const ALL: [SectionKind; 10] = [
        Self::Theme,
        Self::Hero,
        Self::HomePage,
        Self::About,
        Self::GetInvolved,
        Self::Contact,
        Self::Programs,
        Self::Children,
        Self::Stories,
        Self::Gallery,
    ];

    /// The stable wire name of this section.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Theme => "theme",
            Self::Hero => "hero",
            Self::HomePage => "home_page",
            Self::About => "about",
            Self::GetInvolved => "get_involved",
            Self::Contact => "contact",
            Self::Programs => "programs",
            Self::Children => "children",
            Self::Stories => "stories",
            Self::Gallery => "gallery",
        }
    }

    /// Returns `true` for the array-valued entity collections.
    pub const fn is_collection(&self) -> bool {
        matches!(
            self,
            Self::Programs | Self::Children | Self::Stories | Self::Gallery
        )
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TypeError::UnknownSection(s.to_string()))
    }
}

/// A full replacement value for one document section.
///
/// The write granularity of the store is "one section replaced wholesale";
/// this closed sum ties each section name to its value type, so a caller
/// cannot write a hero payload under the contact key.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionPatch {
    Theme(Theme),
    Hero(Hero),
    HomePage(HomePage),
    About(About),
    GetInvolved(GetInvolved),
    Contact(Contact),
    Programs(Vec<Program>),
    Children(Vec<ChildProfile>),
    Stories(Vec<Story>),
    Gallery(Vec<MediaItem>),
}

impl SectionPatch {
    /// Which section this patch replaces.
    pub const fn kind(&self) -> SectionKind {
        match self {
            Self::Theme(_) => SectionKind::Theme,
            Self::Hero(_) => SectionKind::Hero,
            Self::HomePage(_) => SectionKind::HomePage,
            Self::About(_) => SectionKind::About,
            Self::GetInvolved(_) => SectionKind::GetInvolved,
            Self::Contact(_) => SectionKind::Contact,
            Self::Programs(_) => SectionKind::Programs,
            Self::Children(_) => SectionKind::Children,
            Self::Stories(_) => SectionKind::Stories,
            Self::Gallery(_) => SectionKind::Gallery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_names_round_trip() {
        for kind in SectionKind::ALL {
            let parsed: SectionKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = "sponsors".parse::<SectionKind>().unwrap_err();
        assert_eq!(err, TypeError::UnknownSection("sponsors".to_string()));
    }

    #[test]
    fn collections_are_flagged() {
        assert!(SectionKind::Programs.is_collection());
        assert!(SectionKind::Gallery.is_collection());
        assert!(!SectionKind::Hero.is_collection());
        assert!(!SectionKind::Contact.is_collection());
    }

    #[test]
    fn patch_reports_its_kind() {
        let patch = SectionPatch::Hero(Hero {
            headline: "h".into(),
            subheadline: "s".into(),
            hero_image: "i".into(),
        });
        assert_eq!(patch.kind(), SectionKind::Hero);
        assert_eq!(patch.kind().as_str(), "hero");
    }
}
