use serde::{Deserialize, Serialize};

use crate::entity::{ChildProfile, Program, Story};
use crate::media::MediaItem;
use crate::section::{
    About, Contact, GetInvolved, Hero, HomePage, SectionKind, SectionPatch, Theme,
};

/// The whole website's editable content as one document.
///
/// Exactly one `SiteContent` exists for the site. Public pages read it,
/// the admin surface writes it one section at a time via [`SectionPatch`].
/// The serde field names are the wire names ([`SectionKind::as_str`]) used
/// for partial remote writes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub theme: Theme,
    pub hero: Hero,
    pub home_page: HomePage,
    pub about: About,
    pub get_involved: GetInvolved,
    pub contact: Contact,
    pub programs: Vec<Program>,
    pub children: Vec<ChildProfile>,
    pub stories: Vec<Story>,
    pub gallery: Vec<MediaItem>,
}

impl SiteContent {
    /// Replace one section wholesale.
    pub fn apply(&mut self, patch: SectionPatch) {
        match patch {
            SectionPatch::Theme(theme) => self.theme = theme,
            SectionPatch::Hero(hero) => self.hero = hero,
            SectionPatch::HomePage(home_page) => self.home_page = home_page,
            SectionPatch::About(about) => self.about = about,
            SectionPatch::GetInvolved(get_involved) => self.get_involved = get_involved,
            SectionPatch::Contact(contact) => self.contact = contact,
            SectionPatch::Programs(programs) => self.programs = programs,
            SectionPatch::Children(children) => self.children = children,
            SectionPatch::Stories(stories) => self.stories = stories,
            SectionPatch::Gallery(gallery) => self.gallery = gallery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::EntityId;

    #[test]
    fn apply_replaces_only_the_named_section() {
        let mut content = SiteContent::seed();
        let old_contact = content.contact.clone();

        content.apply(SectionPatch::Hero(Hero {
            headline: "New headline".into(),
            subheadline: "New subheadline".into(),
            hero_image: "https://example.org/new.jpg".into(),
        }));

        assert_eq!(content.hero.headline, "New headline");
        assert_eq!(content.contact, old_contact);
    }

    #[test]
    fn apply_replaces_collections_wholesale() {
        let mut content = SiteContent::seed();
        assert!(!content.programs.is_empty());

        content.apply(SectionPatch::Programs(vec![]));
        assert!(content.programs.is_empty());
    }

    #[test]
    fn wire_names_match_serde_fields() {
        let value = serde_json::to_value(SiteContent::seed()).unwrap();
        let object = value.as_object().unwrap();
        for kind in SectionKind::ALL {
            assert!(
                object.contains_key(kind.as_str()),
                "missing wire field {kind}"
            );
        }
        assert_eq!(object.len(), SectionKind::ALL.len());
    }

    #[test]
    fn seed_document_is_fully_populated() {
        let content = SiteContent::seed();
        assert!(!content.hero.headline.is_empty());
        assert!(!content.programs.is_empty());
        assert!(!content.children.is_empty());
        assert!(!content.stories.is_empty());
        assert!(!content.gallery.is_empty());
        assert!(!content.home_page.stats.is_empty());
    }

    #[test]
    fn seed_entity_ids_are_unique() {
        let content = SiteContent::seed();
        let mut ids: Vec<&EntityId> = content
            .programs
            .iter()
            .map(|p| &p.id)
            .chain(content.children.iter().map(|c| &c.id))
            .chain(content.stories.iter().map(|s| &s.id))
            .chain(content.gallery.iter().map(|g| &g.id))
            .collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}
