//! Hard-coded default content: the last tier of the fallback chain.
//!
//! The seed document is what a fresh deployment renders before any cache or
//! remote data exists. It must be fully populated so no page ever shows an
//! empty state.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::document::SiteContent;
use crate::entity::{ChildProfile, Program, Story, StoryCategory};
use crate::id::EntityId;
use crate::media::{MediaCategory, MediaItem, MediaKind};
use crate::section::{
    About, Contact, GetInvolved, Hero, HomePage, SocialLinks, StatItem, Theme,
};

impl SiteContent {
    /// The built-in default document.
    pub fn seed() -> Self {
        Self {
            theme: Theme {
                primary_color: "#e8692e".into(),
            },
            hero: Hero {
                headline: "Every Child Deserves a Beginning".into(),
                subheadline: "The Amani Initiative gives vulnerable children shelter, \
                              schooling, and a family that believes in them."
                    .into(),
                hero_image: "https://images.amani-initiative.org/seed/hero.jpg".into(),
            },
            home_page: HomePage {
                stats: vec![
                    StatItem {
                        id: EntityId::new("stat-children"),
                        value: 120,
                        label: "Children in our care".into(),
                        suffix: "+".into(),
                    },
                    StatItem {
                        id: EntityId::new("stat-meals"),
                        value: 600,
                        label: "Meals served weekly".into(),
                        suffix: "+".into(),
                    },
                    StatItem {
                        id: EntityId::new("stat-years"),
                        value: 9,
                        label: "Years of service".into(),
                        suffix: "".into(),
                    },
                ],
                about_preview_title: "Who we are".into(),
                about_preview_headline: "A home first, then a future".into(),
                programs_title: "What we do".into(),
                programs_subtitle: "Four programs, one goal: children who thrive.".into(),
            },
            about: About {
                mission: "To shelter, educate, and restore vulnerable children through \
                          consistent, dignified care."
                    .into(),
                vision: "A community where no child grows up without a home, a school, \
                         and an advocate."
                    .into(),
                founder_story: "The Amani Initiative began in a two-room house with four \
                                children and a promise: nobody gets turned away. Nine years \
                                later the promise still holds, carried by the same families \
                                and volunteers who opened that first door."
                    .into(),
                values: vec![
                    "Dignity".into(),
                    "Consistency".into(),
                    "Community".into(),
                    "Transparency".into(),
                ],
                home_preview_image_1: None,
                home_preview_image_2: None,
            },
            get_involved: GetInvolved {
                intro_title: "Be part of it".into(),
                intro_text: "Every program below runs on ordinary people giving what \
                             they can."
                    .into(),
                financial_text: "Monthly giving keeps school fees paid and the kitchen \
                                 stocked."
                    .into(),
                supplies_text: "Uniforms, books, and bedding are always in demand.".into(),
                volunteer_text: "Teachers, mentors, and weekend drivers are welcome \
                                 year-round."
                    .into(),
            },
            contact: Contact {
                address: "14 Acacia Lane, Mwanga".into(),
                email: "hello@amani-initiative.org".into(),
                phone: "+255 700 000 111".into(),
                whatsapp: "+255 700 000 111".into(),
                bank_details: "Unity Bank, Mwanga Branch, Acc 00452218".into(),
                mobile_money: "Paybill 520180, Ref: AMANI".into(),
                socials: Some(SocialLinks {
                    facebook: "https://facebook.com/amaniinitiative".into(),
                    instagram: "https://instagram.com/amaniinitiative".into(),
                    twitter: String::new(),
                    linkedin: String::new(),
                }),
            },
            programs: vec![
                Program {
                    id: EntityId::new("seed-program-education"),
                    title: "Education Support".into(),
                    description: "School fees, uniforms, and tutoring so every child \
                                  stays enrolled."
                        .into(),
                    image: "https://images.amani-initiative.org/seed/education.jpg".into(),
                    media_kind: MediaKind::Image,
                    impact_stat: "85 students sponsored".into(),
                },
                Program {
                    id: EntityId::new("seed-program-nutrition"),
                    title: "Nutrition & Health".into(),
                    description: "Daily balanced meals and routine checkups.".into(),
                    image: "https://images.amani-initiative.org/seed/nutrition.jpg".into(),
                    media_kind: MediaKind::Image,
                    impact_stat: "600+ meals weekly".into(),
                },
                Program {
                    id: EntityId::new("seed-program-shelter"),
                    title: "Shelter & Care".into(),
                    description: "A safe residential home for children needing immediate \
                                  rescue."
                        .into(),
                    image: "https://images.amani-initiative.org/seed/shelter.jpg".into(),
                    media_kind: MediaKind::Image,
                    impact_stat: "38 children housed".into(),
                },
            ],
            children: vec![
                ChildProfile {
                    id: EntityId::new("seed-child-neema"),
                    name: "Neema".into(),
                    age: 9,
                    dream: "Engineer".into(),
                    bio: "Neema builds working water wheels out of bottle caps and \
                          asks better questions than most adults."
                        .into(),
                    image: "https://images.amani-initiative.org/seed/neema.jpg".into(),
                    needs_sponsorship: true,
                },
                ChildProfile {
                    id: EntityId::new("seed-child-baraka"),
                    name: "Baraka".into(),
                    age: 7,
                    dream: "Footballer".into(),
                    bio: "Baraka is the loudest voice at morning assembly and the \
                          first one on the pitch."
                        .into(),
                    image: "https://images.amani-initiative.org/seed/baraka.jpg".into(),
                    needs_sponsorship: true,
                },
            ],
            stories: vec![
                Story {
                    id: EntityId::new("seed-story-graduation"),
                    title: "Amina Finishes Primary School".into(),
                    author: "Amani Staff".into(),
                    date: date(2024, 11, 22),
                    excerpt: "Six years after arriving with nothing, Amina led her \
                              class across the stage."
                        .into(),
                    body: "When Amina joined us she had missed two full years of \
                           school. This week she graduated top of her class."
                        .into(),
                    image: "https://images.amani-initiative.org/seed/graduation.jpg".into(),
                    media_kind: MediaKind::Image,
                    category: StoryCategory::SuccessStory,
                },
                Story {
                    id: EntityId::new("seed-story-kitchen"),
                    title: "The New Kitchen Is Open".into(),
                    author: "Amani Staff".into(),
                    date: date(2025, 2, 3),
                    excerpt: "Donor funding doubled our cooking capacity this winter.".into(),
                    body: "The old charcoal stoves are gone. The new kitchen serves \
                           every child a hot lunch in under an hour."
                        .into(),
                    image: "https://images.amani-initiative.org/seed/kitchen.jpg".into(),
                    media_kind: MediaKind::Image,
                    category: StoryCategory::Community,
                },
            ],
            gallery: vec![
                MediaItem {
                    id: EntityId::new("seed-media-classroom"),
                    url: "https://images.amani-initiative.org/seed/classroom.jpg".into(),
                    storage_ref: "seed/classroom".into(),
                    kind: MediaKind::Image,
                    category: MediaCategory::Education,
                    created_at: timestamp(2025, 1, 10),
                },
                MediaItem {
                    id: EntityId::new("seed-media-garden"),
                    url: "https://images.amani-initiative.org/seed/garden.jpg".into(),
                    storage_ref: "seed/garden".into(),
                    kind: MediaKind::Image,
                    category: MediaCategory::Community,
                    created_at: timestamp(2025, 3, 28),
                },
            ],
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn timestamp(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed timestamp")
}
