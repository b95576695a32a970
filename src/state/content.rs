//! Static site content: hero tabs, membership steps and the home page layout

use super::forms::{FormField, FormStep, MULTI_VALUE_FIELD};
use super::hero_tabs::{Tab, TabContent};
use super::navigation::Anchor;
use super::viewport::{Bounds, LazyImage, RevealTarget};

/// Site name shown in the header and banner
pub const SITE_TITLE: &str = "HURF Chapter";
/// Banner tagline
pub const SITE_TAGLINE: &str = "Empowering Small Business in Our Communities";

fn tab(name: &str, label: &str, heading: &str, body: &str, cta: Option<&str>) -> Tab {
    Tab {
        name: name.to_string(),
        label: label.to_string(),
        content: TabContent {
            heading: heading.to_string(),
            body: body.to_string(),
            call_to_action: cta.map(str::to_string),
        },
    }
}

/// Hero carousel tabs
pub fn hero_tabs() -> Vec<Tab> {
    vec![
        tab(
            "mission",
            "Our Mission",
            "Small business is the backbone of our community",
            "We connect local owners with mentors, capital and each other so main street keeps thriving.",
            Some("Join the chapter"),
        ),
        tab(
            "veterans",
            "Veterans",
            "Serving those who served",
            "Veteran-owned businesses get dedicated mentoring, certification help and priority event seating.",
            Some("Learn about veteran programs"),
        ),
        tab(
            "events",
            "Events",
            "Monthly mixers and workshops",
            "Networking breakfasts, policy briefings and hands-on workshops, open to members and guests.",
            Some("See upcoming events"),
        ),
        tab(
            "advocacy",
            "Advocacy",
            "A voice at city hall",
            "We track local ordinances and bring member concerns to the people who write the rules.",
            None,
        ),
    ]
}

/// Membership application steps
pub fn membership_steps() -> Vec<FormStep> {
    vec![
        FormStep::new(
            "Personal Information",
            vec![
                FormField::text("first_name", "First Name").required(),
                FormField::text("last_name", "Last Name").required(),
                FormField::email("email", "Email").required(),
                FormField::text("phone", "Phone"),
            ],
        ),
        FormStep::new(
            "Business Details",
            vec![
                FormField::text("business_name", "Business Name").required(),
                FormField::select(
                    "business_type",
                    "Business Type",
                    &["retail", "services", "food", "trades", "nonprofit", "other"],
                )
                .required(),
                FormField::text("city", "City").required(),
                FormField::choices(
                    MULTI_VALUE_FIELD,
                    "Interests",
                    &["community", "veterans", "networking", "advocacy", "education"],
                ),
            ],
        ),
        FormStep::new(
            "Membership Level",
            vec![
                FormField::select("membership_level", "Membership Level", &["individual", "business", "sponsor"])
                    .required(),
                FormField::text("referral", "How did you hear about us?"),
                FormField::textarea("comments", "Comments"),
            ],
        ),
    ]
}

/// A titled block on the home page, in document rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub bounds: Bounds,
}

/// Hero region height in rows
pub const HERO_ROWS: u32 = 14;
/// Total home page height in rows
pub const HOME_DOCUMENT_ROWS: u32 = 46;

/// Sections below the hero
pub fn home_sections() -> Vec<Section> {
    vec![
        Section {
            id: "initiatives",
            title: "Initiatives",
            bounds: Bounds::new(HERO_ROWS, 8),
        },
        Section {
            id: "events",
            title: "Recent Events",
            bounds: Bounds::new(HERO_ROWS + 8, 9),
        },
        Section {
            id: "impact",
            title: "Our Impact",
            bounds: Bounds::new(HERO_ROWS + 17, 8),
        },
        Section {
            id: "newsletter",
            title: "Stay in the loop",
            bounds: Bounds::new(HERO_ROWS + 25, 7),
        },
    ]
}

/// Card titles and text for the initiatives band
pub const INITIATIVE_CARDS: [(&str, &str); 3] = [
    ("Mentorship", "Pair with an owner who has been there."),
    ("Micro-grants", "Seed funding for storefront upgrades."),
    ("Workshops", "Bookkeeping, hiring and marketing basics."),
];

/// Card titles and figures for the impact band
pub const IMPACT_STATS: [(&str, &str); 3] = [
    ("240+", "member businesses"),
    ("$1.2M", "in grants awarded"),
    ("36", "events last year"),
];

/// Anchors for in-page links, with tops converted by `row_px`
pub fn home_anchors(row_px: u32) -> Vec<Anchor> {
    home_sections()
        .into_iter()
        .map(|s| Anchor {
            id: s.id.to_string(),
            top: s.bounds.top * row_px,
        })
        .collect()
}

/// Cards that animate in on first sight: initiatives then impact
pub fn home_reveal_targets() -> Vec<RevealTarget> {
    let sections = home_sections();
    sections
        .iter()
        .filter(|s| s.id == "initiatives" || s.id == "impact")
        .flat_map(|s| {
            let band = Bounds::new(s.bounds.top + 2, s.bounds.height - 2);
            (0..3).map(move |_| RevealTarget::new(band))
        })
        .collect()
}

/// Event photos loaded on first sight
pub fn home_images() -> Vec<LazyImage> {
    let band = Bounds::new(HERO_ROWS + 10, 6);
    vec![
        LazyImage::new("Spring mixer", "images/events/spring-mixer.jpg", band),
        LazyImage::new("Veterans breakfast", "images/events/veterans-breakfast.jpg", band),
        LazyImage::new("Main street cleanup", "images/events/cleanup.jpg", band),
    ]
}
