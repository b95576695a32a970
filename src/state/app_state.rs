//! Application state definitions

use super::content;
use super::forms::{ContactForm, FormWizard, NewsletterForm};
use super::hero_tabs::{RotationTimings, TabRotator};
use super::navigation::{ChromeThresholds, NavigationChrome};
use super::notifier::TransientNotifier;
use super::viewport::{LazyImage, RevealTarget};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Membership,
    Contact,
}

impl Page {
    /// Pages reachable from the navigation
    pub const NAV: [Page; 3] = [Page::Home, Page::Membership, Page::Contact];

    /// Location path shown for this page
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Membership => "/membership.html",
            Page::Contact => "/contact.html",
        }
    }

    /// Path a nav link to this page points at
    pub fn link_path(&self) -> &'static str {
        match self {
            Page::Home => "/index.html",
            other => other.path(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Membership => "Join",
            Page::Contact => "Contact",
        }
    }
}

/// One entry of the navigation menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// Link to another page
    Page(Page),
    /// Same-page anchor link such as `#events`
    Anchor { href: String, label: String },
}

impl MenuItem {
    pub fn label(&self) -> &str {
        match self {
            MenuItem::Page(page) => page.label(),
            MenuItem::Anchor { label, .. } => label,
        }
    }
}

/// Which part of the home page takes key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    #[default]
    HeroTabs,
    Newsletter,
}

impl HomeFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::HeroTabs => Self::Newsletter,
            Self::Newsletter => Self::HeroTabs,
        };
    }
}

/// Everything the pages show, owned per session
#[derive(Debug)]
pub struct AppState {
    pub current_page: Page,
    pub nav: NavigationChrome,
    /// Highlighted entry while the menu is open
    pub menu_selection: usize,
    /// None when no hero tabs are defined
    pub hero: Option<TabRotator>,
    pub hovering_hero: bool,
    pub home_focus: HomeFocus,
    pub wizard: FormWizard,
    pub contact: ContactForm,
    pub newsletter: NewsletterForm,
    /// Highlighted box inside a focused checkbox group
    pub choice_cursor: usize,
    pub notifier: TransientNotifier,
    pub images: Vec<LazyImage>,
    pub reveals: Vec<RevealTarget>,
    /// Whether the terminal has focus (page visibility)
    pub visible: bool,
}

impl AppState {
    pub fn new(wizard: FormWizard, timings: RotationTimings, thresholds: ChromeThresholds) -> Self {
        Self {
            current_page: Page::default(),
            nav: NavigationChrome::new(thresholds),
            menu_selection: 0,
            hero: TabRotator::new(content::hero_tabs(), timings),
            hovering_hero: false,
            home_focus: HomeFocus::default(),
            wizard,
            contact: ContactForm::new(),
            newsletter: NewsletterForm::new(),
            choice_cursor: 0,
            notifier: TransientNotifier::new(),
            images: content::home_images(),
            reveals: content::home_reveal_targets(),
            visible: true,
        }
    }

    /// Menu entries for the current page: every page, plus section anchors on home
    pub fn menu_items(&self) -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = Page::NAV.iter().copied().map(MenuItem::Page).collect();
        if self.current_page == Page::Home {
            items.extend(content::home_sections().into_iter().map(|s| MenuItem::Anchor {
                href: format!("#{}", s.id),
                label: s.title.to_string(),
            }));
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::navigation::is_link_active;

    fn state() -> AppState {
        AppState::new(
            FormWizard::new(content::membership_steps()).unwrap(),
            RotationTimings::default(),
            ChromeThresholds::default(),
        )
    }

    #[test]
    fn test_default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_home_link_active_on_root_path() {
        let active: Vec<Page> = Page::NAV
            .iter()
            .copied()
            .filter(|p| is_link_active(Page::Home.path(), p.link_path()))
            .collect();
        assert_eq!(active, vec![Page::Home]);
    }

    #[test]
    fn test_each_page_highlights_itself() {
        for page in Page::NAV {
            assert!(is_link_active(page.path(), page.link_path()));
        }
    }

    #[test]
    fn test_menu_has_anchors_only_on_home() {
        let mut s = state();
        let home_items = s.menu_items();
        assert!(home_items
            .iter()
            .any(|i| matches!(i, MenuItem::Anchor { href, .. } if href == "#events")));

        s.current_page = Page::Contact;
        assert_eq!(s.menu_items().len(), Page::NAV.len());
    }

    #[test]
    fn test_home_focus_toggle() {
        let mut focus = HomeFocus::default();
        focus.toggle();
        assert_eq!(focus, HomeFocus::Newsletter);
        focus.toggle();
        assert_eq!(focus, HomeFocus::HeroTabs);
    }

    #[test]
    fn test_new_state_has_hero_and_content() {
        let s = state();
        assert!(s.hero.is_some());
        assert!(s.visible);
        assert_eq!(s.images.len(), 3);
    }
}
