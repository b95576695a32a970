//! Application state and core logic

use crate::config::SiteConfig;
use crate::platform::is_shortcut;
use crate::sink::{SinkError, SubmissionSink};
use crate::state::content::{self, HOME_DOCUMENT_ROWS};
use crate::state::navigation::anchor_target;
use crate::state::viewport::{observe_lazy_images, observe_reveals, Bounds};
use crate::state::{
    AppState, ContactForm, FieldKind, FlatSubmitOutcome, Form, FormWizard, HomeFocus, MenuItem,
    NavigationChrome, NoticeKind, Page, SplashState, SubmitOutcome, TabKey, TabRotator,
    CONTACT_THANKS, EMAIL_ERROR, NEWSLETTER_THANKS,
};
use crate::ui::home;
use crate::ui::layout::{self, PageAreas, ROW_PX};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

/// Rows scrolled per mouse wheel notch
const WHEEL_ROWS: i64 = 3;
/// Size assumed before the first draw (height, width)
const DEFAULT_TERMINAL_SIZE: (u16, u16) = (24, 80);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: SiteConfig,
    /// Where completed forms are delivered
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Time of the last tick, used by animations while drawing
    pub last_tick: Instant,
}

impl App {
    /// Create a new App instance showing the startup banner
    pub fn new(config: SiteConfig, sink: Box<dyn SubmissionSink>, now: Instant) -> Result<Self> {
        let wizard = FormWizard::new(content::membership_steps())
            .ok_or_else(|| anyhow!("membership form has no steps"))?;
        let state = AppState::new(wizard, config.rotation_timings(), config.chrome_thresholds());
        let splash = SplashState::new(now, config.splash_timings());

        Ok(Self {
            state,
            config,
            sink,
            quit: false,
            splash_state: Some(splash),
            terminal_size: None,
            last_tick: now,
        })
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, now: Instant) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(now);
            if splash.is_complete() {
                self.finish_splash(now);
                return true;
            }
        }
        false
    }

    fn finish_splash(&mut self, now: Instant) {
        self.splash_state = None;
        self.navigate(Page::Home, now);
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        self.splash_state.is_some()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether something on screen is moving and needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.in_splash() || self.state.nav.is_animating() || !self.state.notifier.is_empty()
    }

    fn areas(&self) -> PageAreas {
        let (height, width) = self.terminal_size.unwrap_or(DEFAULT_TERMINAL_SIZE);
        layout::create_layout(Rect::new(0, 0, width, height))
    }

    fn viewport_rows(&self) -> u32 {
        u32::from(self.areas().main.height)
    }

    /// Largest scroll offset of the current page, in page pixels
    fn max_scroll(&self) -> u32 {
        match self.state.current_page {
            Page::Home => HOME_DOCUMENT_ROWS.saturating_sub(self.viewport_rows()) * ROW_PX,
            Page::Membership | Page::Contact => 0,
        }
    }

    /// Record a new terminal size and re-run viewport observers
    pub fn set_terminal_size(&mut self, height: u16, width: u16) {
        if self.terminal_size == Some((height, width)) {
            return;
        }
        self.terminal_size = Some((height, width));
        let max = self.max_scroll();
        if self.state.nav.scroll_offset() > max {
            self.state.nav.on_scroll(max);
        }
        self.observe_viewport();
    }

    /// Load images and reveal cards in the visible part of the home page
    fn observe_viewport(&mut self) {
        if self.state.current_page != Page::Home {
            return;
        }
        let viewport = Bounds::new(self.state.nav.scroll_offset() / ROW_PX, self.viewport_rows());
        observe_lazy_images(&mut self.state.images, &viewport);
        observe_reveals(&mut self.state.reveals, &viewport);
    }

    /// Advance every timer-driven component
    pub fn tick(&mut self, now: Instant) {
        self.last_tick = now;
        if let Some(hero) = self.state.hero.as_mut() {
            hero.tick(now);
        }
        self.state.notifier.tick(now);
        if self.state.nav.tick(now).is_some() {
            self.observe_viewport();
        }
    }

    /// Load a page. Every page load starts from fresh page state.
    pub fn navigate(&mut self, page: Page, now: Instant) {
        tracing::debug!(from = ?self.state.current_page, to = ?page, "Navigating");
        self.state.current_page = page;
        self.state.nav = NavigationChrome::new(self.config.chrome_thresholds());
        self.state.menu_selection = 0;
        self.state.choice_cursor = 0;
        // Leaving a page ends its carousel and timers
        self.state.hero = None;

        match page {
            Page::Home => {
                self.state.hovering_hero = false;
                self.state.home_focus = HomeFocus::default();
                self.state.images = content::home_images();
                self.state.reveals = content::home_reveal_targets();
                self.state.hero =
                    TabRotator::new(content::hero_tabs(), self.config.rotation_timings());
                if let Some(hero) = self.state.hero.as_mut() {
                    hero.set_visible(self.state.visible, now);
                }
                self.observe_viewport();
            }
            Page::Membership => {
                if let Some(wizard) = FormWizard::new(content::membership_steps()) {
                    self.state.wizard = wizard;
                }
            }
            Page::Contact => self.state.contact = ContactForm::new(),
        }
    }

    /// Handle keyboard input
    pub async fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        if self.in_splash() {
            self.handle_splash_key(now);
            return Ok(());
        }

        if self.state.nav.is_menu_open() {
            self.handle_menu_key(key, now);
            return Ok(());
        }

        // Page-independent keys
        match key.code {
            KeyCode::Esc => {
                self.toggle_menu();
                return Ok(());
            }
            KeyCode::Char('t') if is_shortcut(key.modifiers) => {
                if self.state.nav.is_back_to_top_visible() {
                    self.state.nav.back_to_top(now);
                }
                return Ok(());
            }
            KeyCode::PageDown => {
                self.scroll_rows(i64::from(self.viewport_rows()));
                return Ok(());
            }
            KeyCode::PageUp => {
                self.scroll_rows(-i64::from(self.viewport_rows()));
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_page {
            Page::Home => self.handle_home_key(key, now).await?,
            Page::Membership => self.handle_membership_key(key, now).await?,
            Page::Contact => self.handle_contact_key(key, now).await?,
        }
        Ok(())
    }

    fn handle_splash_key(&mut self, now: Instant) {
        if let Some(splash) = self.splash_state.as_mut() {
            splash.skip();
        }
        self.finish_splash(now);
    }

    fn scroll_rows(&mut self, rows: i64) {
        let max = self.max_scroll();
        self.state.nav.scroll_by(rows * i64::from(ROW_PX), max);
        self.observe_viewport();
    }

    fn toggle_menu(&mut self) {
        self.state.menu_selection = 0;
        self.state.nav.toggle_menu();
        tracing::debug!(expanded = self.state.nav.aria_expanded(), "Menu toggled");
    }

    fn handle_menu_key(&mut self, key: KeyEvent, now: Instant) {
        let count = self.state.menu_items().len();
        if count == 0 {
            return;
        }
        let selection = self.state.menu_selection;
        match key.code {
            KeyCode::Esc => self.toggle_menu(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.menu_selection = if selection == 0 {
                    count - 1
                } else {
                    selection - 1
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.state.menu_selection = (selection + 1) % count;
            }
            KeyCode::Enter => self.activate_menu_item(selection, now),
            _ => {}
        }
    }

    fn activate_menu_item(&mut self, index: usize, now: Instant) {
        let Some(item) = self.state.menu_items().into_iter().nth(index) else {
            return;
        };
        match item {
            MenuItem::Page(page) => self.navigate(page, now),
            MenuItem::Anchor { href, .. } => {
                let anchors = content::home_anchors(ROW_PX);
                if let Some(target) =
                    anchor_target(&href, &anchors, Some(layout::header_height_px()))
                {
                    let target = target.min(self.max_scroll());
                    self.state.nav.smooth_scroll_to(target, now);
                }
                let width = layout::viewport_width_px(self.areas().main.width);
                self.state.nav.nav_link_clicked(width);
            }
        }
    }

    async fn handle_home_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.state.home_focus.toggle();
            return Ok(());
        }

        match self.state.home_focus {
            HomeFocus::HeroTabs => self.handle_hero_key(key, now),
            HomeFocus::Newsletter => match key.code {
                KeyCode::Enter => self.submit_newsletter(now).await,
                KeyCode::Backspace => self.state.newsletter.email.pop_char(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.state.newsletter.email.push_char(c)
                }
                _ => {}
            },
        }
        Ok(())
    }

    fn handle_hero_key(&mut self, key: KeyEvent, now: Instant) {
        let tab_key = match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => Some(TabKey::Previous),
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') => Some(TabKey::Next),
            KeyCode::Home => Some(TabKey::First),
            KeyCode::End => Some(TabKey::Last),
            _ => None,
        };
        if let Some(tab_key) = tab_key {
            if let Some(hero) = self.state.hero.as_mut() {
                hero.key(tab_key);
            }
            return;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(index) = self.state.hero.as_ref().map(|h| h.focused_index()) {
                    self.click_tab(index, now);
                }
            }
            KeyCode::Char(c) => {
                // 1-9 jump straight to a tab
                if let Some(digit) = c.to_digit(10).filter(|d| *d > 0) {
                    self.click_tab(digit as usize - 1, now);
                }
            }
            _ => {}
        }
    }

    fn click_tab(&mut self, index: usize, now: Instant) {
        let Some(hero) = self.state.hero.as_mut() else {
            return;
        };
        if let Some(name) = hero.tabs().get(index).map(|t| t.name.clone()) {
            hero.click(&name, now);
        }
    }

    async fn handle_membership_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if self.state.wizard.is_submitted() {
            if key.code == KeyCode::Enter {
                self.navigate(Page::Home, now);
            }
            return Ok(());
        }

        let shortcut = is_shortcut(key.modifiers);
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_membership(now).await;
            }
            KeyCode::Char('n') if shortcut => self.next_step(),
            KeyCode::Char('p') if shortcut => {
                self.state.wizard.prev();
                self.state.choice_cursor = 0;
            }
            KeyCode::Enter if !self.state.wizard.is_active_field_multiline() => {
                if self.state.wizard.is_final_step() {
                    self.submit_membership(now).await;
                } else {
                    self.next_step();
                }
            }
            _ => edit_form(&mut self.state.wizard, &mut self.state.choice_cursor, key),
        }
        Ok(())
    }

    fn next_step(&mut self) {
        if self.state.wizard.next() {
            self.state.choice_cursor = 0;
        } else {
            focus_first_error(&mut self.state.wizard);
        }
    }

    async fn submit_membership(&mut self, now: Instant) {
        match self.state.wizard.submit(self.sink.as_ref()).await {
            Ok(SubmitOutcome::Invalid) => focus_first_error(&mut self.state.wizard),
            Ok(SubmitOutcome::Submitted(_)) => self.state.choice_cursor = 0,
            Ok(SubmitOutcome::NotFinalStep | SubmitOutcome::AlreadySubmitted) => {}
            Err(err) => self.report_sink_error("application", &err, now),
        }
    }

    async fn handle_contact_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact(now).await;
            }
            KeyCode::Enter if !self.state.contact.is_active_field_multiline() => {
                self.state.contact.next_field();
            }
            _ => edit_form(&mut self.state.contact, &mut self.state.choice_cursor, key),
        }
        Ok(())
    }

    async fn submit_contact(&mut self, now: Instant) {
        match self.state.contact.submit(self.sink.as_ref()).await {
            Ok(FlatSubmitOutcome::Sent(_)) => {
                let timings = self.config.banner_timings();
                self.state
                    .notifier
                    .show(CONTACT_THANKS, NoticeKind::Success, timings, now);
            }
            Ok(FlatSubmitOutcome::Invalid) => focus_first_error(&mut self.state.contact),
            Err(err) => self.report_sink_error("message", &err, now),
        }
    }

    async fn submit_newsletter(&mut self, now: Instant) {
        let timings = self.config.notice_timings();
        match self.state.newsletter.submit(self.sink.as_ref()).await {
            Ok(FlatSubmitOutcome::Sent(_)) => {
                self.state
                    .notifier
                    .show(NEWSLETTER_THANKS, NoticeKind::Success, timings, now);
            }
            Ok(FlatSubmitOutcome::Invalid) => {
                self.state
                    .notifier
                    .show(EMAIL_ERROR, NoticeKind::Error, timings, now);
            }
            Err(err) => self.report_sink_error("subscription", &err, now),
        }
    }

    fn report_sink_error(&mut self, what: &str, err: &SinkError, now: Instant) {
        tracing::warn!(error = %err, "Failed to deliver {what}");
        self.state.notifier.show(
            format!("Could not send your {what}. Please try again."),
            NoticeKind::Error,
            self.config.notice_timings(),
            now,
        );
    }

    /// Handle mouse input
    pub async fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Result<()> {
        if self.in_splash() {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.handle_splash_key(now);
            }
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.update_hover(mouse.column, mouse.row, now);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row, now).await;
            }
            MouseEventKind::ScrollDown => self.scroll_rows(WHEEL_ROWS),
            MouseEventKind::ScrollUp => self.scroll_rows(-WHEEL_ROWS),
            _ => {}
        }
        Ok(())
    }

    /// Terminal focus stands in for page visibility
    pub fn handle_focus(&mut self, focused: bool, now: Instant) {
        tracing::debug!(focused, "Visibility changed");
        self.state.visible = focused;
        if let Some(hero) = self.state.hero.as_mut() {
            hero.set_visible(focused, now);
        }
    }

    /// Home document position under a screen position
    fn document_position(&self, column: u16, row: u16) -> Option<Position> {
        if self.state.current_page != Page::Home {
            return None;
        }
        let main = self.areas().main;
        if !main.contains(Position::new(column, row)) {
            return None;
        }
        let offset = (self.state.nav.scroll_offset() / ROW_PX) as u16;
        Some(Position::new(column - main.x, row - main.y + offset))
    }

    fn update_hover(&mut self, column: u16, row: u16, now: Instant) {
        let width = self.areas().main.width;
        let over_hero = self
            .document_position(column, row)
            .is_some_and(|pos| home::hero_area(width).contains(pos));
        if over_hero == self.state.hovering_hero {
            return;
        }
        self.state.hovering_hero = over_hero;
        if let Some(hero) = self.state.hero.as_mut() {
            if over_hero {
                hero.pointer_enter();
            } else {
                hero.pointer_leave(now);
            }
        }
    }

    async fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        let areas = self.areas();
        let point = Position::new(column, row);

        if layout::menu_icon_area(areas.header).contains(point) {
            self.toggle_menu();
            return;
        }

        if self.state.nav.is_menu_open() {
            let count = self.state.menu_items().len();
            let menu = layout::menu_area(&areas, count);
            if menu.contains(point) {
                if let Some(index) = layout::menu_item_at(menu, count, column, row) {
                    self.activate_menu_item(index, now);
                }
                return;
            }
            self.state.nav.document_click(false);
        }

        if self.state.nav.is_back_to_top_visible()
            && layout::back_to_top_area(areas.main).contains(point)
        {
            self.state.nav.back_to_top(now);
            return;
        }

        if let Some(pos) = self.document_position(column, row) {
            self.handle_document_click(pos, areas.main.width, now).await;
        }
    }

    async fn handle_document_click(&mut self, pos: Position, width: u16, now: Instant) {
        let tab_count = self.state.hero.as_ref().map_or(0, |h| h.tabs().len());
        if let Some(index) = home::tab_at(width, tab_count, pos.x, pos.y) {
            self.state.home_focus = HomeFocus::HeroTabs;
            self.click_tab(index, now);
            return;
        }

        if let Some((field, button)) = home::newsletter_areas(width) {
            if field.contains(pos) {
                self.state.home_focus = HomeFocus::Newsletter;
            } else if button.contains(pos) {
                self.state.home_focus = HomeFocus::Newsletter;
                self.submit_newsletter(now).await;
            }
        }
    }
}

/// Apply an editing key to the focused field of a form
fn edit_form<F: Form>(form: &mut F, choice_cursor: &mut usize, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
            *choice_cursor = 0;
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            *choice_cursor = 0;
            return;
        }
        _ => {}
    }

    let Some(field) = form.get_active_field_mut() else {
        return;
    };
    match key.code {
        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            let count = field.options().len();
            match field.kind {
                FieldKind::Select { .. } => field.cycle_option(forward),
                FieldKind::Choices { .. } if count > 0 => {
                    *choice_cursor = if forward {
                        (*choice_cursor + 1) % count
                    } else {
                        (*choice_cursor + count - 1) % count
                    };
                }
                _ => {}
            }
        }
        KeyCode::Char(' ') if matches!(field.kind, FieldKind::Choices { .. }) => {
            field.toggle_choice(*choice_cursor);
        }
        KeyCode::Enter => field.push_char('\n'),
        KeyCode::Backspace => field.pop_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.push_char(c),
        _ => {}
    }
}

/// Move focus to the first field carrying an error annotation
fn focus_first_error<F: Form>(form: &mut F) {
    let first = (0..form.field_count())
        .find(|&idx| form.get_field(idx).is_some_and(|f| f.error.is_some()));
    if let Some(index) = first {
        form.set_active_field(index);
    }
}
