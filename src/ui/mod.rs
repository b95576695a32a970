//! UI module for rendering the TUI

mod components;
mod forms;
pub mod home;
pub mod layout;
mod notifier;
mod splash;

use crate::app::App;
use crate::state::Page;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let Some(splash_state) = &app.splash_state {
        splash::draw(frame, area, splash_state);
        return;
    }

    let areas = layout::create_layout(area);

    layout::draw_header(frame, areas.header, app);

    // Draw main content based on current page
    match app.state.current_page {
        Page::Home => home::draw(frame, areas.main, app),
        Page::Membership => forms::draw_membership(frame, areas.main, app),
        Page::Contact => forms::draw_contact(frame, areas.main, app),
    }

    layout::draw_back_to_top(frame, areas.main, app);
    notifier::draw(frame, areas.main, app.state.notifier.notices(), app.last_tick);
    layout::draw_menu(frame, &areas, app);

    layout::draw_status_bar(frame, areas.status, app);
}
