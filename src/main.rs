//! HURF Site - terminal rendition of the chapter website
//!
//! A Ratatui-based TUI with the hero tab carousel, the multi-step
//! membership application, the contact form and newsletter signup.

mod app;
mod config;
mod platform;
mod sink;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::SiteConfig;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hurf_site=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Configuration problems surface before the terminal is taken over
    let config = SiteConfig::load()?;
    if !SiteConfig::exists() {
        // First run: write the defaults out so they can be edited
        if let Err(err) = config.filled().save() {
            tracing::warn!(error = %err, "Could not write default configuration");
        }
    }
    let sink = sink::from_config(&config)?;
    let mut app = App::new(config, sink, Instant::now())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let now = Instant::now();

        // Get terminal size for layout and animation calculations
        let term_size = terminal.size()?;
        app.set_terminal_size(term_size.height, term_size.width);

        if app.in_splash() {
            app.update_splash(now);
        }
        app.tick(now);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Use faster polling during animation (16ms = ~60fps)
        // Normal polling (100ms) otherwise
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            let now = Instant::now();
            match event::read()? {
                // Only key presses; some platforms also report releases
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, now).await?
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, now).await?,
                Event::FocusGained => app.handle_focus(true, now),
                Event::FocusLost => app.handle_focus(false, now),
                Event::Resize(width, height) => app.set_terminal_size(height, width),
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
