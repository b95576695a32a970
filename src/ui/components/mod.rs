//! Reusable UI components

mod button;

pub use button::{button_widget, render_button, BUTTON_HEIGHT};
