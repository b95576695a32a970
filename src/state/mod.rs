//! Application state module
//!
//! Platform-free state machines and utilities. The terminal layer in
//! `app` and `ui` only calls into these.

mod app_state;
pub mod content;
pub mod email;
mod forms;
pub mod hero_tabs;
pub mod navigation;
pub mod notifier;
mod splash_state;
pub mod timer;
pub mod viewport;

pub use app_state::*;
pub use forms::*;
pub use hero_tabs::{RotationTimings, TabKey, TabRotator};
pub use navigation::{ChromeThresholds, NavigationChrome};
pub use notifier::{NoticeKind, NoticeTimings};
pub use splash_state::*;
