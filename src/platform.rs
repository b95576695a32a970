//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for step and scroll shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Next step shortcut display
/// - macOS: "Cmd+N"
/// - Linux/Windows: "Ctrl+N"
#[cfg(target_os = "macos")]
pub const NEXT_STEP_SHORTCUT: &str = "Cmd+N";

#[cfg(not(target_os = "macos"))]
pub const NEXT_STEP_SHORTCUT: &str = "Ctrl+N";

/// Previous step shortcut display
#[cfg(target_os = "macos")]
pub const PREV_STEP_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const PREV_STEP_SHORTCUT: &str = "Ctrl+P";

/// Back-to-top shortcut display
#[cfg(target_os = "macos")]
pub const BACK_TO_TOP_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const BACK_TO_TOP_SHORTCUT: &str = "Ctrl+T";

/// Whether `modifiers` carry the platform shortcut modifier.
/// Ctrl is accepted everywhere since many macOS terminals swallow Cmd.
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
