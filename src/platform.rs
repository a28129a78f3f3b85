//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
/// Ctrl+S works on all platforms (Cmd+S also works where the terminal passes it)
pub const SUBMIT_SHORTCUT: &str = "^S";

/// Remove-attachment shortcut display
/// - macOS: "Cmd+D"
/// - Linux/Windows: "^D"
#[cfg(target_os = "macos")]
pub const REMOVE_FILE_SHORTCUT: &str = "Cmd+D";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_FILE_SHORTCUT: &str = "^D";

/// Whether a key event carries the platform's action modifier or Ctrl
pub fn has_action_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(ACTION_MODIFIER)
}
