//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for builder shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Ctrl is accepted everywhere; Cmd as well on macOS
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}

/// Submit shortcut display (preview mode)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Share link shortcut display
/// - macOS: "Cmd+L"
/// - Linux/Windows: "Ctrl+L"
#[cfg(target_os = "macos")]
pub const SHARE_SHORTCUT: &str = "Cmd+L";

#[cfg(not(target_os = "macos"))]
pub const SHARE_SHORTCUT: &str = "Ctrl+L";

/// Reset form shortcut display
#[cfg(target_os = "macos")]
pub const RESET_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const RESET_SHORTCUT: &str = "Ctrl+R";
