//! Modifier keys and shortcut labels that differ on macOS

use crossterm::event::KeyModifiers;

/// Modifier accepted alongside Ctrl for submit, clear and history reload
#[cfg(target_os = "macos")]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const ACTION_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Terminals on every platform deliver Ctrl+S, so the label is shared
pub const SUBMIT_SHORTCUT: &str = "^S";

/// Status-bar label for emptying the form
#[cfg(target_os = "macos")]
pub const CLEAR_SHORTCUT: &str = "Cmd+L";

#[cfg(not(target_os = "macos"))]
pub const CLEAR_SHORTCUT: &str = "^L";

/// Status-bar label for reloading submitted applications
#[cfg(target_os = "macos")]
pub const REFRESH_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const REFRESH_SHORTCUT: &str = "^R";
