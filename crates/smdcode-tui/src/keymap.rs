//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a character to the input buffer.
    Input(char),
    /// Remove the last character from the input buffer.
    Backspace,
    /// Clear the whole input buffer.
    Clear,
    /// Decode the current input.
    Submit,
    /// Toggle decode-on-every-keystroke.
    ToggleLive,
    /// Switch between the light and dark theme.
    ToggleTheme,
    /// Copy the formatted result to the system clipboard.
    Copy,
    Quit,
    None,
}

/// Map a key event to an action.
///
/// Plain characters feed the input buffer; shortcuts use Ctrl so they
/// never collide with typed code letters.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            KeyCode::Char('l') => KeyAction::ToggleLive,
            KeyCode::Char('t') => KeyAction::ToggleTheme,
            KeyCode::Char('y') => KeyAction::Copy,
            KeyCode::Char('u') => KeyAction::Clear,
            _ => KeyAction::None,
        };
    }
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char(c) if !c.is_control() => KeyAction::Input(c),
        _ => KeyAction::None,
    }
}
