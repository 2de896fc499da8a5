//! TUI message types (Elm Messages).

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiMessage {
    /// Key press event forwarded from the event loop.
    Key(KeyAction),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Tick event for periodic re-renders.
    Tick,
}
