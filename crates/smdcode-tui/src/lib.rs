//! # smdcode-tui
//!
//! Interactive terminal front-end for the SMD resistor code decoder,
//! built on ratatui with an Elm-style model/update/render loop. The UI
//! holds all presentation state (input buffer, theme, last result) and
//! talks to the core only through `decode` and `format_ohms`.

pub mod clipboard;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod prefs;
pub mod styles;

pub use messages::TuiMessage;
pub use model::TuiApp;
pub use prefs::UiPrefs;
pub use styles::{ColorTheme, ThemeKind};
