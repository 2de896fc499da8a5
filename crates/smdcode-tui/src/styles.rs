//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Which of the two built-in themes is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    /// Switch to the other theme.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Color theme for the TUI.
pub struct ColorTheme {
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
    pub background: Color,
}

impl ColorTheme {
    /// Resolve the palette for a theme kind.
    #[must_use]
    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self {
                accent: Color::Cyan,
                success: Color::Green,
                error: Color::Red,
                text: Color::Black,
                muted: Color::DarkGray,
                background: Color::White,
            },
            ThemeKind::Dark => Self {
                accent: Color::Cyan,
                success: Color::LightGreen,
                error: Color::LightRed,
                text: Color::White,
                muted: Color::Gray,
                background: Color::Black,
            },
        }
    }

    /// Get the style for a header or panel title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted hint text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for the decoded value.
    #[must_use]
    pub fn value_style(&self) -> Style {
        Style::default()
            .fg(self.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the status-bar style for ok or error states.
    #[must_use]
    pub fn status_style(&self, is_error: bool) -> Style {
        if is_error {
            Style::default().fg(self.error)
        } else {
            Style::default().fg(self.success)
        }
    }
}
