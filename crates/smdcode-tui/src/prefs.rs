//! User preference persistence (load/save).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::styles::ThemeKind;

const PREFS_FILENAME: &str = "smdcode_prefs.json";
const CONFIG_DIR_NAME: &str = "smdcode";

/// Persisted UI preferences: theme, live-decode mode, and the last seen
/// terminal geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPrefs {
    pub theme: ThemeKind,
    pub live: bool,
    pub cols: u16,
    pub rows: u16,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            theme: ThemeKind::Light,
            live: true,
            cols: 80,
            rows: 24,
        }
    }
}

/// Load preferences from the standard location.
/// Tries the XDG config dir first, then the working directory. Missing
/// or corrupt files yield `None`; callers fall back to defaults.
#[must_use]
pub fn load_prefs() -> Option<UiPrefs> {
    if let Some(path) = xdg_prefs_path() {
        if path.exists() {
            if let Some(p) = load_from_path(&path) {
                return Some(p);
            }
            tracing::info!(path = %path.display(), "ignoring unreadable preferences file");
        }
    }

    let path = cwd_prefs_path();
    if path.exists() {
        return load_from_path(&path);
    }

    None
}

/// Save preferences to the XDG config directory.
/// Falls back to the working directory if the config dir can't be used.
pub fn save_prefs(p: &UiPrefs) -> std::io::Result<()> {
    let path = if let Some(xdg_path) = xdg_prefs_path() {
        if let Some(parent) = xdg_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        xdg_path
    } else {
        cwd_prefs_path()
    };

    save_to_path(p, &path)
}

/// Save preferences to a specific path.
pub fn save_to_path(p: &UiPrefs, path: &std::path::Path) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(p).map_err(std::io::Error::other)?;
    std::fs::write(path, content)
}

fn load_from_path(path: &std::path::Path) -> Option<UiPrefs> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Get the XDG config directory path for the preferences file.
fn xdg_prefs_path() -> Option<PathBuf> {
    // Try XDG_CONFIG_HOME, fall back to ~/.config
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| {
                let mut p = PathBuf::from(home);
                p.push(".config");
                p
            })
        })?;

    Some(config_dir.join(CONFIG_DIR_NAME).join(PREFS_FILENAME))
}

/// Get the working directory preferences path.
fn cwd_prefs_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!(".{PREFS_FILENAME}"))
}
