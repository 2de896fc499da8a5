//! System clipboard access.

/// Copy text to the system clipboard.
///
/// A fresh clipboard handle is opened per copy; failures (e.g. headless
/// sessions with no display server) are reported to the caller so the
/// UI can surface them in the status bar instead of aborting.
pub fn copy(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_surfaces_errors_instead_of_panicking() {
        // Headless CI has no clipboard; either outcome is acceptable,
        // what matters is that no panic escapes.
        let _ = copy("10kΩ");
    }
}
