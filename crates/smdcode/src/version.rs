//! Version information.

/// Get the version string.
#[must_use]
#[allow(dead_code)]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the full version string.
#[must_use]
#[allow(dead_code)]
pub fn full_version() -> String {
    format!("smdcode {}", version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn full_version_contains_name() {
        assert!(full_version().starts_with("smdcode "));
    }
}
