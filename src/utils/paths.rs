//! Path utilities
//!
//! Helpers for resolving the user-home-relative paths Cursor uses for
//! its on-disk state.

/// Expand tilde (~) to the user's home directory
///
/// # Arguments
/// * `path` - A path string that may start with ~/
///
/// # Returns
/// The expanded path string with ~ replaced by the home directory
pub fn expand_tilde(path: &str) -> String {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = home::home_dir() {
            return home.join(stripped).to_string_lossy().to_string();
        }
    } else if path == "~" {
        if let Some(home) = home::home_dir() {
            return home.to_string_lossy().to_string();
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        // This test depends on the home directory existing
        let expanded = expand_tilde("~/test");
        assert!(!expanded.starts_with("~/"));
        assert!(expanded.ends_with("/test") || expanded.ends_with("\\test"));
    }

    #[test]
    fn test_expand_tilde_no_tilde() {
        let path = "/usr/local/bin";
        assert_eq!(expand_tilde(path), path);
    }

    #[test]
    fn test_expand_tilde_only_once() {
        let expanded = expand_tilde("~/a/~/b");
        assert!(expanded.ends_with("/a/~/b"));
    }
}
