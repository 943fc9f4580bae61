//! Project records and display formatting
//!
//! Cursor remembers projects as folder URIs, either local
//! (`file:///path`) or remote development
//! (`vscode-remote://authority/path`, with a percent-encoded
//! authority). This module classifies those locations and turns each
//! record into the Alfred item shown in the results list.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

use crate::alfred::Item;

/// Prefix marking a local filesystem location
pub const FILE_PREFIX: &str = "file://";

/// Prefix marking a remote-development location
pub const VSCODE_REMOTE_PREFIX: &str = "vscode-remote://";

// Remote labels sometimes carry a " in <workspace>-<n> (undefined)"
// artifact injected by the editor. The character class keeps the match
// from crossing bracket or paren boundaries.
static LABEL_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r" in [^\[\]()]+-\d+ \(undefined\)").expect("Invalid LABEL_SUFFIX_REGEX pattern")
});

/// One remembered project from Cursor's history
///
/// `folderUri` and `label` are Cursor's own field names inside the
/// stored history blob and must not be renamed.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    #[serde(rename = "folderUri", default)]
    pub folder_uri: String,
    #[serde(default)]
    pub label: String,
}

/// Classified open target: a location is either a path on this machine
/// or a remote-development URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchTarget {
    Local { path: String },
    Remote { uri: String },
}

impl LaunchTarget {
    /// Classify a location string by its prefix
    ///
    /// Strings carrying neither prefix are treated as plain local
    /// paths; the opener's existence check rejects anything that does
    /// not resolve on disk.
    pub fn classify(location: &str) -> Self {
        if let Some(path) = location.strip_prefix(FILE_PREFIX) {
            Self::Local {
                path: path.to_string(),
            }
        } else if location.starts_with(VSCODE_REMOTE_PREFIX) {
            Self::Remote {
                uri: location.to_string(),
            }
        } else {
            Self::Local {
                path: location.to_string(),
            }
        }
    }
}

impl Project {
    /// Convert this record to an Alfred item
    ///
    /// Records without a location render as an empty item rather than
    /// an error; the consuming UI skips blank rows.
    pub fn to_alfred_item(&self) -> Item {
        if self.folder_uri.is_empty() {
            return Item::default();
        }

        match LaunchTarget::classify(&self.folder_uri) {
            LaunchTarget::Local { path } => self.format_local(&path),
            LaunchTarget::Remote { .. } => self.format_remote(),
        }
    }

    fn format_local(&self, path: &str) -> Item {
        let display_name = if self.label.is_empty() {
            leaf_name(path)
        } else {
            self.label.clone()
        };

        Item {
            title: format!("📁 {display_name}"),
            subtitle: self.folder_uri.clone(),
            arg: self.folder_uri.clone(),
            ..Item::default()
        }
    }

    fn format_remote(&self) -> Item {
        let trimmed = self
            .folder_uri
            .strip_prefix(VSCODE_REMOTE_PREFIX)
            .unwrap_or(&self.folder_uri);
        let (authority, remainder) = trimmed.split_once('/').unwrap_or((trimmed, ""));
        let remote_path = format!("/{remainder}");

        // Decoding failure is non-fatal; keep the raw authority
        let authority = match urlencoding::decode(authority) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => authority.to_string(),
        };

        let display_name = if self.label.is_empty() {
            format!("{} [{authority}]", leaf_name(&remote_path))
        } else {
            self.label.clone()
        };
        let display_name = remove_suffix_pattern(&display_name);

        // The reconstructed URI keeps the decoded authority and is not
        // re-encoded; the opener accepts decoded-authority URIs
        let full_uri = format!("{VSCODE_REMOTE_PREFIX}{authority}{remote_path}");

        Item {
            title: format!("🌐 {display_name}"),
            subtitle: display_name,
            arg: full_uri,
            ..Item::default()
        }
    }
}

/// Last path segment, falling back to the input when there is none
fn leaf_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Scrub the injected workspace suffix from a display name
pub fn remove_suffix_pattern(name: &str) -> String {
    LABEL_SUFFIX_REGEX.replace_all(name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(folder_uri: &str, label: &str) -> Project {
        Project {
            folder_uri: folder_uri.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_classify_local() {
        assert_eq!(
            LaunchTarget::classify("file:///Users/dev/project"),
            LaunchTarget::Local {
                path: "/Users/dev/project".to_string()
            }
        );
    }

    #[test]
    fn test_classify_remote() {
        assert_eq!(
            LaunchTarget::classify("vscode-remote://ssh-remote%2Bhost/home/dev"),
            LaunchTarget::Remote {
                uri: "vscode-remote://ssh-remote%2Bhost/home/dev".to_string()
            }
        );
    }

    #[test]
    fn test_classify_unprefixed_falls_back_to_local_path() {
        assert_eq!(
            LaunchTarget::classify("/Users/dev/project"),
            LaunchTarget::Local {
                path: "/Users/dev/project".to_string()
            }
        );
    }

    #[test]
    fn test_empty_location_renders_empty_item() {
        let item = project("", "ignored").to_alfred_item();
        assert_eq!(item.title, "");
        assert_eq!(item.subtitle, "");
        assert_eq!(item.arg, "");
        assert!(item.icon.is_none());
        assert!(item.valid.is_none());
    }

    #[test]
    fn test_local_without_label_uses_folder_name() {
        let item = project("file:///Users/dev/my-project", "").to_alfred_item();
        assert_eq!(item.title, "📁 my-project");
        assert_eq!(item.subtitle, "file:///Users/dev/my-project");
        assert_eq!(item.arg, "file:///Users/dev/my-project");
    }

    #[test]
    fn test_local_label_overrides_folder_name() {
        let item = project("file:///test/project", "test-project").to_alfred_item();
        assert_eq!(item.title, "📁 test-project");
        assert_eq!(item.arg, "file:///test/project");
    }

    #[test]
    fn test_local_arg_is_identity() {
        let uri = "file:///Users/dev/some where/odd name";
        let item = project(uri, "").to_alfred_item();
        assert_eq!(item.arg, uri);
    }

    #[test]
    fn test_remote_decodes_authority() {
        let item =
            project("vscode-remote://ssh-remote%2Bbuild-host/home/dev/api", "").to_alfred_item();
        assert_eq!(item.title, "🌐 api [ssh-remote+build-host]");
        assert_eq!(item.subtitle, "api [ssh-remote+build-host]");
        assert_eq!(item.arg, "vscode-remote://ssh-remote+build-host/home/dev/api");
    }

    #[test]
    fn test_remote_roundtrip_without_escapes() {
        let item = project("vscode-remote://dev-container/workspace/app", "").to_alfred_item();
        let rest = item.arg.strip_prefix(VSCODE_REMOTE_PREFIX).unwrap();
        let (authority, path) = rest.split_once('/').unwrap();
        assert_eq!(authority, "dev-container");
        assert_eq!(format!("/{path}"), "/workspace/app");
    }

    #[test]
    fn test_remote_without_path_separator() {
        let item = project("vscode-remote://ssh-remote%2Bhost", "").to_alfred_item();
        // No path component: the remainder is empty and the path is "/"
        assert_eq!(item.arg, "vscode-remote://ssh-remote+host/");
    }

    #[test]
    fn test_remote_label_suffix_scrubbed() {
        let item = project(
            "vscode-remote://ssh-remote%2Bhost/home/dev/api",
            "api in api-0 (undefined)",
        )
        .to_alfred_item();
        assert_eq!(item.title, "🌐 api");
        assert_eq!(item.subtitle, "api");
    }

    #[test]
    fn test_remove_suffix_pattern_with_match() {
        assert_eq!(
            remove_suffix_pattern("project-name in project-name-0 (undefined)"),
            "project-name"
        );
    }

    #[test]
    fn test_remove_suffix_pattern_without_match() {
        assert_eq!(
            remove_suffix_pattern("normal project name"),
            "normal project name"
        );
    }

    #[test]
    fn test_remove_suffix_pattern_keeps_trailing_text() {
        assert_eq!(
            remove_suffix_pattern("project in test-123 (undefined) extra"),
            "project extra"
        );
    }

    #[test]
    fn test_unprefixed_location_formats_as_local() {
        let item = project("some-string", "").to_alfred_item();
        assert_eq!(item.title, "📁 some-string");
        assert_eq!(item.arg, "some-string");
    }
}
