//! Command handlers behind the CLI surface
//!
//! Handlers return data; mapping failures to process exit codes stays
//! in the binary.

use crate::alfred::ScriptFilter;
use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::opener::Opener;
use crate::store::RecentProjectStore;

/// Build the script filter for `list`
///
/// Empty-location sentinels are not filtered here; skipping blank rows
/// is the consuming UI's concern.
pub fn list(config: LauncherConfig) -> Result<ScriptFilter> {
    let store = RecentProjectStore::new(config);
    let projects = store.fetch()?;

    let mut filter = ScriptFilter::new();
    for project in &projects {
        filter.add_item(project.to_alfred_item());
    }

    Ok(filter)
}

/// Script filter carrying a single non-selectable error row
///
/// `list` still emits a well-formed document when the store fails.
pub fn error_filter(err: &LauncherError) -> ScriptFilter {
    let mut filter = ScriptFilter::new();
    filter.add_error_item(&err.to_string());
    filter
}

/// Open a project location in Cursor
pub fn open(config: LauncherConfig, uri: &str) -> Result<()> {
    tracing::debug!(uri, "opening project");
    Opener::new(config).open(uri)
}
