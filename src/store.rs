//! Read-only access to Cursor's state store
//!
//! Cursor persists application state in a SQLite key/value table
//! (`ItemTable`) inside `state.vscdb`. The recently-opened history is
//! one JSON blob under a well-known key. The live editor may have the
//! database open at the same time, so the connection is strictly
//! read-only and never creates or mutates the file.

use rusqlite::{Connection, OpenFlags};
use serde::Deserialize;

use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::project::Project;

/// Key of the recently-opened history blob in `ItemTable`
const HISTORY_KEY: &str = "history.recentlyOpenedPathsList";

#[derive(Debug, Deserialize)]
struct RecentlyOpened {
    #[serde(default)]
    entries: Vec<Project>,
}

/// Fetches recent projects from Cursor's state store
pub struct RecentProjectStore {
    config: LauncherConfig,
}

impl RecentProjectStore {
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    /// Fetch recent projects, most recent first
    ///
    /// The source order of the stored entries is preserved; Cursor
    /// already keeps them most-recent-first.
    pub fn fetch(&self) -> Result<Vec<Project>> {
        self.validate_environment()?;

        let conn = Connection::open_with_flags(
            &self.config.state_db,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let value: String = conn
            .query_row(
                "SELECT value FROM ItemTable WHERE key = ?1",
                [HISTORY_KEY],
                |row| row.get(0),
            )
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => LauncherError::NotFound,
                other => LauncherError::Query(other),
            })?;

        let data: RecentlyOpened = serde_json::from_str(&value)?;

        // Entries without a folder URI carry nothing to display or open
        let projects: Vec<Project> = data
            .entries
            .into_iter()
            .filter(|entry| !entry.folder_uri.is_empty())
            .collect();

        tracing::debug!(count = projects.len(), "fetched recent projects");
        Ok(projects)
    }

    fn validate_environment(&self) -> Result<()> {
        if !self.config.app_bundle.exists() {
            return Err(LauncherError::environment("Cursor app not found"));
        }

        if !self.config.state_db.exists() {
            return Err(LauncherError::environment(format!(
                "Cursor database file not found: {}",
                self.config.state_db.display()
            )));
        }

        Ok(())
    }
}
