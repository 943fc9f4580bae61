//! Launcher configuration
//!
//! The fixed Cursor locations are modeled as injected configuration
//! values with documented defaults, so tests can substitute temporary
//! fixtures. Defaults match Cursor's on-disk conventions on macOS.

use std::env;
use std::path::PathBuf;

use crate::utils::paths::expand_tilde;

/// Cursor app bundle location
const APP_BUNDLE: &str = "/Applications/Cursor.app";

/// Application name used for `open -a` and AppleScript targeting
const APP_NAME: &str = "Cursor";

/// State store holding the recently-opened history
const STATE_DB: &str = "~/Library/Application Support/Cursor/User/globalStorage/state.vscdb";

/// Resolved filesystem locations of the Cursor installation
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// The `.app` bundle directory
    pub app_bundle: PathBuf,
    /// The executable inside the bundle
    pub app_binary: PathBuf,
    /// Application name for `open -a` and the scripting bridge
    pub app_name: String,
    /// SQLite state store with the recent-project history
    pub state_db: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        // CURSOR_LAUNCHER_APP and CURSOR_LAUNCHER_DB override the
        // standard install locations
        let app_bundle = PathBuf::from(
            env::var("CURSOR_LAUNCHER_APP").unwrap_or_else(|_| APP_BUNDLE.to_string()),
        );
        let app_binary = app_bundle.join("Contents/MacOS").join(APP_NAME);
        let state_db = PathBuf::from(
            env::var("CURSOR_LAUNCHER_DB").unwrap_or_else(|_| expand_tilde(STATE_DB)),
        );

        Self {
            app_bundle,
            app_binary,
            app_name: APP_NAME.to_string(),
            state_db,
        }
    }
}
