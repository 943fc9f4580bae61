//! Two-tier project opening
//!
//! Opening first invokes the Cursor binary directly. When that fails,
//! the app bundle is bootstrapped with `open -a`, given a fixed
//! interval to register its scripting interface, and then told to open
//! the location over AppleScript. There is no third tier and no retry
//! beyond this escalation.

use std::path::Path;
use std::process::Command;
use std::thread;
use std::time::Duration;

use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::project::LaunchTarget;

/// Wait between the bootstrap launch and the AppleScript open, giving
/// the starting app time to register its scripting interface
const SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Opens project locations in Cursor
pub struct Opener {
    config: LauncherConfig,
    settle_delay: Duration,
}

impl Opener {
    pub fn new(config: LauncherConfig) -> Self {
        Self {
            config,
            settle_delay: SETTLE_DELAY,
        }
    }

    /// Override the settle delay (test fixtures)
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Open a project location in Cursor
    pub fn open(&self, uri: &str) -> Result<()> {
        self.validate_environment()?;

        match LaunchTarget::classify(uri) {
            LaunchTarget::Local { path } => self.open_local(&path),
            LaunchTarget::Remote { uri } => self.open_remote(&uri),
        }
    }

    fn validate_environment(&self) -> Result<()> {
        if !self.config.app_bundle.exists() {
            return Err(LauncherError::environment("Cursor app not found"));
        }

        if !self.config.app_binary.exists() {
            return Err(LauncherError::environment("Cursor binary not found"));
        }

        Ok(())
    }

    fn open_local(&self, path: &str) -> Result<()> {
        if !Path::new(path).exists() {
            return Err(LauncherError::PathNotFound(path.to_string()));
        }

        if self.launch_binary(&["--new-window", path]) {
            return Ok(());
        }

        let uri = format!("{}{path}", crate::project::FILE_PREFIX);
        self.bootstrap_and_open(&uri)
    }

    fn open_remote(&self, uri: &str) -> Result<()> {
        if self.launch_binary(&["--new-window", "--folder-uri", uri]) {
            return Ok(());
        }

        self.bootstrap_and_open(uri)
    }

    /// Tier 1: invoke the binary directly; true on a clean exit
    fn launch_binary(&self, args: &[&str]) -> bool {
        match Command::new(&self.config.app_binary).args(args).status() {
            Ok(status) if status.success() => true,
            Ok(status) => {
                tracing::debug!(%status, "direct launch exited nonzero, falling back");
                false
            }
            Err(err) => {
                tracing::debug!(error = %err, "direct launch failed, falling back");
                false
            }
        }
    }

    /// Tier 2: bootstrap the app bundle, wait for it to settle, then
    /// open the location over the scripting bridge
    fn bootstrap_and_open(&self, uri: &str) -> Result<()> {
        let bootstrap = Command::new("open")
            .args(["-a", &self.config.app_name])
            .status()
            .map_err(|err| LauncherError::launch(format!("failed to launch Cursor app: {err}")))?;
        if !bootstrap.success() {
            return Err(LauncherError::launch("failed to launch Cursor app"));
        }

        thread::sleep(self.settle_delay);

        let script = open_location_script(&self.config.app_name, uri);
        let output = Command::new("osascript")
            .args(["-e", &script])
            .output()
            .map_err(|err| LauncherError::launch(format!("failed to open project: {err}")))?;
        if !output.status.success() {
            let detail = String::from_utf8_lossy(&output.stderr);
            return Err(LauncherError::launch(format!(
                "failed to open project: {}",
                detail.trim()
            )));
        }

        Ok(())
    }
}

/// AppleScript telling the app to open a location URI
fn open_location_script(app_name: &str, uri: &str) -> String {
    let escaped = uri.replace('"', "\\\"");
    format!("tell application \"{app_name}\" to open location \"{escaped}\"")
}
