//! Fit Session - launches the player and places its window
//!
//! Sequence:
//! - Spawn the player with the media file
//! - Let the player settle, then look up its window by PID
//! - Fit the window into the display area and apply the placement

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, instrument};

use crate::{
    args::FitArgs,
    geometry::fit,
    launcher::{ProcessLauncher, DEFAULT_PLAYER},
    types::*,
    window::WindowSystem,
    Error, Result,
};

/// Launch and window discovery settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Player executable
    pub player: PathBuf,
    /// Exact title the player window must carry, if any
    pub window_title: Option<String>,
    /// Wait after launch before the first lookup
    pub settle: Duration,
    /// Extra time to keep looking after the first lookup misses
    pub timeout: Duration,
    /// Delay between lookups while waiting
    pub poll_interval: Duration,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            player: PathBuf::from(DEFAULT_PLAYER),
            window_title: None,
            settle: Duration::from_millis(1000),
            timeout: Duration::ZERO,
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FitReport {
    /// Player process ID, absent for planned runs
    pub pid: Option<u32>,
    /// Media file handed to the player
    pub path: PathBuf,
    /// Window rectangle before placement
    pub window: Rect,
    /// Display area the window was fitted into
    pub display: Rect,
    /// Window chrome used in the fit
    pub borders: BorderOffsets,
    /// Applied (or planned) placement
    pub placement: Placement,
}

impl FitReport {
    /// Serialize the report to pretty JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A single launch-and-place run
pub struct FitSession<L, W> {
    config: LaunchConfig,
    launcher: L,
    windows: W,
}

impl<L: ProcessLauncher, W: WindowSystem> FitSession<L, W> {
    /// Create a session over the given launcher and window system
    pub fn new(config: LaunchConfig, launcher: L, windows: W) -> Self {
        Self { config, launcher, windows }
    }

    /// Session configuration
    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Launch the player, find its window, and fit it into the display area
    #[instrument(skip(self, args), fields(path = %args.path.display()))]
    pub async fn run(&self, args: &FitArgs) -> Result<FitReport> {
        let pid = self.launcher.launch(&self.config.player, &args.path)?;

        let handle = self.wait_for_window(pid).await?;
        let window = self.windows.window_rect(handle)?;
        debug!(%handle, %window, "Found player window");

        let placement = fit(window, args.display, args.borders)?;
        self.windows.set_placement(handle, &placement)?;
        info!(pid, %handle, %placement, "Window placed");

        Ok(FitReport {
            pid: Some(pid),
            path: args.path.clone(),
            window,
            display: args.display,
            borders: args.borders,
            placement,
        })
    }

    /// Compute the placement a window of `window` size would receive, without launching
    pub fn plan(&self, args: &FitArgs, window: Rect) -> Result<FitReport> {
        let placement = fit(window, args.display, args.borders)?;
        Ok(FitReport {
            pid: None,
            path: args.path.clone(),
            window,
            display: args.display,
            borders: args.borders,
            placement,
        })
    }

    /// Settle, then look up the window until found or the timeout budget is spent
    async fn wait_for_window(&self, pid: u32) -> Result<WindowHandle> {
        let title = self.config.window_title.as_deref();

        sleep(self.config.settle).await;
        let deadline = Instant::now() + self.config.timeout;

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            if let Some(handle) = self.windows.find_window(pid, title)? {
                debug!(pid, attempts, "Window lookup succeeded");
                return Ok(handle);
            }

            let now = Instant::now();
            if now >= deadline {
                debug!(pid, attempts, "Window lookup gave up");
                return Err(Error::WindowNotFound { pid });
            }
            sleep(self.config.poll_interval.min(deadline - now)).await;
        }
    }
}
