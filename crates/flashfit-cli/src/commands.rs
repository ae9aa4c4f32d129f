//! CLI command implementations

use std::time::Duration;

use anyhow::{anyhow, Context};
use flashfit_core::{Error, FitArgs, FitSession, LaunchConfig, Rect, SystemLauncher};
use flashfit_desktop::NativeWindowSystem;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::output::format_report;

/// Launch the player and fit its window
pub async fn launch(args: &FitArgs, config: LaunchConfig, format: &str) -> anyhow::Result<()> {
    if !flashfit_desktop::is_supported() {
        warn!("Refusing to launch: window placement is not available on this platform");
        return Err(Error::UnsupportedPlatform.into());
    }

    let session = FitSession::new(config, SystemLauncher, NativeWindowSystem::new());

    // Spinner is hidden when stderr is not a terminal
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Waiting for {}...", session.config().player.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = session.run(args).await;
    spinner.finish_and_clear();

    let report = result.inspect_err(|e| debug!(code = e.error_code(), "Run failed"))?;
    println!("{}", format_report(&report, format));
    Ok(())
}

/// Print the placement a window of `size` would get, without launching
pub fn plan(args: &FitArgs, config: LaunchConfig, size: &str, format: &str) -> anyhow::Result<()> {
    let window = parse_size(size).with_context(|| format!("invalid --plan size '{}'", size))?;

    let session = FitSession::new(config, SystemLauncher, NativeWindowSystem::new());
    let report = session.plan(args, window)?;

    println!("{}", format_report(&report, format));
    Ok(())
}

/// Parse `<W>x<H>` into a rectangle at the origin
fn parse_size(size: &str) -> anyhow::Result<Rect> {
    let (w, h) = size
        .to_lowercase()
        .split_once('x')
        .map(|(w, h)| (w.trim().to_string(), h.trim().to_string()))
        .ok_or_else(|| anyhow!("expected <width>x<height>"))?;

    let width: i32 = w.parse().with_context(|| format!("bad width '{}'", w))?;
    let height: i32 = h.parse().with_context(|| format!("bad height '{}'", h))?;
    Ok(Rect::from_size(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("550x400").unwrap(), Rect::from_size(550, 400));
        assert_eq!(parse_size("1920X1080").unwrap(), Rect::from_size(1920, 1080));
        assert!(parse_size("1920").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn test_plan_rejects_bad_size() {
        let args = FitArgs::parse(["/r800x600", "movie.swf"]).unwrap();
        let err = plan(&args, LaunchConfig::default(), "big", "text").unwrap_err();
        assert!(err.to_string().contains("invalid --plan size 'big'"));
    }
}
