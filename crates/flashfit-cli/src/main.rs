//! flashfit CLI - launch a media player and fit its window to the screen
//!
//! Features:
//! - Windows 10/11 chrome and taskbar presets
//! - Per-edge window border and display area overrides
//! - Window lookup by process ID, optionally by title
//! - Dry-run planning without launching anything

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use console::style;
use flashfit_core::{FitArgs, LaunchConfig, DEFAULT_PLAYER};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

/// flashfit - fit a player window to the display
#[derive(Parser)]
#[command(name = "flashfit")]
#[command(author = "Purple Squirrel Media")]
#[command(version)]
#[command(about = "Launch a media player and fit its window to the screen", long_about = None)]
#[command(after_help = "Tokens:\n  \
    /r<W>x<H>                    Display resolution\n  \
    /win10, /win11               Window chrome and taskbar preset\n  \
    /wl<N> /wr<N> /wt<N> /wb<N>  Window border overrides\n  \
    /dl<N> /dr<N> /dt<N> /db<N>  Display area overrides\n  \
    <path>                       Media file to open")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json, table)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Player executable
    #[arg(long, default_value = DEFAULT_PLAYER)]
    player: PathBuf,

    /// Only accept a player window with this exact title
    #[arg(long)]
    title: Option<String>,

    /// Milliseconds to let the player start before looking for its window
    #[arg(long, default_value = "1000")]
    settle_ms: u64,

    /// Milliseconds to keep looking if the window is not there yet
    #[arg(long, default_value = "0")]
    timeout_ms: u64,

    /// Milliseconds between window lookups
    #[arg(long, default_value = "100")]
    poll_ms: u64,

    /// Print the placement for a window of this outer size and exit
    #[arg(long, value_name = "WxH")]
    plan: Option<String>,

    /// Launcher tokens and media path
    tokens: Vec<String>,
}

impl Cli {
    fn launch_config(&self) -> LaunchConfig {
        LaunchConfig {
            player: self.player.clone(),
            window_title: self.title.clone(),
            settle: Duration::from_millis(self.settle_ms),
            timeout: Duration::from_millis(self.timeout_ms),
            poll_interval: Duration::from_millis(self.poll_ms),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG overrides the verbosity flag
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            if is_usage_error(&e) {
                eprintln!("{}", style("Run with --help to see the accepted tokens.").dim());
            }
            ExitCode::FAILURE
        }
    }
}

/// Whether the failure came from the command line rather than the player or OS
fn is_usage_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<flashfit_core::Error>()
        .is_some_and(flashfit_core::Error::is_usage_error)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    flashfit_core::init();

    let args = FitArgs::parse(&cli.tokens)?;
    let config = cli.launch_config();

    match &cli.plan {
        Some(size) => commands::plan(&args, config, size, &cli.format),
        None => commands::launch(&args, config, &cli.format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_get_hint() {
        let err = anyhow::Error::from(FitArgs::parse(["/r800x600"]).unwrap_err());
        assert!(is_usage_error(&err));

        let err = anyhow::Error::from(flashfit_core::Error::WindowNotFound { pid: 1 });
        assert!(!is_usage_error(&err));

        let err = anyhow::anyhow!("invalid --plan size");
        assert!(!is_usage_error(&err));
    }

    #[test]
    fn test_cli_collects_tokens() {
        let cli = Cli::try_parse_from(["flashfit", "--timeout-ms", "500", "/r800x600", "/WIN10", "a.swf"])
            .unwrap();
        assert_eq!(cli.tokens, ["/r800x600", "/WIN10", "a.swf"]);

        let config = cli.launch_config();
        assert_eq!(config.timeout, Duration::from_millis(500));
        assert_eq!(config.player, PathBuf::from(DEFAULT_PLAYER));
    }
}
