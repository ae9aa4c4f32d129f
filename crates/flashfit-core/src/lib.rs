//! flashfit Core - launch a media player and fit its window to the screen
//!
//! This crate provides everything except the native window calls:
//! - Parsing of the launcher's slash-style arguments
//! - Aspect-ratio preserving fit-and-center geometry
//! - Player process launch
//! - The launch → discover → fit → place session
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   FitArgs    │──▶│  FitSession  │──▶│   geometry   │
//! │   (parse)    │   │              │   │    (fit)     │
//! └──────────────┘   └──────┬───────┘   └──────────────┘
//!                           │
//!              ┌────────────┴────────────┐
//!              ▼                         ▼
//!      ┌──────────────┐          ┌──────────────┐
//!      │   Process    │          │    Window    │
//!      │   Launcher   │          │    System    │
//!      └──────────────┘          └──────────────┘
//! ```

pub mod error;
pub mod types;
pub mod args;
pub mod geometry;
pub mod launcher;
pub mod window;
pub mod session;

pub use error::{Error, Result};
pub use types::*;
pub use args::FitArgs;
pub use geometry::fit;
pub use launcher::{ProcessLauncher, SystemLauncher, DEFAULT_PLAYER};
pub use window::WindowSystem;
pub use session::{FitReport, FitSession, LaunchConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library startup
pub fn init() {
    tracing::debug!(version = VERSION, "flashfit core initialized");
}
