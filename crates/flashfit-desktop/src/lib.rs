//! flashfit Desktop - native window discovery and placement
//!
//! Finds the player's top-level window by process ID and moves it:
//! - Windows: `EnumWindows` / `GetWindowRect` / `SetWindowPos`
//! - Elsewhere: every call reports an unsupported platform
//!
//! # Example
//!
//! ```rust,no_run
//! use flashfit_core::{FitArgs, FitSession, LaunchConfig, SystemLauncher};
//! use flashfit_desktop::NativeWindowSystem;
//!
//! # async fn run() -> flashfit_core::Result<()> {
//! let args = FitArgs::parse(["/r1920x1080", "/win10", "movie.swf"])?;
//! let session = FitSession::new(
//!     LaunchConfig::default(),
//!     SystemLauncher,
//!     NativeWindowSystem::new(),
//! );
//! let report = session.run(&args).await?;
//! println!("{}", report.placement);
//! # Ok(())
//! # }
//! ```

pub mod window;

pub use window::NativeWindowSystem;

#[cfg(windows)]
pub use window::Win32WindowSystem;

#[cfg(not(windows))]
pub use window::UnsupportedWindowSystem;

/// Whether this build can control other processes' windows
pub fn is_supported() -> bool {
    cfg!(windows)
}
