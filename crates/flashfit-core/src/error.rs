//! Error types for flashfit core

use thiserror::Error;

/// Result type alias for flashfit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Launcher error types
#[derive(Error, Debug)]
pub enum Error {
    // Argument errors
    #[error("Must provide a file path")]
    MissingPath,

    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument { arg: String, reason: String },

    // Geometry errors
    #[error("Invalid display area: {width}x{height} left after window borders")]
    InvalidDisplayArea { width: i64, height: i64 },

    #[error("Window has no client area: {width}x{height} left after window borders")]
    DegenerateWindow { width: i64, height: i64 },

    // Launch errors
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    // Window errors
    #[error("Could not find window for process {pid}")]
    WindowNotFound { pid: u32 },

    #[error("Window system error: {0}")]
    WindowSystem(String),

    #[error("Window management is not supported on this platform")]
    UnsupportedPlatform,
}

impl Error {
    /// Create an argument error
    pub fn invalid_arg(arg: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            arg: arg.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the error came from the user's input rather than the OS
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::MissingPath
                | Error::InvalidArgument { .. }
                | Error::InvalidDisplayArea { .. }
        )
    }

    /// Returns the error code for log output
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::MissingPath => "MISSING_PATH",
            Error::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Error::InvalidDisplayArea { .. } => "INVALID_DISPLAY",
            Error::DegenerateWindow { .. } => "DEGENERATE_WINDOW",
            Error::Launch { .. } => "LAUNCH",
            Error::WindowNotFound { .. } => "WINDOW_NOT_FOUND",
            Error::WindowSystem(_) => "WINDOW_SYSTEM",
            Error::UnsupportedPlatform => "UNSUPPORTED_PLATFORM",
        }
    }
}
