//! Player process launch

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Default player executable, resolved through `PATH`
pub const DEFAULT_PLAYER: &str = "flashplayer.exe";

/// Starts the player process
pub trait ProcessLauncher {
    /// Launch `program` with `file` as its only argument and return the child PID.
    ///
    /// The child is left running after the launcher exits.
    fn launch(&self, program: &Path, file: &Path) -> Result<u32>;
}

impl<T: ProcessLauncher + ?Sized> ProcessLauncher for &T {
    fn launch(&self, program: &Path, file: &Path) -> Result<u32> {
        (**self).launch(program, file)
    }
}

/// Launches the player with `std::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, program: &Path, file: &Path) -> Result<u32> {
        debug!(program = %program.display(), file = %file.display(), "Spawning player");

        // Command quotes the path, so spaces survive
        let child = Command::new(program)
            .arg(file)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| Error::Launch {
                program: program.display().to_string(),
                source,
            })?;

        let pid = child.id();
        info!(pid, program = %program.display(), "Player started");

        // Dropping the handle neither waits for nor kills the child
        drop(child);
        Ok(pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_launch_error() {
        let err = SystemLauncher
            .launch(
                Path::new("flashfit-no-such-player-binary"),
                Path::new("movie.swf"),
            )
            .unwrap_err();

        assert_eq!(err.error_code(), "LAUNCH");
        assert!(err.to_string().contains("flashfit-no-such-player-binary"));
    }
}
