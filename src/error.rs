use snafu::prelude::*;
use std::{io, path::PathBuf};

/// Exit code used when the target cannot be found, same as a shell's "command not found".
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code used when the target was found but could not be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Exit code for failures inside the shim itself.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("{name} binary not found on PATH. Install via brew or cargo."))]
    TargetNotFound { name: String },

    #[snafu(display("Failed to spawn process at {}: {source}", path.display()))]
    SpawnFailed { path: PathBuf, source: io::Error },

    #[snafu(display("Failed to wait for child process: {source}"))]
    WaitFailed { source: io::Error },

    #[cfg(windows)]
    #[snafu(display("Failed to set up Windows console control handler"))]
    ConsoleHandlerFailed { source: ctrlc::Error },
}

impl Error {
    /// The exit code the shim terminates with when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TargetNotFound { .. } => EXIT_NOT_FOUND,
            // The binary vanished between resolution and spawn
            Self::SpawnFailed { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                EXIT_NOT_FOUND
            }
            Self::SpawnFailed { .. } => EXIT_NOT_EXECUTABLE,
            Self::WaitFailed { .. } => EXIT_FAILURE,
            #[cfg(windows)]
            Self::ConsoleHandlerFailed { .. } => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
