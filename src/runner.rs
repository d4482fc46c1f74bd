//! Running the resolved binary as a child process.
//!
//! The child inherits our stdin, stdout, stderr, environment and working directory; nothing it
//! reads or writes passes through the shim.  We block until it exits and report its exit code so
//! the caller can terminate with the same status.
//!
//! - **Unix**: a child killed by signal `N` is reported as `128 + N`, the way shells do it.
//! - **Windows**: Ctrl-C is ignored in the shim while the child runs.  Both processes receive the
//!   console event; the child decides what to do with it and we still exit with its code.

use crate::error::{self, EXIT_FAILURE, Result};
use snafu::ResultExt;
use std::{
    ffi::OsString,
    path::Path,
    process::{Command, ExitStatus},
};
use tracing::*;

/// Spawn `bin_path` with `args`, wait for it, and return the exit code it finished with.
///
/// A non-zero exit of the child is not an error.  `Err` is only returned when the child cannot be
/// started or waited on.
pub fn run(bin_path: &Path, args: &[OsString]) -> Result<i32> {
    #[cfg(windows)]
    ignore_console_interrupts()?;

    let mut child = Command::new(bin_path)
        .args(args)
        .spawn()
        .context(error::SpawnFailedSnafu { path: bin_path })?;

    debug!("Spawned {} as pid {}", bin_path.display(), child.id());

    let status = child.wait().context(error::WaitFailedSnafu)?;

    let code = exit_code(status);
    trace!(%status, code, "Child process exited");

    Ok(code)
}

/// Install a console control handler that does nothing, so Ctrl-C doesn't terminate the shim
/// before the child does.
#[cfg(windows)]
fn ignore_console_interrupts() -> Result<()> {
    ctrlc::set_handler(|| {}).context(error::ConsoleHandlerFailedSnafu)
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    EXIT_FAILURE
}
