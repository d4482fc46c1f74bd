pub mod error;
pub mod launcher;
pub(crate) mod logging;
pub mod resolver;
pub mod runner;

pub use error::{Error, Result};
pub use launcher::Launcher;
pub use resolver::{SearchPathResolver, TargetResolver};

use std::ffi::OsString;

/// The executable this shim forwards to.
pub const TARGET_NAME: &str = "ggufy";

/// Main entry point for the shim.
///
/// Forwards every argument after our own program name to [`TARGET_NAME`] as found on `PATH`, and
/// returns the exit code the process should terminate with: the target's own code, or one of the
/// codes in [`error`] if it could not be run.
///
/// This is the only place that reads the real process environment.
pub fn shim_main() -> i32 {
    logging::init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let launcher = Launcher::new(TARGET_NAME, SearchPathResolver::from_env());

    match launcher.launch(&args) {
        Ok(code) => code,
        Err(e @ Error::TargetNotFound { .. }) => {
            println!("{e}");
            e.exit_code()
        }
        Err(e) => {
            eprintln!("ggufy-shim: {e}");
            e.exit_code()
        }
    }
}
