//! Mapping a command name to the executable that should be run for it.
//!
//! The [`TargetResolver`] trait is the seam between the launcher and the host environment. The
//! default implementation, [`SearchPathResolver`], walks an explicit search-path list with the
//! `which` crate, so tests can point it at a temporary directory instead of the real `PATH`.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};
use tracing::*;

pub trait TargetResolver {
    fn resolve(&self, command: &str) -> Option<PathBuf>;
}

impl<F> TargetResolver for F
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        self(command)
    }
}

/// Resolves commands against a search-path list, the same way a shell would.
///
/// Execute permission is honored by `which`: on Unix a candidate needs an execute bit, on Windows
/// the `PATHEXT` extensions are tried.
#[derive(Debug, Clone)]
pub struct SearchPathResolver {
    search_path: Option<OsString>,
    cwd: PathBuf,

    /// Canonical path of an executable that must never be returned, usually the shim itself.
    exclude: Option<PathBuf>,
}

impl SearchPathResolver {
    /// Create a resolver over `search_path`, a platform-formatted list such as the value of
    /// `PATH`.  Relative entries in the list are interpreted relative to `cwd`.
    pub fn new(search_path: Option<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            search_path,
            cwd: cwd.into(),
            exclude: None,
        }
    }

    /// Build a resolver from the real process environment.
    ///
    /// The shim's own executable is excluded, so a shim installed under the target's name does
    /// not find and re-run itself.
    pub fn from_env() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        let resolver = Self::new(std::env::var_os("PATH"), cwd);

        match std::env::current_exe() {
            Ok(exe) => resolver.excluding(exe),
            Err(e) => {
                debug!("Unable to determine our own executable path: {}", e);
                resolver
            }
        }
    }

    /// Never resolve to `path`, or anything that canonicalizes to the same file.
    pub fn excluding(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.exclude = Some(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()));
        self
    }

    fn is_excluded(&self, candidate: &Path) -> bool {
        let Some(exclude) = &self.exclude else {
            return false;
        };

        candidate
            .canonicalize()
            .is_ok_and(|canonical| &canonical == exclude)
    }
}

impl TargetResolver for SearchPathResolver {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref().filter(|path| !path.is_empty())?;

        debug!(command, ?search_path, "Searching for executable");

        let candidates = match which::which_in_all(command, Some(search_path), &self.cwd) {
            Ok(candidates) => candidates,
            Err(e) => {
                debug!("Search for `{}` failed: {}", command, e);
                return None;
            }
        };

        for candidate in candidates {
            if self.is_excluded(&candidate) {
                debug!(
                    "Skipping {} because it is this shim's own executable",
                    candidate.display()
                );
                continue;
            }

            debug!("Resolved `{}` to {}", command, candidate.display());
            return Some(candidate);
        }

        None
    }
}
