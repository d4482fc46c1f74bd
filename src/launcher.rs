use crate::{Result, error, resolver::TargetResolver, runner};
use snafu::OptionExt;
use std::{ffi::OsString, path::PathBuf};
use tracing::*;

/// Locates a target executable and delegates to it.
///
/// The resolver is injected so that the search can be pointed at anything; only the outermost
/// entry point ties it to the real `PATH`.
pub struct Launcher<R> {
    target: String,
    resolver: R,
}

impl<R: TargetResolver> Launcher<R> {
    pub fn new(target: impl Into<String>, resolver: R) -> Self {
        Self {
            target: target.into(),
            resolver,
        }
    }

    /// Name of the executable this launcher forwards to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Find the path of the target executable.
    pub fn resolve(&self) -> Result<PathBuf> {
        self.resolver
            .resolve(&self.target)
            .context(error::TargetNotFoundSnafu { name: &self.target })
    }

    /// Resolve the target and run it with `args`, returning the target's exit code.
    ///
    /// `args` are forwarded verbatim and in order; they do not include the shim's own program
    /// name.  If resolution fails no process is spawned.
    pub fn launch(&self, args: &[OsString]) -> Result<i32> {
        let bin_path = self.resolve()?;

        debug!(
            "Forwarding to {} with {} argument(s): {:?}",
            bin_path.display(),
            args.len(),
            args
        );

        runner::run(&bin_path, args)
    }
}
