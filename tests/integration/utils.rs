//! Utility functions to help run the shim as part of a test
use assert_cmd::{Command, cargo::cargo_bin_cmd};
use assert_fs::TempDir;
#[cfg(unix)]
use assert_fs::{fixture::ChildPath, prelude::*};
#[cfg(unix)]
use std::path::Path;

/// The exact line the shim prints when `ggufy` is not on the search path.
pub(crate) const NOT_FOUND_LINE: &str =
    "ggufy binary not found on PATH. Install via brew or cargo.\n";

/// Stub that records its arguments, one per line, to `$STUB_ARGS_FILE` and exits with
/// `$STUB_EXIT_CODE`.
#[cfg(unix)]
const RECORDING_STUB: &str = r#"#!/bin/sh
: > "$STUB_ARGS_FILE"
for arg in "$@"; do
  printf '%s\n' "$arg" >> "$STUB_ARGS_FILE"
done
exit "${STUB_EXIT_CODE:-0}"
"#;

pub(crate) struct TestFs {
    /// The only directory on the shim's `PATH`
    pub(crate) bin_dir: TempDir,
    pub(crate) cwd: TempDir,
}

impl TestFs {
    fn new() -> Self {
        let bin_dir = TempDir::with_prefix("ggufy-shim-bin-").unwrap();
        let cwd = TempDir::with_prefix("ggufy-shim-cwd-").unwrap();

        Self { bin_dir, cwd }
    }
}

/// Represents the `ggufy-shim` binary for use in tests.
///
/// `PATH` is replaced with a single empty temp dir, so nothing from the host is found unless a
/// test installs it, and the log filter variables are cleared so stderr stays quiet.
pub(crate) struct Shim {
    pub(crate) cmd: Command,
    pub(crate) test_fs: TestFs,
}

impl Shim {
    pub(crate) fn with_test_fs() -> Self {
        let test_fs = TestFs::new();

        let mut cmd = cargo_bin_cmd!("ggufy-shim");
        cmd.env("PATH", test_fs.bin_dir.path())
            .env_remove("GGUFY_SHIM_LOG")
            .env_remove("RUST_LOG")
            .current_dir(test_fs.cwd.path());

        Self { cmd, test_fs }
    }

    /// Install a script under `name` in the bin dir.
    #[cfg(unix)]
    pub(crate) fn install_stub(&self, name: &str, script: &str) -> ChildPath {
        install_executable(&self.test_fs.bin_dir, name, script)
    }

    /// Install a `ggufy` that records its arguments, and point it at a file to record them in.
    ///
    /// Returns the path of that file.
    #[cfg(unix)]
    pub(crate) fn install_recording_stub(&mut self) -> ChildPath {
        self.install_stub("ggufy", RECORDING_STUB);

        let args_file = self.test_fs.cwd.child("recorded-args");
        self.cmd.env("STUB_ARGS_FILE", args_file.path());
        args_file
    }
}

#[cfg(unix)]
pub(crate) fn install_executable(dir: &TempDir, name: &str, script: &str) -> ChildPath {
    use std::os::unix::fs::PermissionsExt;

    let child = dir.child(name);
    child.write_str(script).unwrap();
    std::fs::set_permissions(child.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
    child
}

/// Arguments recorded by the stub installed with [`Shim::install_recording_stub`].
#[cfg(unix)]
pub(crate) fn recorded_args(args_file: &Path) -> Vec<String> {
    std::fs::read_to_string(args_file)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}
