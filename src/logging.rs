use std::io::IsTerminal;

/// Environment variable holding the shim-specific log filter.
pub(crate) const LOG_ENV_VAR: &str = "GGUFY_SHIM_LOG";

/// Filter used when neither [`LOG_ENV_VAR`] nor `RUST_LOG` is set.
///
/// Only warnings and errors, so the shim is silent on the happy path.
const DEFAULT_TRACING_FILTER: &str = "warn";

/// Initialize tracing for the shim process.
///
/// The shim accepts no flags of its own, so verbosity is controlled through the environment only,
/// in priority order:
/// 1. `GGUFY_SHIM_LOG`
/// 2. `RUST_LOG`
/// 3. [`DEFAULT_TRACING_FILTER`]
///
/// Output always goes to stderr.  Stdout belongs to the child process and must contain nothing but
/// what the child writes.
///
/// If a global subscriber is already installed this does nothing.
pub(crate) fn init() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));

    let use_ansi = std::io::stderr().is_terminal();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .with_ansi(use_ansi)
                .without_time(),
        )
        .try_init();
}

/// Initialize tracing for tests with sensible defaults.
///
/// This function configures tracing to work correctly with cargo test's output capture,
/// ensuring that log output is only shown for failed tests. It uses [`std::sync::OnceLock`]
/// to ensure that logging is initialized only once per test process, regardless of how many
/// times this function is called.
///
/// Defaults to DEBUG level, but can be overridden by setting `GGUFY_SHIM_LOG` or `RUST_LOG`.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    use std::sync::OnceLock;
    use tracing_subscriber::{EnvFilter, fmt};

    static INIT: OnceLock<()> = OnceLock::new();

    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_level(true)
            .init();
    });
}
