//! Diagnostic logging setup

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Install the global subscriber, logging to stderr
///
/// `RUST_LOG` takes precedence. Without it only warnings are shown, or debug
/// events when `verbose` is set.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
