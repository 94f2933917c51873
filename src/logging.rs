//! Tracing subscriber setup for the CLI.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Env var holding an `EnvFilter` directive, e.g. `HOSTESS_LOG=debug`.
pub const LOG_VAR: &str = "HOSTESS_LOG";

/// Install a compact stderr subscriber. Defaults to `warn` so stdout stays
/// clean for `ls` and `dump`. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
