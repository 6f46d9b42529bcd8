//! Tracing subscriber setup for the command-line entry point.

use std::io::{self, IsTerminal};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive, e.g. `tsvload=debug`.
pub const LOG_ENV: &str = "TSVLOAD_LOG";

/// Filter directive used when `LOG_ENV` is unset.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr `fmt` subscriber. Stdout is left to command output.
///
/// Does nothing if a global subscriber is already installed.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false);

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
