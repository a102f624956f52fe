//! Structured logging setup
//!
//! The library emits `tracing` events; only the binary installs a subscriber.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV: &str = "WORD_LADDER_LOG";

/// Initialize structured logging based on CLI arguments
///
/// `log_level` wins over `verbose`. A bare level such as `trace` applies to
/// this crate only; a full directive such as `word_ladder=debug,rayon=warn` is
/// used as given.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<(), TryInitError> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
}

fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("word_ladder={level}")
    }
}
