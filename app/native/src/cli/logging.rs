//! Logging setup for the command line.
//!
//! Diagnostics go to stderr through a `tracing-subscriber` fmt layer so
//! command output on stdout stays machine-readable. `RUST_LOG` overrides the
//! level chosen from `-v` flags.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Maps the number of `-v` flags to a level.
///
/// - 0: warn
/// - 1: debug
/// - 2+: trace
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        // Dependencies stay at warn
        EnvFilter::new(format!("warn,gitinbit={level},gitinbit_lib={level}"))
    })
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false).without_time();

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(level_for_verbosity(verbosity)))
        .with(layer)
        .try_init();
}
