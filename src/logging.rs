//! Tracing subscriber setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the caller. Logs are written to stderr so stdout stays free for
//! command output.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Maps a configured level name to a tracing filter directive.
///
/// `fatal` maps to `error`; unknown names fall back to `debug`.
pub fn level_directive(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warning" | "warn" => "warn",
        "error" | "fatal" => "error",
        _ => "debug",
    }
}

/// Returns true if the format name selects machine-readable JSON output.
pub fn is_json_format(format: &str) -> bool {
    matches!(format.to_lowercase().as_str(), "json" | "logstash")
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level; `verbose` forces `debug`.
pub fn init(config: &LogConfig, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        level_directive(&config.level)
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if is_json_format(&config.format) {
        builder.json().init();
    } else {
        builder.init();
    }
}
