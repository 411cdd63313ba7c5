//! Logger bootstrap shared by Batepapo binaries.

use tracing_subscriber::EnvFilter;

const SERVER_TARGET: &str = "batepapo_server";

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the given binary, the server library
/// and `tower_http` log at `default_level`, everything else at `warn`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logger(name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(name, default_level)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(binary = name, default_level, "logger initialized");
    }
}

fn default_directive(name: &str, level: &str) -> String {
    let target = name.replace('-', "_");
    if target == SERVER_TARGET {
        format!("warn,{target}={level},tower_http={level}")
    } else {
        format!("warn,{target}={level},{SERVER_TARGET}={level},tower_http={level}")
    }
}
