//! Diagnostics for the `mascot` binary.
//!
//! Every subcommand prints its answer (an event name, a sprite path, JSON) on
//! stdout, so tracing output goes to stderr. Library decisions such as which
//! window matched are logged under the `mascot_events` target and only show
//! up from `-vv`.

use tracing_subscriber::EnvFilter;

/// Targets of the binary and the three library crates it drives.
const CRATE_TARGETS: &[&str] = &[
    "mascot",
    "mascot_calendar",
    "mascot_character",
    "mascot_events",
];

/// Builds the filter directive used when `RUST_LOG` is unset.
///
/// No flag keeps only warnings (e.g. sprites for unknown events); each `-v`
/// adds a level up to trace, which lists every window the resolver tries.
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
