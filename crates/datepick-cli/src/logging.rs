//! Log setup for the `datepick` binary.
//!
//! The engine emits `debug!` events for every commit, open/close and locale
//! fallback, and `trace!` events for hover. Those go to stderr; stdout is
//! reserved for the JSON and grid output of the subcommands.

use tracing_subscriber::EnvFilter;

/// The binary and the engine library.
const TARGETS: [&str; 2] = ["datepick", "datepick_engine"];

/// `-v` count to level: warnings by default, `-vv` shows commits, `-vvv`
/// shows hover.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn directives(verbosity: u8) -> String {
    let level = level(verbosity);
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber. `RUST_LOG`, when set, replaces the
/// directives derived from `verbosity`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_by_default() {
        assert_eq!(directives(0), "datepick=warn,datepick_engine=warn");
    }

    #[test]
    fn test_commits_visible_at_debug() {
        assert_eq!(directives(2), "datepick=debug,datepick_engine=debug");
    }

    #[test]
    fn test_extra_flags_saturate_at_trace() {
        assert_eq!(level(3), "trace");
        assert_eq!(level(u8::MAX), "trace");
    }
}
