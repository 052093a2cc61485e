// ============================================================================
// mp4fetch-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger backend for the `log` facade
//
// All diagnostics go to stderr; stdout is reserved for the result line.
// The level defaults to info (debug with --verbose) and can be overridden
// with RUST_LOG:
// - RUST_LOG=warn: only warnings and errors
// - RUST_LOG=debug: stage transitions, probe details
// - RUST_LOG=trace: everything

use env_logger::{Builder, Env, Target};

/// Default filter used when RUST_LOG is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Initializes the global logger. Later calls are ignored.
pub fn init(verbose: bool) {
    let result = Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .target(Target::Stderr)
        .format_timestamp_secs()
        .try_init();
    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_lowers_the_default_level() {
        assert_eq!(default_filter(false), "info");
        assert_eq!(default_filter(true), "debug");
    }
}
