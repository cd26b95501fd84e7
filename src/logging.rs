//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the level comes from the `-v`/`-q`
//! flags. Logs go to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Log level for a verbosity count: 0 = info, 1 = debug, 2+ = trace.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cfgsplit={}", level_for(verbose, quiet))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
