//! Log output setup.
//!
//! The subscriber is built from an explicit verbosity flag and handed to the
//! caller, which installs it only for the duration of a run with
//! [`tracing::subscriber::with_default`]. Nothing here touches global state.

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;

/// Builds a stderr subscriber: `DEBUG` when `verbose`, `INFO` otherwise.
pub fn subscriber(verbose: bool) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbose))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .finish()
}

/// Maximum level emitted for the given verbosity.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}
