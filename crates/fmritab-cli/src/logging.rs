//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Filter directive: warnings only, or library debug events with `--verbose`.
fn directive(verbose: bool) -> &'static str {
    if verbose { "fmritab=debug" } else { "warn" }
}

/// Install the global stderr subscriber.
pub fn init(verbose: bool) {
    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive(verbose)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
