//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber: `warn` by default, `debug` when verbose.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
