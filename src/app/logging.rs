use tracing_subscriber::EnvFilter;

/// Install the stderr diagnostics subscriber, filtered by `RUST_LOG` (default `warn`).
///
/// Stdout is reserved for the build-log summary.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
