use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Logs go to
/// stderr so that stdout stays free for command output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
