use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber, `info` unless `RUST_LOG` says otherwise.
///
/// stdout is left to reports so it can be piped.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
