use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber used by the binaries.
///
/// Verbosity comes from `RUST_LOG`, falling back to `info`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .try_init();
}
