use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `debug` raises this crate to debug
/// level while dependencies stay at info. Calling this more than once is
/// harmless; later calls are no-ops.
pub fn init(debug: bool) {
    let default_directives = if debug { "info,ink_pad=debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
