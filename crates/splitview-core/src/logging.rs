use tracing_subscriber::EnvFilter;

/// Default filter used by [`init`].
pub const DEFAULT_FILTER: &str = "info,splitview=debug,splitview_core=debug";

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`] when set.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Install a global `tracing` subscriber with an explicit filter directive.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .try_init()
        .is_ok()
}
