use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "activities_server=info,tower_http=info";

/// `RUST_LOG` takes precedence over the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
