use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber, filtered by `RUST_LOG` (defaults to `info`)
///
/// Safe to call more than once, later calls leave the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::registry().with(fmt::layer()).with(filter).try_init();

    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}
