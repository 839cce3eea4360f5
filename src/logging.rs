use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,paretoplot=debug";

/// Initialize the tracing subscriber with optional JSON output.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_tracing(json_output: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .try_init()
    };
    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {e}");
    }
}
