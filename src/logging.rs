//! Logging initialization.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the crate logs at `info`, or at
/// `debug` when `verbose` is on, and the GPU stack is held at `warn`.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "info,portfolio=debug,wgpu=warn,naga=warn,iced_wgpu=warn"
    } else {
        "info,wgpu=warn,naga=warn,iced_wgpu=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
