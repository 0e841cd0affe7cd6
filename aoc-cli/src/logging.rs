use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map `-v` occurrences to a default filter directive
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Diagnostics go to stderr so stdout only carries the run report.
/// `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
