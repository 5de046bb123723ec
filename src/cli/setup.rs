//! Runtime setup for the CLI: logging.

use tracing_subscriber::{fmt, EnvFilter};

/// Log level implied by `-v` flags when `RUST_LOG` is unset
pub fn default_log_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over the verbosity flags. Calling this twice is harmless.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
