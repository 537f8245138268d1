//! Logging setup for pushgate.
//!
//! Structured logging goes to stderr so hook output on stdout stays
//! clean. The default level is error, matching the quiet behavior a git
//! hook should have; `--debug` raises it to debug, `RUST_LOG` overrides
//! the default otherwise.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Called once by the binary before any work happens.
///
/// # Arguments
///
/// * `debug` - When true, log at debug level regardless of `RUST_LOG`
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
