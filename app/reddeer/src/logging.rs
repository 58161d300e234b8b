//! Logging initialization using the `tracing` crate.
//!
//! - Uses the `RUST_LOG` environment variable for filtering
//! - Outputs to stderr so command output on stdout stays parseable
//! - Compact format without timestamps

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the global tracing subscriber.
///
/// The log level can be controlled via the `RUST_LOG` environment variable:
/// - `RUST_LOG=reddeer=trace` - Everything RedDeer logs
/// - `RUST_LOG=reddeer::lookup=debug,warn` - Every label inspected by lookups
///
/// Default level is `info` for release builds and `debug` for debug builds.
/// Calling it again once a subscriber is installed does nothing.
pub fn init() {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,reddeer={default_level}")));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(true)
        .with_file(false)
        .with_line_number(false)
        .without_time()
        .compact();

    // A host test harness may already have installed its own subscriber.
    let _ = tracing_subscriber::registry().with(filter).with(subscriber).try_init();
}
