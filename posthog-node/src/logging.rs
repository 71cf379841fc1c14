//! Logging infrastructure
//!
//! The node logs through `tracing`, so hosts that already install a
//! subscriber pick up its events for free. `init` is for standalone or
//! debug embeddings that have no subscriber of their own.

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Initialize a stderr subscriber
///
/// The level is taken from `RUST_LOG` when set, otherwise `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Initialize logging for tests (logs to the test writer)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}
