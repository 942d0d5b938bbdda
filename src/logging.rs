//! Tracing subscriber set-up.
//!
//! The library only emits events; binaries and tests opt in to output.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a global fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// ```no_run
/// fuzzy_lp::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Install a `debug` level subscriber that writes through the test harness.
/// Safe to call from every test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
