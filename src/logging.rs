//! Logging initialisation.
//!
//! Installs a `tracing-subscriber` formatter filtered by `RUST_LOG`
//! (default: `info`).

use tracing_subscriber::{EnvFilter, fmt};

/// Initialises the global subscriber for the server binary.
///
/// # Example
///
/// ```no_run
/// hotel_booking::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Initialises verbose logging for tests. Safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
