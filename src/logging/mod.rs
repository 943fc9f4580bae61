//! Structured logging
//!
//! Sets up tracing-based logging with configurable levels. All output
//! goes to stderr: stdout is reserved for the script filter JSON that
//! Alfred consumes.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// This sets up tracing with:
/// - Environment-based filtering via RUST_LOG env var
/// - Default level of INFO in release builds, DEBUG in debug builds
/// - Compact stderr output with target information
pub fn init() {
    // Default log level based on build type
    let default_level = if cfg!(debug_assertions) {
        "cursor_launcher=debug,info"
    } else {
        "cursor_launcher=info,warn"
    };

    // Allow override via RUST_LOG environment variable
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Initialize logging for tests
///
/// Uses try_init() to avoid panicking if called multiple times.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}
