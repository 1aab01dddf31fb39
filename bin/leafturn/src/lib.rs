//! Leafturn CLI Library
//!
//! Command implementations for the `leafturn` binary, exposed as a library so
//! they can be tested and reused.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, classify)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use leafturn::cmd;
//!
//! // Explain how a route change is classified
//! cmd::classify::run(Path::new("leafturn.toml"), "/blog/hello", "/").unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use leafturn_core::{Config, Direction, RouteCategory};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// leafturn::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
