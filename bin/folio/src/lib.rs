//! Folio CLI Library
//!
//! Tooling around the site's metadata: validating it against the content
//! tree and exporting what the build pipeline needs (metadata and page
//! queries).
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, export)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use folio::cmd;
//!
//! cmd::export::run(Path::new("site.toml"), Path::new("public/.folio")).unwrap();
//! ```

pub mod cmd;

pub use folio_core::Config;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
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
