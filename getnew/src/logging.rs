//! Diagnostic tracing for `getnew`.
//!
//! Output goes to stderr only; stdout is reserved for the moved file name so
//! the command composes in shell pipelines.

use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Tool-specific filter variable, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "GETNEW_LOG";

/// Filter used when neither variable holds a valid directive.
pub const DEFAULT_DIRECTIVE: &str = "getnew=warn";

/// Initialize the tracing subscriber.
///
/// Reads [`LOG_ENV`], then `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
///
/// # Example
/// ```bash
/// GETNEW_LOG=getnew=debug getnew --nth 2 invoice
/// ```
pub fn init() {
    let directive = env::var(LOG_ENV)
        .or_else(|_| env::var(EnvFilter::DEFAULT_ENV))
        .ok();

    tracing_subscriber::registry()
        .with(filter_from(directive.as_deref()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Build the filter from a directive string; empty or unparsable input yields the default.
fn filter_from(directive: Option<&str>) -> EnvFilter {
    directive
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
