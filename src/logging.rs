//! Diagnostic tracing for the lesson binary.
//!
//! Output goes to stderr so the lesson transcript on stdout stays clean.
//! The filter comes from [`Settings::log_filter`](crate::settings::Settings).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. An unparsable filter falls back to `warn`.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
