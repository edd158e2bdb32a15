//! Tracing subscriber setup for binaries and examples.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the global tracing subscriber with the configured level.
///
/// The level string accepts anything `EnvFilter` does (`info`,
/// `carve_vcard=debug`, ...). An unparsable level falls back to `info`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
