//! Logging
//!
//! Tracing setup for embedding hosts. Honors `RUST_LOG`, defaults to
//! `info`, and tolerates being called more than once.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    // a second init (tests, embedded hosts) is not an error
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
