//! Tracing subscriber setup
//!
//! Hosts that embed the converter usually install their own subscriber. This
//! is the default one, driven by [`LoggingConfig`].

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Install the global subscriber
///
/// `RUST_LOG` wins over `logging.level` when set. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("mastoview={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()
    };

    installed.is_ok()
}
