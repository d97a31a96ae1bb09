//! Console output for search runs.
//!
//! Installs a `tracing` subscriber that prints the engine's run start and
//! stop events. Enabled by the `console` feature.

use std::sync::OnceLock;

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "nsearch_engine=info";

static INIT: OnceLock<bool> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect. Returns
/// `false` if another global subscriber was already installed.
pub fn init() -> bool {
    *INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).compact())
            .try_init()
            .is_ok()
    })
}
