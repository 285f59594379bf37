//! Tracing setup

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("envelope_ledger=info"));

        // Logs go to stderr so command output on stdout stays clean.
        if let Err(e) = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            // Someone else installed a subscriber first; events go there instead.
            tracing::debug!(error = %e, "keeping existing tracing subscriber");
        }
    });
}
