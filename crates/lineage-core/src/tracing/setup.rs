//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants;

static INIT: Once = Once::new();

/// Initialize the Lineage tracing/logging system.
///
/// Reads the `LINEAGE_LOG` environment variable for per-crate log levels.
/// Format: `LINEAGE_LOG=lineage_tracked=debug,lineage_core=trace`
///
/// Falls back to `lineage=info` if `LINEAGE_LOG` is not set or is invalid.
/// Idempotent, and a no-op if another global subscriber is already set.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::LOG_FILTER_ENV)
            .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
