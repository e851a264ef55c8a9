//! Tracing setup shared by unit and integration tests.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::{fmt, fmt::format::FmtSpan, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Installs a test-friendly subscriber once per process.
///
/// Honors `RUST_LOG`; without it, this crate logs at `trace` and
/// everything else at `warn`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,nestcol=trace"));

        let layer = fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter);

        if tracing::dispatcher::has_been_set() {
            return;
        }
        if let Err(e) = tracing_subscriber::registry().with(layer).try_init() {
            eprintln!("Error: Failed to set up logging: {}", e);
        }
        info!("Test Setup complete");
    });
}
