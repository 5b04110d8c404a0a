// tests/common.rs
//! Test logging for the store and unlock paths

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Route `pwstore` tracing output through the test harness
///
/// `RUST_LOG` overrides the default `pwstore=debug`. Safe to call from every test.
#[allow(dead_code)]
pub fn setup() {
    #[cfg(feature = "logging")]
    {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pwstore=debug"));
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_test_writer().with_target(false))
            .with(filter)
            .try_init();
    }
}
