//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use skyjo_engine::cards::composition;
use skyjo_engine::{Census, Round};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Whether the round's cards still match the full deck composition.
pub fn census_is_exact(round: &Round) -> bool {
    let census: Census = round.card_census();
    census == composition()
}
