//! Cross-crate tests for the table store search codec.
//!
//! [`generators`] holds proptest strategies for every kind of every family;
//! the `test_*` modules run round-trip properties, the documented scenarios,
//! enum totality and the exhaustiveness check against them.
//!
//! Run them with:
//! ```text
//! cargo test -p tablestore-search-integration
//! ```
//!
//! Set `RUST_LOG=tablestore_search_core=debug` to see codec events.

use std::sync::Once;

use tablestore_search_core::SearchCodec;

pub mod generators;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Create a codec configured from the environment, with tracing installed.
#[must_use]
pub fn codec() -> SearchCodec {
    init_tracing();
    let codec = SearchCodec::from_env();
    tracing::trace!(config = ?codec.config(), "test codec ready");
    codec
}

mod test_enums;
mod test_exhaustiveness;
mod test_scenarios;
