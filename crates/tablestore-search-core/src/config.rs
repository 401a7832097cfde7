//! Codec configuration.
//!
//! Provides [`CodecConfig`], loaded from environment variables or built
//! explicitly.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default message size limit: 64 MiB.
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 64 * 1024 * 1024;

/// Codec configuration.
///
/// # Examples
///
/// ```
/// use tablestore_search_core::config::CodecConfig;
///
/// let config = CodecConfig::default();
/// assert_eq!(config.max_message_size, 64 * 1024 * 1024);
/// assert!(!config.log_payloads);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CodecConfig {
    /// Largest encoded message accepted in either direction, in bytes.
    #[builder(default = DEFAULT_MAX_MESSAGE_SIZE)]
    pub max_message_size: usize,

    /// Whether encoded messages are hex-dumped at `trace` level.
    #[builder(default = false)]
    pub log_payloads: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            log_payloads: false,
        }
    }
}

impl CodecConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `SEARCH_CODEC_MAX_MESSAGE_SIZE` | `67108864` |
    /// | `SEARCH_CODEC_LOG_PAYLOADS` | `false` |
    ///
    /// Unparseable values fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("SEARCH_CODEC_MAX_MESSAGE_SIZE") {
            if let Ok(n) = v.parse::<usize>() {
                config.max_message_size = n;
            }
        }
        if let Ok(v) = std::env::var("SEARCH_CODEC_LOG_PAYLOADS") {
            config.log_payloads = parse_bool(&v);
        }

        config
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
