//! Client configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Tunables for the rate-limited client.
///
/// Defaults target Groq's free tier with a conservative retry budget.
#[derive(
    Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct ClientConfig {
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    model: String,

    /// Retries allowed per summarization call
    #[serde(default = "default_max_retries")]
    max_retries: u32,

    /// Base backoff delay in milliseconds
    #[serde(default = "default_base_delay_ms")]
    base_delay_ms: u64,

    /// Backoff ceiling in milliseconds
    #[serde(default = "default_max_delay_ms")]
    max_delay_ms: u64,
}

fn default_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_max_retries() -> u32 {
    5
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    60_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_free_tier() {
        let config = ClientConfig::default();
        assert_eq!(config.model(), "llama-3.1-8b-instant");
        assert_eq!(*config.max_retries(), 5);
        assert_eq!(*config.base_delay_ms(), 1000);
        assert_eq!(*config.max_delay_ms(), 60_000);
    }

    #[test]
    fn partial_config_fills_missing_fields() {
        let config: ClientConfig =
            serde_json::from_value(serde_json::json!({ "max_retries": 2 })).unwrap();
        assert_eq!(*config.max_retries(), 2);
        assert_eq!(config.model(), "llama-3.1-8b-instant");
        assert_eq!(*config.base_delay_ms(), 1000);
    }

    #[test]
    fn setters_override_single_fields() {
        let config = ClientConfig::default().with_model("llama-3.3-70b-versatile".to_string());
        assert_eq!(config.model(), "llama-3.3-70b-versatile");
        assert_eq!(*config.max_retries(), 5);
    }
}
