//! Configuration for the generation client.

use std::time::Duration;

use bon::Builder;

use crate::client::retry::RetryPolicy;
use crate::error::{AfiszError, Result};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 500;
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable configuration consumed by [`crate::generate::Generator`].
///
/// Construct explicitly via the builder, or from the environment with
/// [`AfiszConfig::from_env`]. There is no global instance: callers build
/// one config at startup and reuse it.
#[derive(Debug, Clone, Builder)]
pub struct AfiszConfig {
    /// Bearer credential for the completion gateway.
    pub api_key: String,
    #[builder(default = DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
    #[builder(default = DEFAULT_MODEL.to_string())]
    pub model: String,
    #[builder(default = DEFAULT_TEMPERATURE)]
    pub temperature: f64,
    #[builder(default = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,
    /// Per-attempt timeout for the outbound call.
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
    #[builder(default)]
    pub retry: RetryPolicy,
}

impl AfiszConfig {
    /// Load configuration from the environment (`.env` honored).
    ///
    /// `OPENROUTER_API_KEY` is required; `AFISZ_BASE_URL` and `AFISZ_MODEL`
    /// override the gateway defaults.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| AfiszError::Configuration("OPENROUTER_API_KEY is not set".into()))?;

        let mut config = Self::builder().api_key(api_key).build();
        if let Ok(url) = std::env::var("AFISZ_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(model) = std::env::var("AFISZ_MODEL") {
            config.model = model;
        }
        Ok(config)
    }
}
