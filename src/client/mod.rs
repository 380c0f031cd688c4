//! HTTP client for the chat-completion gateway.

pub mod retry;
pub(crate) mod schema;
pub(crate) mod wire;

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::config::AfiszConfig;
use crate::error::{AfiszError, Result};
use self::retry::RetryPolicy;
use self::wire::ChatCompletion;

/// Required credential prefix; checked before any network call.
const API_KEY_PREFIX: &str = "sk-";

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Build default headers for a Bearer-token API.
fn bearer_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {api_key}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Client for one completion endpoint: credential, timeout, and retry.
///
/// Holds no per-call state; safe to share across concurrent calls.
#[derive(Debug)]
pub(crate) struct CompletionClient {
    base_url: String,
    api_key: String,
    request_timeout: Duration,
    retry: RetryPolicy,
}

impl CompletionClient {
    /// Validate the credential and build the client.
    ///
    /// A credential without the expected prefix fails here, with status
    /// 401, before any request is made.
    pub(crate) fn new(config: &AfiszConfig) -> Result<Self> {
        if !config.api_key.starts_with(API_KEY_PREFIX) {
            return Err(AfiszError::Configuration(format!(
                "API key must start with \"{API_KEY_PREFIX}\""
            )));
        }

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            request_timeout: config.request_timeout,
            retry: config.retry.clone(),
        })
    }

    /// POST the request body, retrying transient failures.
    pub(crate) async fn chat_completion(&self, body: &serde_json::Value) -> Result<ChatCompletion> {
        self.retry.execute(|| self.send_once(body)).await
    }

    /// One attempt: fresh request, fresh timeout. Nothing from a previous
    /// attempt survives into this one.
    async fn send_once(&self, body: &serde_json::Value) -> Result<ChatCompletion> {
        let url = format!("{}/chat/completions", self.base_url);

        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .timeout(self.request_timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AfiszError::Timeout(self.request_timeout.as_millis() as u64)
                } else {
                    AfiszError::Network(e)
                }
            })?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        resp.json::<ChatCompletion>()
            .await
            .map_err(|e| AfiszError::Contract(format!("malformed completion payload: {e}")))
    }
}

/// Map a non-success HTTP status to an error, probing the JSON error body
/// for an upstream message.
fn status_to_error(status: u16, body: &str) -> AfiszError {
    let message = extract_error_message(body).unwrap_or_else(|| "unknown error".to_string());
    if (400..500).contains(&status) {
        AfiszError::Api { status, message }
    } else {
        AfiszError::Upstream { status, message }
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(ToString::to_string)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> AfiszConfig {
        AfiszConfig::builder().api_key(key.to_string()).build()
    }

    #[test]
    fn rejects_credential_without_prefix() {
        let err = CompletionClient::new(&config_with_key("invalid-key")).unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn accepts_prefixed_credential() {
        assert!(CompletionClient::new(&config_with_key("sk-or-v1-abcdef")).is_ok());
    }

    #[test]
    fn status_mapping_extracts_upstream_message() {
        let err = status_to_error(400, r#"{"error":{"message":"model not found"}}"#);
        assert!(matches!(
            &err,
            AfiszError::Api { status: 400, message } if message == "model not found"
        ));
    }

    #[test]
    fn status_mapping_falls_back_to_unknown_error() {
        let err = status_to_error(502, "<html>bad gateway</html>");
        assert!(matches!(
            &err,
            AfiszError::Upstream { status: 502, message } if message == "unknown error"
        ));
        assert_eq!(err.status_code(), 503);
        assert!(err.is_retryable());
    }
}
