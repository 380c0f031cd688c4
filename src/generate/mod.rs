//! Generation facade: event draft in, bounded Polish description out.

pub(crate) mod parse;

use tracing::debug;

use crate::client::{schema, CompletionClient};
use crate::config::AfiszConfig;
use crate::error::Result;
use crate::event::EventDraft;
use crate::prompt;

/// A successfully generated description.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDescription {
    /// Polish marketing copy, non-empty and at most 500 characters.
    pub description: String,
    /// Model identifier reported by the gateway, for audit logs.
    pub model_version: String,
}

/// The single entry point for description generation.
///
/// Construct once at startup and share; the generator holds only immutable
/// configuration, so concurrent [`Generator::generate`] calls are
/// independent. All failures surface as [`crate::error::AfiszError`] —
/// callers never see a raw reqwest or serde_json error.
#[derive(Debug)]
pub struct Generator {
    client: CompletionClient,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl Generator {
    /// Build a generator, validating the credential up front.
    pub fn new(config: AfiszConfig) -> Result<Self> {
        let client = CompletionClient::new(&config)?;
        Ok(Self {
            client,
            model: config.model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Generate a description for the given draft.
    ///
    /// Assumes the draft already passed [`EventDraft::validate`]; the
    /// calling handler owns that check.
    pub async fn generate(&self, draft: &EventDraft) -> Result<EventDescription> {
        let body = self.build_request_body(draft);

        debug!(model = %self.model, title = %draft.title, "requesting event description");

        let completion = self.client.chat_completion(&body).await?;
        parse::parse_completion(completion)
    }

    fn build_request_body(&self, draft: &EventDraft) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt::system_prompt() },
                { "role": "user", "content": prompt::user_prompt(draft) },
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "response_format": schema::response_format(),
        })
    }
}
