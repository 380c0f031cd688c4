//! Chat-completion response types (internal).

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletion {
    /// Model identifier as reported by the gateway; kept for auditability.
    pub model: String,
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatChoiceMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoiceMessage {
    pub content: Option<String>,
}
