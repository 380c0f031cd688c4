//! Completion parsing and local contract enforcement.

use crate::client::wire::ChatCompletion;
use crate::error::{AfiszError, Result};
use crate::event::MAX_DESCRIPTION_CHARS;

use super::EventDescription;

/// Convert a raw completion into a trustworthy [`EventDescription`].
///
/// Checks run in order; the finish reason is inspected before the content
/// is parsed, so a truncated generation never reaches the JSON step. The
/// character ceiling is re-counted here even though the request schema
/// already carries `maxLength` — this check is the actual contract
/// boundary.
pub(crate) fn parse_completion(completion: ChatCompletion) -> Result<EventDescription> {
    let model_version = completion.model;

    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AfiszError::Contract("completion contains no choices".into()))?;

    match choice.finish_reason.as_deref() {
        Some("stop") => {}
        other => {
            return Err(AfiszError::Contract(format!(
                "generation did not complete (finish_reason: {})",
                other.unwrap_or("none")
            )));
        }
    }

    let content = choice
        .message
        .content
        .ok_or_else(|| AfiszError::Contract("completion message has no content".into()))?;

    let payload: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| AfiszError::Contract(format!("completion content is not valid JSON: {e}")))?;

    let description = payload
        .get("description")
        .and_then(|d| d.as_str())
        .ok_or_else(|| {
            AfiszError::Contract("completion JSON lacks a string \"description\" field".into())
        })?
        .to_string();

    if description.is_empty() {
        return Err(AfiszError::Contract("description is empty".into()));
    }
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_CHARS {
        return Err(AfiszError::Contract(format!(
            "description has {len} characters (limit {MAX_DESCRIPTION_CHARS})"
        )));
    }

    Ok(EventDescription {
        description,
        model_version,
    })
}
