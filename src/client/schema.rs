//! Structured-output contract sent with every completion request.

use serde_json::{json, Value};

use crate::event::MAX_DESCRIPTION_CHARS;

/// JSON schema the remote model must satisfy: a single `description` string.
///
/// The `maxLength` here is advisory from our side — the parser re-counts
/// characters locally, since the remote enforcement of its own schema is
/// not guaranteed.
pub(crate) fn description_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "description": {
                "type": "string",
                "maxLength": MAX_DESCRIPTION_CHARS,
            }
        },
        "required": ["description"],
        "additionalProperties": false,
    })
}

/// The `response_format` envelope for the chat-completion request body.
pub(crate) fn response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "event_description",
            "schema": description_schema(),
            "strict": true,
        }
    })
}
