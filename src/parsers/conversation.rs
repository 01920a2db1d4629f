use serde::Deserialize;
use serde_json::Value;

use crate::models::{Conversation, SkipReason};

/// Decode one element of an export into a [`Conversation`]
///
/// Only JSON objects are accepted; every field inside is decoded leniently.
pub fn parse_conversation(value: &Value) -> Result<Conversation, SkipReason> {
    if !value.is_object() {
        return Err(SkipReason::NotARecord { found: value_kind(value).to_string() });
    }

    Conversation::deserialize(value)
        .map_err(|_| SkipReason::NotARecord { found: value_kind(value).to_string() })
}

/// Human-readable name of a JSON value's type, used in diagnostics
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
