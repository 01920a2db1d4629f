use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub const DEFAULT_TITLE: &str = "Untitled";
pub const ROLE_ASSISTANT: &str = "assistant";

/// A timestamp as it appeared in the export, before normalization.
///
/// Exports mix second- and millisecond-granularity numbers with several string
/// formats, so the original value is kept around for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Number(Number),
    Text(String),
    /// Already a point in time; normalization passes it through unchanged.
    Canonical(NaiveDateTime),
}

impl RawTimestamp {
    /// Build from a JSON value. Null and non-scalar values yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

impl From<i64> for RawTimestamp {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for RawTimestamp {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<NaiveDateTime> for RawTimestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self::Canonical(value)
    }
}

impl fmt::Display for RawTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
            Self::Canonical(dt) => write!(f, "{}", dt),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Conversation {
    #[serde(
        default = "default_title",
        deserialize_with = "crate::parsers::deserializers::deserialize_title"
    )]
    pub title: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_raw_timestamp")]
    pub create_time: Option<RawTimestamp>,
    /// Nodes in document order.
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_mapping")]
    pub mapping: Vec<ConversationNode>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConversationNode {
    /// Key of the node in the conversation mapping.
    #[serde(skip)]
    pub id: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub message: Option<Message>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub parent: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_string_list")]
    pub children: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub author: Option<Author>,
    /// Seconds since epoch; 0 when absent or not a number.
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_message_time")]
    pub create_time: f64,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub content: Option<MessageContent>,
}

impl Message {
    pub fn role(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.role.as_deref())
    }

    pub fn is_assistant(&self) -> bool {
        self.role() == Some(ROLE_ASSISTANT)
    }

    pub fn parts(&self) -> &[ContentPart] {
        self.content.as_ref().map(|c| c.parts.as_slice()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageContent {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_parts")]
    pub parts: Vec<ContentPart>,
}

/// One unit of message content. Exports mostly carry plain strings, but
/// multimodal messages embed objects (images, attachments) as parts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Text(String),
    Other(Value),
}

impl ContentPart {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Other(_) => None,
        }
    }
}
