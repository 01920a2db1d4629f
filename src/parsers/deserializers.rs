use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::conversation::DEFAULT_TITLE;
use crate::models::{ContentPart, ConversationNode, RawTimestamp};

/// Deserialize any value into `T`, yielding `None` instead of an error when the
/// value has the wrong shape
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Conversation title, falling back to "Untitled" for null or non-string values
pub fn deserialize_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(DEFAULT_TITLE.to_string()),
    }
}

/// Conversation creation time kept in its raw form (number or string)
pub fn deserialize_raw_timestamp<'de, D>(deserializer: D) -> Result<Option<RawTimestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(RawTimestamp::from_value(&value))
}

/// Message creation time in seconds; absent, null or non-numeric values become 0
pub fn deserialize_message_time<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|t| t.is_finite()).unwrap_or(0.0))
}

/// Node mapping in document order. Non-object mappings decode as empty and
/// non-object nodes are dropped.
pub fn deserialize_mapping<'de, D>(deserializer: D) -> Result<Vec<ConversationNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    let nodes = map
        .into_iter()
        .filter(|(_, node)| node.is_object())
        .filter_map(|(id, node)| {
            ConversationNode::deserialize(node).ok().map(|node| ConversationNode { id, ..node })
        })
        .collect();
    Ok(nodes)
}

/// Ordered content parts; anything other than a list decodes as no parts
pub fn deserialize_parts<'de, D>(deserializer: D) -> Result<Vec<ContentPart>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => ContentPart::Text(s),
                other => ContentPart::Other(other),
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// List of node ids; non-string entries are ignored
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => {
            Ok(items.into_iter().filter_map(|v| v.as_str().map(str::to_string)).collect())
        }
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{ContentPart, Conversation};

    #[test]
    fn test_conversation_defaults_when_fields_missing() {
        let conversation: Conversation = serde_json::from_str("{}").unwrap();
        assert_eq!(conversation.title, "Untitled");
        assert!(conversation.create_time.is_none());
        assert!(conversation.mapping.is_empty());
    }

    #[test]
    fn test_null_title_becomes_untitled() {
        let conversation: Conversation =
            serde_json::from_str(r#"{"title": null, "create_time": 1700000000}"#).unwrap();
        assert_eq!(conversation.title, "Untitled");
        assert!(conversation.create_time.is_some());
    }

    #[test]
    fn test_non_scalar_create_time_is_absent() {
        let conversation: Conversation =
            serde_json::from_str(r#"{"create_time": {"seconds": 1}}"#).unwrap();
        assert!(conversation.create_time.is_none());
    }

    #[test]
    fn test_mapping_keeps_document_order_and_ids() {
        let json = r#"{
            "mapping": {
                "zeta": {"message": null, "children": ["alpha"]},
                "alpha": {"parent": "zeta", "message": {"author": {"role": "user"}}},
                "broken": "not a node"
            }
        }"#;

        let conversation: Conversation = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = conversation.mapping.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha"]);
        assert_eq!(conversation.mapping[0].children, vec!["alpha".to_string()]);
        assert_eq!(conversation.mapping[1].parent.as_deref(), Some("zeta"));
        assert!(conversation.mapping[0].message.is_none());
    }

    #[test]
    fn test_non_object_mapping_decodes_as_empty() {
        let conversation: Conversation =
            serde_json::from_str(r#"{"mapping": ["a", "b"]}"#).unwrap();
        assert!(conversation.mapping.is_empty());
    }

    #[test]
    fn test_message_fields_tolerate_wrong_types() {
        let json = r#"{
            "mapping": {
                "n1": {"message": {
                    "author": "assistant",
                    "create_time": "yesterday",
                    "content": {"parts": "not a list"}
                }}
            }
        }"#;

        let conversation: Conversation = serde_json::from_str(json).unwrap();
        let message = conversation.mapping[0].message.as_ref().unwrap();
        assert!(message.author.is_none());
        assert_eq!(message.create_time, 0.0);
        assert!(message.parts().is_empty());
    }

    #[test]
    fn test_parts_keep_non_text_entries() {
        let json = r#"{
            "mapping": {
                "n1": {"message": {
                    "author": {"role": "assistant"},
                    "create_time": 12.5,
                    "content": {"parts": [{"asset_pointer": "file-1"}, "caption"]}
                }}
            }
        }"#;

        let conversation: Conversation = serde_json::from_str(json).unwrap();
        let message = conversation.mapping[0].message.as_ref().unwrap();
        assert!(message.is_assistant());
        assert_eq!(message.create_time, 12.5);
        assert!(matches!(message.parts()[0], ContentPart::Other(_)));
        assert_eq!(message.parts()[1].as_text(), Some("caption"));
    }
}
