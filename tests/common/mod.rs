//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;

use serde_json::{Map, Value, json};
use tempfile::NamedTempFile;

/// Builder for export documents (a JSON list of conversations)
pub struct ExportBuilder {
    entries: Vec<Value>,
}

impl ExportBuilder {
    /// Create a new builder with no conversations
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add a conversation
    pub fn with_conversation(mut self, conversation: ConversationBuilder) -> Self {
        self.entries.push(conversation.to_value());
        self
    }

    /// Add an arbitrary raw entry (e.g. a malformed one)
    pub fn with_raw_entry(mut self, entry: Value) -> Self {
        self.entries.push(entry);
        self
    }

    /// Build the JSON document
    pub fn to_value(&self) -> Value {
        Value::Array(self.entries.clone())
    }

    /// Write the document to a temp file
    pub fn to_file(&self) -> NamedTempFile {
        write_temp_file(&self.to_value().to_string())
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single exported conversation
pub struct ConversationBuilder {
    title: Option<String>,
    create_time: Option<Value>,
    nodes: Vec<(String, Value)>,
}

impl ConversationBuilder {
    /// Create a conversation with default title and creation time
    pub fn new() -> Self {
        Self {
            title: Some("Test conversation".to_string()),
            create_time: Some(json!(1_704_067_200)),
            nodes: Vec::new(),
        }
    }

    /// Set the title
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Drop the title field
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    /// Set the creation time to any JSON value
    pub fn create_time(mut self, create_time: Value) -> Self {
        self.create_time = Some(create_time);
        self
    }

    /// Drop the create_time field
    pub fn without_create_time(mut self) -> Self {
        self.create_time = None;
        self
    }

    /// Add a message node
    pub fn message(mut self, role: &str, create_time: f64, text: &str) -> Self {
        let id = format!("node-{}", self.nodes.len());
        self.nodes.push((
            id,
            json!({
                "message": {
                    "author": {"role": role},
                    "create_time": create_time,
                    "content": {"content_type": "text", "parts": [text]}
                }
            }),
        ));
        self
    }

    /// Add a node without a message (e.g. the tree root)
    pub fn empty_node(mut self) -> Self {
        let id = format!("node-{}", self.nodes.len());
        self.nodes.push((id, json!({"message": null, "children": []})));
        self
    }

    /// Add `count` user messages
    pub fn user_messages(self, count: usize) -> Self {
        (0..count).fold(self, |builder, i| builder.message("user", i as f64 + 1.0, "question"))
    }

    /// Convert to a JSON value
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        if let Some(title) = &self.title {
            object.insert("title".to_string(), json!(title));
        }
        if let Some(create_time) = &self.create_time {
            object.insert("create_time".to_string(), create_time.clone());
        }
        let mapping: Map<String, Value> = self.nodes.iter().cloned().collect();
        object.insert("mapping".to_string(), Value::Object(mapping));
        Value::Object(object)
    }
}

impl Default for ConversationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write content to a temp file
pub fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// An export resembling a real one: several days, mixed timestamp formats,
/// a conversation tree with a root node, and a couple of malformed entries
pub fn realistic_export() -> ExportBuilder {
    ExportBuilder::new()
        .with_conversation(
            ConversationBuilder::new()
                .title("Borrow checker help")
                .create_time(json!(1_704_110_400.123))
                .empty_node()
                .message("user", 1_704_110_401.0, "Why does this not compile?")
                .message("assistant", 1_704_110_402.0, "Because the value was moved.")
                .message("user", 1_704_110_450.0, "How do I fix it?")
                .message("assistant", 1_704_110_460.0, "Clone it or borrow it instead."),
        )
        .with_conversation(
            ConversationBuilder::new()
                .title("Trip planning")
                .create_time(json!("2024-01-02T09:15:00Z"))
                .user_messages(2)
                .message("assistant", 10.0, "Here is an itinerary."),
        )
        .with_conversation(
            ConversationBuilder::new()
                .title("Same day follow-up")
                .create_time(json!(1_704_189_600_000_i64))
                .user_messages(1),
        )
        .with_raw_entry(json!("corrupted entry"))
        .with_conversation(ConversationBuilder::new().title("Undated").without_create_time())
}
