//! Data models for exported chat history and the statistics derived from it.
//!
//! This module defines the data structures used throughout the crate:
//!
//! - [`Conversation`] - One exported chat session with its node mapping
//! - [`Message`] - A message carried by a [`ConversationNode`]
//! - [`RawTimestamp`] - A creation time exactly as the export supplied it
//! - [`ConversationSummary`] - The per-conversation record used for listing
//! - [`DailyHistogram`] - Date-to-message-count aggregation
//! - [`UsageStats`] - The complete result of one aggregation run
//!
//! Input models are decoded leniently from `serde_json::Value` using the helpers
//! in the `parsers::deserializers` module, so a single malformed field never
//! rejects a whole conversation.

pub mod conversation;
pub mod stats;

pub use conversation::{
    Author, ContentPart, Conversation, ConversationNode, Message, MessageContent, RawTimestamp,
};
pub use stats::{
    ConversationSummary, DailyCount, DailyHistogram, SkipReason, SkippedEntry, UsageStats,
};
