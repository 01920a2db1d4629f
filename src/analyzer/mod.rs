//! Per-conversation analysis
//!
//! A conversation is a mapping of nodes, each optionally carrying a message. Analysis only
//! needs the set of messages, never the tree shape, so nodes are scanned once in document
//! order without following parent/child links.

pub mod conversation;

pub use conversation::{
    ConversationAnalysis, REPLY_PREVIEW_CHARS, analyze_conversation, count_messages,
    last_assistant_reply,
};
