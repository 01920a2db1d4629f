//! Decoding of exported chat history into typed models
//!
//! # Error Handling Strategy
//!
//! Parsing here never fails a whole batch:
//!
//! - **Timestamps**: [`normalize`] returns `None` for anything it cannot read. The caller
//!   decides whether that drops a record; nothing is raised.
//!
//! - **Conversation records**: [`parse_conversation`] rejects only values that are not JSON
//!   objects. Inside an object every field falls back to a default when it has the wrong
//!   shape, so partial or oddly-typed exports still yield usable data.
//!
//! - **Reporting**: Rejections come back as a [`SkipReason`](crate::models::SkipReason) that
//!   the aggregator records in the batch report.

pub mod conversation;
pub mod deserializers;
pub mod timestamp;

pub use conversation::{parse_conversation, value_kind};
pub use timestamp::normalize;
