//! Chat History Stats - Usage statistics for exported chat history
//!
//! This library turns an exported chat-history archive (a JSON list of conversation
//! trees) into aggregate usage statistics. It supports:
//!
//! - Normalizing creation times given as epoch seconds, epoch milliseconds, ISO-8601 or
//!   common date patterns
//! - Counting messages and finding the latest assistant reply in a conversation
//! - Building a per-day message histogram and a newest-first conversation listing
//!
//! The library performs no I/O; decoding the export into a `serde_json::Value` is left to
//! the caller (see the `chat-history-stats` binary for a file-based front end).
//!
//! # Example
//!
//! ```
//! use chat_history_stats::aggregate;
//! use serde_json::json;
//!
//! let export = json!([
//!     {"title": "Morning", "create_time": "2024-01-01T08:00:00Z", "mapping": {}},
//!     {"title": "Evening", "create_time": "2024-01-01 20:00:00", "mapping": {}},
//! ]);
//! let stats = aggregate(&export)?;
//! assert_eq!(stats.conversations[0].title, "Evening");
//! assert_eq!(stats.daily_stats.len(), 1);
//! # Ok::<(), chat_history_stats::StatsError>(())
//! ```

pub mod aggregator;
pub mod analyzer;
pub mod cli;
pub mod error;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use aggregator::aggregate;
pub use analyzer::analyze_conversation;
pub use error::StatsError;
pub use models::{ConversationSummary, DailyCount, UsageStats};
pub use parsers::normalize;
