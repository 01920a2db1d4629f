//! Builds [`UsageStats`] from a decoded export.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::analyzer::analyze_conversation;
use crate::error::{Result, StatsError};
use crate::models::{
    Conversation, ConversationSummary, DailyHistogram, SkipReason, SkippedEntry, UsageStats,
};
use crate::parsers::{normalize, parse_conversation, value_kind};

/// Aggregate an export document into usage statistics
///
/// The document must be a JSON array of conversation objects. Each conversation with a
/// readable `create_time` adds its message count to the day it was created and yields a
/// [`ConversationSummary`]. Summaries are ordered newest first.
///
/// # Errors
///
/// Returns an error if:
/// - `document` is not an array ([`StatsError::InvalidInput`])
/// - no conversation has a readable creation time ([`StatsError::NoValidData`])
///
/// # Examples
///
/// ```
/// use chat_history_stats::aggregate;
/// use serde_json::json;
///
/// let export = json!([
///     {"title": "First", "create_time": 1704103200, "mapping": {}},
/// ]);
/// let stats = aggregate(&export)?;
/// assert_eq!(stats.conversations[0].title, "First");
/// assert_eq!(stats.usage_series()[0].date, "2024-01-01");
/// # Ok::<(), chat_history_stats::StatsError>(())
/// ```
pub fn aggregate(document: &Value) -> Result<UsageStats> {
    match document {
        Value::Array(entries) => aggregate_conversations(entries),
        other => Err(StatsError::InvalidInput { found: value_kind(other).to_string() }),
    }
}

/// Aggregate a list of conversation values
///
/// See [`aggregate`] for the semantics; this entry point skips the top-level type check.
pub fn aggregate_conversations(entries: &[Value]) -> Result<UsageStats> {
    info!("Processing chat history: {} entries", entries.len());

    let mut daily_stats = DailyHistogram::new();
    let mut conversations = Vec::new();
    let mut skipped = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        debug!("Processing conversation {}/{}", index + 1, entries.len());

        let outcome = parse_conversation(entry).and_then(summarize);
        match outcome {
            Ok(summary) => {
                daily_stats.record(summary.created_at.date(), summary.message_count);
                conversations.push(summary);
            }
            Err(reason) => {
                match &reason {
                    SkipReason::MissingCreateTime => {
                        debug!("Skipping conversation {}: {}", index + 1, reason)
                    }
                    _ => warn!("Skipping conversation {}: {}", index + 1, reason),
                }
                skipped.push(SkippedEntry { index, reason });
            }
        }
    }

    if daily_stats.is_empty() {
        return Err(StatsError::NoValidData);
    }

    // Stable: conversations created at the same instant keep input order.
    conversations.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total_messages = daily_stats.total();
    info!(
        "Chat history processing complete: {} messages over {} days ({} conversations, {} skipped)",
        total_messages,
        daily_stats.len(),
        conversations.len(),
        skipped.len()
    );

    Ok(UsageStats { total_messages, daily_stats, conversations, skipped })
}

fn summarize(conversation: Conversation) -> std::result::Result<ConversationSummary, SkipReason> {
    let Some(create_time) = conversation.create_time.as_ref() else {
        return Err(SkipReason::MissingCreateTime);
    };
    let Some(created_at) = normalize(Some(create_time)) else {
        return Err(SkipReason::UnparseableCreateTime { raw: create_time.to_string() });
    };

    let analysis = analyze_conversation(&conversation);
    Ok(ConversationSummary {
        title: conversation.title,
        create_time: create_time.clone(),
        created_at,
        message_count: analysis.message_count,
        last_response: analysis.last_assistant_reply,
    })
}
