use crate::models::{Conversation, Message};
use crate::utils::truncate_with_ellipsis;

/// Maximum length of a reply preview, in characters, ellipsis included
pub const REPLY_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationAnalysis {
    pub message_count: usize,
    pub last_assistant_reply: Option<String>,
}

/// Count messages and extract the latest assistant reply in one call
pub fn analyze_conversation(conversation: &Conversation) -> ConversationAnalysis {
    ConversationAnalysis {
        message_count: count_messages(conversation),
        last_assistant_reply: last_assistant_reply(conversation),
    }
}

/// Number of nodes carrying a message with at least one content part
pub fn count_messages(conversation: &Conversation) -> usize {
    messages(conversation).filter(|message| !message.parts().is_empty()).count()
}

/// Text of the assistant message with the greatest timestamp, truncated for display
///
/// Only messages with a positive timestamp and a non-empty first text part qualify.
/// When several share the greatest timestamp, the first in document order wins.
pub fn last_assistant_reply(conversation: &Conversation) -> Option<String> {
    let mut latest: Option<&str> = None;
    let mut latest_timestamp = 0.0;

    for message in messages(conversation).filter(|m| m.is_assistant()) {
        if message.create_time <= latest_timestamp {
            continue;
        }
        if let Some(text) = first_text(message) {
            latest = Some(text);
            latest_timestamp = message.create_time;
        }
    }

    latest.map(|text| truncate_with_ellipsis(text, REPLY_PREVIEW_CHARS))
}

fn messages(conversation: &Conversation) -> impl Iterator<Item = &Message> {
    conversation.mapping.iter().filter_map(|node| node.message.as_ref())
}

fn first_text(message: &Message) -> Option<&str> {
    message.parts().first().and_then(|part| part.as_text()).filter(|text| !text.is_empty())
}
