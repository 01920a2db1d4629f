const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max_chars` characters, replacing the tail with "..."
///
/// Counts Unicode scalar values, so multi-byte text is never split mid-character.
///
/// # Examples
///
/// ```
/// use chat_history_stats::utils::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("hello world", 8), "hello...");
/// assert_eq!(truncate_with_ellipsis("short", 8), "short");
/// ```
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
