/// Marker prepended when the head of a section was dropped.
pub const TRUNCATED_MARKER: &str = "[TRUNCATED]\n";

/// Keep the last `max_chars` bytes of `content`, cutting at a UTF-8
/// boundary, and prefix the result with [`TRUNCATED_MARKER`].
///
/// Conversation summaries put the newest turns last, so the tail is what
/// survives.
pub fn truncate_keep_tail(content: &str, max_chars: usize) -> (String, bool) {
    if content.len() <= max_chars {
        return (content.to_string(), false);
    }
    let mut start = content.len() - max_chars;
    while !content.is_char_boundary(start) {
        start += 1;
    }
    let mut result = String::with_capacity(TRUNCATED_MARKER.len() + content.len() - start);
    result.push_str(TRUNCATED_MARKER);
    result.push_str(&content[start..]);
    (result, true)
}
