//! Lightweight text heuristics applied to student messages.

use std::sync::LazyLock;

use regex::Regex;

// Tried in order; the first capture wins.
static TOPIC_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(?:explain|understand|learn about|studying)\s+(.+?)(?:\?|$)").unwrap(),
        Regex::new(r"(?i)what (?:is|are)\s+(.+?)\??$").unwrap(),
        Regex::new(r"(?i)tell me about\s+(.+?)(?:\?|$)").unwrap(),
    ]
});

const TOPIC_MAX_WORDS: usize = 3;

/// Guess the topic of a question from common phrasings such as
/// "explain X", "what is X?" or "tell me about X".
///
/// Returns at most the first three words of the match.
pub fn extract_topic(message: &str) -> Option<String> {
    TOPIC_PATTERNS.iter().find_map(|re| {
        let captured = re.captures(message)?.get(1)?.as_str().trim();
        let topic = captured
            .split(' ')
            .take(TOPIC_MAX_WORDS)
            .collect::<Vec<_>>()
            .join(" ");
        (!topic.is_empty()).then_some(topic)
    })
}

/// Whether the student says they are lost.
pub fn signals_confusion(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("confused") || lower.contains("don't understand")
}

/// Append attachment markers to a student message so the transcript records
/// what was sent alongside the text.
pub fn annotate_attachments(content: &str, file_names: &[&str], has_audio: bool) -> String {
    let mut out = content.to_string();
    if !file_names.is_empty() {
        out.push_str(&format!(
            "\n\n[Attached {} file(s): {}]",
            file_names.len(),
            file_names.join(", ")
        ));
    }
    if has_audio {
        out.push_str("\n\n[Audio message attached]");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_pattern() {
        assert_eq!(
            extract_topic("Can you explain photosynthesis?").as_deref(),
            Some("photosynthesis")
        );
    }

    #[test]
    fn what_is_pattern_keeps_three_words() {
        assert_eq!(
            extract_topic("What is the chain rule for derivatives?").as_deref(),
            Some("the chain rule")
        );
    }

    #[test]
    fn tell_me_about_pattern() {
        assert_eq!(
            extract_topic("Tell me about the French Revolution").as_deref(),
            Some("the French Revolution")
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            extract_topic("I am STUDYING organic chemistry").as_deref(),
            Some("organic chemistry")
        );
    }

    #[test]
    fn no_topic_in_small_talk() {
        assert_eq!(extract_topic("hello there"), None);
        assert_eq!(extract_topic("thanks!"), None);
    }

    #[test]
    fn confusion_markers() {
        assert!(signals_confusion("I'm so CONFUSED by this"));
        assert!(signals_confusion("I don't understand limits"));
        assert!(!signals_confusion("That makes sense"));
    }

    #[test]
    fn attachments_are_annotated() {
        let out = annotate_attachments("See my work", &["a.png", "b.pdf"], true);
        assert_eq!(
            out,
            "See my work\n\n[Attached 2 file(s): a.png, b.pdf]\n\n[Audio message attached]"
        );
        assert_eq!(annotate_attachments("plain", &[], false), "plain");
    }
}
