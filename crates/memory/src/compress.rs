//! Compression of evicted conversation turns into a single summary line.

use st_domain::Message;

/// Turns a batch of evicted messages into one summary string.
///
/// Implementations must be deterministic for a given batch and must always
/// return a non-empty description, even when nothing notable was found.
pub trait Compressor: Send + Sync {
    fn compress(&self, batch: &[Message]) -> String;
}

/// Offline fallback compressor.
///
/// Picks topic words out of the student's messages (the first two words
/// longer than [`min_word_chars`](Self::min_word_chars) per message) and
/// reports how many exchanges the batch held:
/// `Discussed: derivatives, calculus. 4 exchanges.`
#[derive(Debug, Clone)]
pub struct KeywordCompressor {
    /// Words must be strictly longer than this many characters.
    pub min_word_chars: usize,
    /// Topic words taken from each student message.
    pub words_per_message: usize,
}

impl Default for KeywordCompressor {
    fn default() -> Self {
        Self {
            min_word_chars: 5,
            words_per_message: 2,
        }
    }
}

impl KeywordCompressor {
    /// Topic candidates in first-seen order, without duplicates.
    pub fn topics<'a>(&self, batch: &'a [Message]) -> Vec<&'a str> {
        let mut topics: Vec<&str> = Vec::new();
        for msg in batch.iter().filter(|m| m.is_user()) {
            let words = msg
                .content
                .split_whitespace()
                .filter(|w| w.chars().count() > self.min_word_chars)
                .take(self.words_per_message);
            for word in words {
                if !topics.contains(&word) {
                    topics.push(word);
                }
            }
        }
        topics
    }
}

impl Compressor for KeywordCompressor {
    fn compress(&self, batch: &[Message]) -> String {
        let topics = self.topics(batch);
        format!("Discussed: {}. {} exchanges.", topics.join(", "), batch.len())
    }
}
