//! The conversation memory manager.
//!
//! Each added message lands in the verbatim window. When the window grows
//! past `max_verbatim`, the overflow is cut from the front, compressed into
//! one summary line and appended to the compressed history. Compressed
//! entries are never rewritten.

use std::fmt;

use st_domain::config::MemoryConfig;
use st_domain::trace::TraceEvent;
use st_domain::Message;

use crate::compress::{Compressor, KeywordCompressor};

const COMPRESSED_HEADER: &str = "Previous conversation summary:\n";
const RECENT_HEADER: &str = "Recent conversation:\n";

/// Bounded verbatim window plus an ordered list of compressed summaries.
pub struct ConversationMemory {
    config: MemoryConfig,
    compressor: Box<dyn Compressor>,
    verbatim: Vec<Message>,
    compressed: Vec<String>,
    turns_since_summary: usize,
}

impl ConversationMemory {
    /// Empty memory using the keyword compressor.
    pub fn new(config: MemoryConfig) -> Self {
        Self::with_compressor(config, Box::new(KeywordCompressor::default()))
    }

    /// Empty memory with a caller-supplied compression strategy.
    pub fn with_compressor(config: MemoryConfig, compressor: Box<dyn Compressor>) -> Self {
        Self {
            config,
            compressor,
            verbatim: Vec::new(),
            compressed: Vec::new(),
            turns_since_summary: 0,
        }
    }

    /// Record a new message, evicting and compressing the oldest messages
    /// if the verbatim window overflows.
    pub fn add_to_memory(&mut self, message: Message) {
        self.verbatim.push(message);
        self.turns_since_summary += 1;
        self.compact();
    }

    fn compact(&mut self) {
        if self.verbatim.len() <= self.config.max_verbatim {
            return;
        }

        let excess = self.verbatim.len() - self.config.max_verbatim;
        let evicted: Vec<Message> = self.verbatim.drain(..excess).collect();
        let summary = self.compressor.compress(&evicted);

        TraceEvent::MemoryCompacted {
            evicted: evicted.len(),
            compressed_batches: self.compressed.len() + 1,
            summary_chars: summary.len(),
        }
        .emit_debug();

        self.compressed.push(summary);
    }

    /// Record several messages as one batch.
    ///
    /// All messages are appended before the window is checked, so any
    /// overflow is compressed into a single summary entry rather than one
    /// entry per evicted message.
    pub fn extend_memory(&mut self, messages: impl IntoIterator<Item = Message>) {
        let before = self.verbatim.len();
        self.verbatim.extend(messages);
        self.turns_since_summary += self.verbatim.len() - before;
        self.compact();
    }

    /// Render compressed history and the verbatim window as prompt context.
    ///
    /// Returns an empty string when nothing has been recorded.
    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();

        if !self.compressed.is_empty() {
            summary.push_str(COMPRESSED_HEADER);
            summary.push_str(&self.compressed.join("\n"));
            summary.push_str("\n\n");
        }

        if !self.verbatim.is_empty() {
            summary.push_str(RECENT_HEADER);
            for msg in &self.verbatim {
                summary.push_str(msg.role.label());
                summary.push_str(": ");
                summary.push_str(&msg.content);
                summary.push('\n');
            }
        }

        summary
    }

    /// Drop everything, including the turn counter.
    pub fn clear_memory(&mut self) {
        TraceEvent::MemoryCleared {
            verbatim: self.verbatim.len(),
            compressed_batches: self.compressed.len(),
        }
        .emit_debug();

        self.verbatim.clear();
        self.compressed.clear();
        self.turns_since_summary = 0;
    }

    /// Whether enough turns have passed that a richer summary should be
    /// produced. Advisory: reading it does not reset the counter.
    pub fn needs_summary_update(&self) -> bool {
        self.turns_since_summary >= self.config.summary_update_interval
    }

    pub fn verbatim_messages(&self) -> &[Message] {
        &self.verbatim
    }

    pub fn compressed_turns(&self) -> &[String] {
        &self.compressed
    }

    pub fn turns_since_last_summary(&self) -> usize {
        self.turns_since_summary
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new(MemoryConfig::default())
    }
}

impl fmt::Debug for ConversationMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationMemory")
            .field("config", &self.config)
            .field("verbatim", &self.verbatim.len())
            .field("compressed", &self.compressed.len())
            .field("turns_since_summary", &self.turns_since_summary)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_domain::Role;

    fn numbered(n: usize) -> Vec<Message> {
        (0..n)
            .map(|i| {
                let role = if i % 2 == 0 { Role::User } else { Role::Tutor };
                Message::new(role, format!("Message {i}"))
            })
            .collect()
    }

    #[test]
    fn fresh_memory_renders_empty() {
        let mem = ConversationMemory::default();
        assert_eq!(mem.generate_summary(), "");
        assert!(!mem.needs_summary_update());
    }

    #[test]
    fn renders_role_labels() {
        let mut mem = ConversationMemory::default();
        mem.add_to_memory(Message::user("Test question"));
        mem.add_to_memory(Message::tutor("Test answer"));
        assert_eq!(
            mem.generate_summary(),
            "Recent conversation:\nStudent: Test question\nTutor: Test answer\n"
        );
    }

    #[test]
    fn four_turns_is_not_enough_five_is() {
        let mut mem = ConversationMemory::default();
        for msg in numbered(4) {
            mem.add_to_memory(msg);
        }
        assert!(!mem.needs_summary_update());
        mem.add_to_memory(Message::user("fifth"));
        assert!(mem.needs_summary_update());
    }

    #[test]
    fn reading_does_not_reset_counter() {
        let mut mem = ConversationMemory::default();
        for msg in numbered(6) {
            mem.add_to_memory(msg);
        }
        let _ = mem.generate_summary();
        assert!(mem.needs_summary_update());
        assert_eq!(mem.turns_since_last_summary(), 6);
    }

    #[test]
    fn eleventh_message_evicts_the_first() {
        let mut mem = ConversationMemory::default();
        for msg in numbered(11) {
            mem.add_to_memory(msg);
        }
        assert_eq!(mem.verbatim_messages().len(), 10);
        assert_eq!(mem.compressed_turns().len(), 1);
        assert_eq!(mem.verbatim_messages()[0].content, "Message 1");

        let summary = mem.generate_summary();
        assert!(summary.starts_with("Previous conversation summary:\n"));
        assert!(!summary.contains("Student: Message 0\n"));
    }

    #[test]
    fn compressed_section_precedes_recent_section() {
        let mut mem = ConversationMemory::default();
        for msg in numbered(11) {
            mem.add_to_memory(msg);
        }
        let summary = mem.generate_summary();
        assert!(summary.starts_with(
            "Previous conversation summary:\nDiscussed: Message. 1 exchanges.\n\nRecent conversation:\n"
        ));
    }

    #[test]
    fn one_at_a_time_compresses_each_eviction() {
        let mut mem = ConversationMemory::default();
        for msg in numbered(12) {
            mem.add_to_memory(msg);
        }
        assert_eq!(mem.compressed_turns().len(), 2);
        assert_eq!(mem.verbatim_messages()[0].content, "Message 2");
    }

    #[test]
    fn batch_overflow_compresses_once() {
        let mut mem = ConversationMemory::default();
        mem.extend_memory(numbered(12));
        assert_eq!(mem.verbatim_messages().len(), 10);
        assert_eq!(mem.compressed_turns(), ["Discussed: Message. 2 exchanges."]);
        assert_eq!(mem.turns_since_last_summary(), 12);
    }

    #[test]
    fn clear_resets_everything() {
        let mut mem = ConversationMemory::default();
        for msg in numbered(15) {
            mem.add_to_memory(msg);
        }
        mem.clear_memory();
        assert_eq!(mem.generate_summary(), "");
        assert!(!mem.needs_summary_update());
        assert!(mem.verbatim_messages().is_empty());
        assert!(mem.compressed_turns().is_empty());
    }

    #[test]
    fn custom_window_size() {
        let mut mem = ConversationMemory::new(MemoryConfig {
            max_verbatim: 2,
            summary_update_interval: 1,
        });
        for msg in numbered(5) {
            mem.add_to_memory(msg);
        }
        assert_eq!(mem.verbatim_messages().len(), 2);
        assert_eq!(mem.compressed_turns().len(), 3);
        assert!(mem.needs_summary_update());
    }
}
