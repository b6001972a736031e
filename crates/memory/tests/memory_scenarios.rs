use std::sync::Arc;

use parking_lot::Mutex;
use st_domain::config::MemoryConfig;
use st_domain::{Message, Role};
use st_memory::{Compressor, ConversationMemory};

fn alternating(n: usize) -> Vec<Message> {
    (0..n)
        .map(|i| {
            let role = if i % 2 == 0 { Role::User } else { Role::Tutor };
            Message::new(role, format!("Message {i}"))
        })
        .collect()
}

/// Pull `N` out of every `... N exchanges.` line.
fn exchange_counts(compressed: &[String]) -> Vec<usize> {
    compressed
        .iter()
        .map(|line| {
            let tail = line
                .strip_suffix(" exchanges.")
                .expect("summary ends with exchange count");
            let n = tail.rsplit(' ').next().unwrap();
            n.parse().unwrap()
        })
        .collect()
}

#[test]
fn window_never_exceeds_limit() {
    let mut mem = ConversationMemory::default();
    for msg in alternating(40) {
        mem.add_to_memory(msg);
        assert!(mem.verbatim_messages().len() <= 10);
    }
}

#[test]
fn every_message_is_accounted_for() {
    for total in [0, 1, 9, 10, 11, 12, 23, 57] {
        let mut mem = ConversationMemory::default();
        for msg in alternating(total) {
            mem.add_to_memory(msg);
        }
        let compressed: usize = exchange_counts(mem.compressed_turns()).iter().sum();
        assert_eq!(mem.verbatim_messages().len() + compressed, total, "total = {total}");
    }
}

#[test]
fn batched_adds_are_accounted_for() {
    let mut mem = ConversationMemory::default();
    mem.extend_memory(alternating(7));
    mem.extend_memory(alternating(9));
    mem.extend_memory(alternating(3));
    let compressed: usize = exchange_counts(mem.compressed_turns()).iter().sum();
    assert_eq!(mem.verbatim_messages().len() + compressed, 19);
    assert_eq!(mem.compressed_turns().len(), 2);
}

#[test]
fn summary_is_stable_between_mutations() {
    let mut mem = ConversationMemory::default();
    for msg in alternating(14) {
        mem.add_to_memory(msg);
    }
    assert_eq!(mem.generate_summary(), mem.generate_summary());
}

#[test]
fn twelve_messages_keep_the_last_ten() {
    let mut mem = ConversationMemory::default();
    for msg in alternating(12) {
        mem.add_to_memory(msg);
    }

    let contents: Vec<_> = mem
        .verbatim_messages()
        .iter()
        .map(|m| m.content.as_str())
        .collect();
    let expected: Vec<_> = (2..12).map(|i| format!("Message {i}")).collect();
    assert_eq!(contents, expected);

    // One entry per eviction: M0, then M1.
    assert_eq!(exchange_counts(mem.compressed_turns()), vec![1, 1]);

    let summary = mem.generate_summary();
    assert!(summary.contains("Previous conversation summary"));
    assert!(summary.contains("Message 11"));
    assert!(summary.contains("Message 10"));
    assert!(!summary.contains("Student: Message 0\n"));
    assert!(!summary.contains("Tutor: Message 1\n"));
}

#[test]
fn twelve_messages_in_one_batch_compress_once() {
    let mut mem = ConversationMemory::default();
    mem.extend_memory(alternating(12));
    assert_eq!(mem.verbatim_messages().len(), 10);
    assert_eq!(exchange_counts(mem.compressed_turns()), vec![2]);

    let summary = mem.generate_summary();
    assert!(summary.contains("Previous conversation summary"));
    assert!(summary.contains("Message 11"));
    assert!(!summary.contains("Student: Message 0\n"));
}

#[test]
fn long_session_keeps_both_sections() {
    let mut mem = ConversationMemory::default();
    for i in 0..15 {
        mem.add_to_memory(Message::user(format!("Question about derivatives number {i}")));
        mem.add_to_memory(Message::tutor(format!("Answer about calculus number {i}")));
    }

    let summary = mem.generate_summary();
    assert!(summary.contains("Previous conversation summary"));
    assert!(summary.contains("Recent conversation:"));
    assert!(summary.contains("Discussed: Question, derivatives. 1 exchanges."));
    assert!(summary.contains("Student: Question about derivatives number 14\n"));
    assert!(summary.ends_with("Tutor: Answer about calculus number 14\n"));
}

#[test]
fn clear_after_anything_is_empty() {
    let mut mem = ConversationMemory::default();
    for msg in alternating(33) {
        mem.add_to_memory(msg);
    }
    mem.clear_memory();
    assert_eq!(mem.generate_summary(), "");
    assert!(!mem.needs_summary_update());

    mem.add_to_memory(Message::user("fresh start"));
    assert_eq!(mem.generate_summary(), "Recent conversation:\nStudent: fresh start\n");
}

struct RecordingCompressor {
    batches: Arc<Mutex<Vec<Vec<String>>>>,
}

impl Compressor for RecordingCompressor {
    fn compress(&self, batch: &[Message]) -> String {
        self.batches
            .lock()
            .push(batch.iter().map(|m| m.content.clone()).collect());
        format!("[{} folded]", batch.len())
    }
}

#[test]
fn custom_compressor_sees_exact_batches() {
    let batches = Arc::new(Mutex::new(Vec::new()));
    let mut mem = ConversationMemory::with_compressor(
        MemoryConfig {
            max_verbatim: 3,
            summary_update_interval: 5,
        },
        Box::new(RecordingCompressor {
            batches: batches.clone(),
        }),
    );

    for msg in alternating(5) {
        mem.add_to_memory(msg);
    }

    assert_eq!(
        *batches.lock(),
        vec![vec!["Message 0".to_string()], vec!["Message 1".to_string()]]
    );
    assert_eq!(
        mem.generate_summary(),
        "Previous conversation summary:\n[1 folded]\n[1 folded]\n\n\
         Recent conversation:\nStudent: Message 2\nTutor: Message 3\nStudent: Message 4\n"
    );
}
