//! A study session: session state and conversation memory kept in step.

use st_domain::config::MemoryConfig;
use st_domain::{Message, Role, TutorMode};
use st_memory::ConversationMemory;

use crate::heuristics;
use crate::state::SessionState;

/// Weak area recorded when the student is confused but no topic is known.
const GENERAL_WEAK_AREA: &str = "General concept";

/// Owns a [`SessionState`] and the [`ConversationMemory`] built from it.
///
/// Every recorded message goes to both, and the rendered memory is copied
/// into the state's `rolling_summary` so it survives in snapshots.
#[derive(Debug)]
pub struct StudySession {
    state: SessionState,
    memory: ConversationMemory,
}

impl StudySession {
    pub fn new(mode: TutorMode, memory_config: MemoryConfig) -> Self {
        Self {
            state: SessionState::new(mode),
            memory: ConversationMemory::new(memory_config),
        }
    }

    /// Resume from previously persisted state, rebuilding memory by
    /// replaying its messages in order.
    pub fn restore(state: SessionState, memory_config: MemoryConfig) -> Self {
        let mut memory = ConversationMemory::new(memory_config);
        for msg in &state.messages {
            memory.add_to_memory(msg.clone());
        }
        let mut session = Self { state, memory };
        session.sync_summary();
        session
    }

    pub fn with_memory(state: SessionState, memory: ConversationMemory) -> Self {
        let mut session = Self { state, memory };
        session.sync_summary();
        session
    }

    /// Record a student message.
    ///
    /// Sets the active topic if none is set yet and one can be inferred,
    /// and notes a weak area when the student signals confusion.
    pub fn record_student(&mut self, content: &str) -> Message {
        let topic = heuristics::extract_topic(content);
        if self.state.active_topic.is_none() && topic.is_some() {
            self.state.set_active_topic(topic.clone());
        }
        if heuristics::signals_confusion(content) {
            let area = topic.unwrap_or_else(|| GENERAL_WEAK_AREA.to_string());
            if self.state.add_weak_area(area.clone()) {
                tracing::debug!(area = %area, "weak area recorded");
            }
        }
        self.record(Role::User, content)
    }

    /// Record a completed tutor reply.
    pub fn record_tutor(&mut self, content: &str) -> Message {
        self.record(Role::Tutor, content)
    }

    fn record(&mut self, role: Role, content: &str) -> Message {
        let message = self.state.add_message(role, content);
        self.memory.add_to_memory(message.clone());
        self.sync_summary();
        message
    }

    /// Conversation context for the next outbound prompt.
    pub fn context_summary(&self) -> String {
        self.memory.generate_summary()
    }

    pub fn needs_summary_update(&self) -> bool {
        self.memory.needs_summary_update()
    }

    /// Reset state (keeping subject and level) and clear memory.
    pub fn reset(&mut self) {
        self.state.reset();
        self.memory.clear_memory();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mutable access for settings and notes. Messages should go through
    /// [`record_student`](Self::record_student) / [`record_tutor`](Self::record_tutor)
    /// so memory stays in step.
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    fn sync_summary(&mut self) {
        let summary = self.memory.generate_summary();
        self.state.update_rolling_summary(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> StudySession {
        StudySession::new(TutorMode::Explain, MemoryConfig::default())
    }

    #[test]
    fn messages_reach_state_and_memory() {
        let mut s = session();
        s.record_student("What is photosynthesis?");
        s.record_tutor("Photosynthesis is a process...");

        assert_eq!(s.state().messages.len(), 2);
        assert_eq!(s.memory().verbatim_messages().len(), 2);
        let summary = s.context_summary();
        assert!(summary.contains("Recent conversation:"));
        assert!(summary.contains("Student: What is photosynthesis?"));
        assert!(summary.contains("Tutor: Photosynthesis is a process..."));
        assert_eq!(s.state().rolling_summary, summary);
    }

    #[test]
    fn first_inferred_topic_sticks() {
        let mut s = session();
        s.record_student("Can you explain photosynthesis?");
        s.record_student("Tell me about mitosis");
        assert_eq!(s.state().active_topic.as_deref(), Some("photosynthesis"));
    }

    #[test]
    fn confusion_records_weak_area() {
        let mut s = session();
        s.record_student("I'm confused, what is a derivative?");
        s.record_student("still confused");
        s.record_student("I'm confused again");
        assert_eq!(s.state().weak_areas, vec!["a derivative", "General concept"]);
    }

    #[test]
    fn reset_clears_memory_and_keeps_subject() {
        let mut s = session();
        s.state_mut().set_subject("Biology");
        for i in 0..12 {
            s.record_student(&format!("question {i}"));
        }
        assert!(s.needs_summary_update());

        s.reset();

        assert_eq!(s.context_summary(), "");
        assert!(!s.needs_summary_update());
        assert!(s.state().messages.is_empty());
        assert_eq!(s.state().subject.as_deref(), Some("Biology"));
    }

    #[test]
    fn restore_replays_messages() {
        let mut original = session();
        for i in 0..13 {
            original.record_student(&format!("Message {i}"));
        }
        let state = original.into_state();

        let restored = StudySession::restore(state, MemoryConfig::default());
        assert_eq!(restored.memory().verbatim_messages().len(), 10);
        assert_eq!(restored.memory().compressed_turns().len(), 3);
        assert!(restored.context_summary().contains("Message 12"));
        assert_eq!(restored.state().rolling_summary, restored.context_summary());
    }
}
