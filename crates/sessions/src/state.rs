//! Session state owned by whoever drives the conversation.

use serde::{Deserialize, Serialize};

use st_domain::trace::TraceEvent;
use st_domain::{Message, Note, Role, TutorMode};

/// Everything known about the current study session.
///
/// There is no global instance: callers own a `SessionState` and pass it
/// by reference to whatever needs to read or change it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub subject: Option<String>,
    pub level: Option<String>,
    pub active_topic: Option<String>,
    /// Insertion-ordered, never contains duplicates.
    pub weak_areas: Vec<String>,
    pub preferred_style: Option<String>,
    pub tutor_mode: TutorMode,
    pub rolling_summary: String,
    pub messages: Vec<Message>,
    pub notes: Vec<Note>,
}

impl SessionState {
    pub fn new(tutor_mode: TutorMode) -> Self {
        Self {
            tutor_mode,
            ..Self::default()
        }
    }

    // ── Messages ─────────────────────────────────────────────────────

    /// Append a message with a fresh id and timestamp and return it.
    pub fn add_message(&mut self, role: Role, content: impl Into<String>) -> Message {
        let message = Message::new(role, content);
        self.messages.push(message.clone());
        message
    }

    /// Replace the content of a message. Returns `false` if no message has
    /// that id.
    pub fn update_message(&mut self, id: &str, content: impl Into<String>) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(msg) => {
                msg.content = content.into();
                true
            }
            None => false,
        }
    }

    /// Content of the most recent student message, if any.
    pub fn last_user_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.is_user())
    }

    // ── Session settings ─────────────────────────────────────────────

    pub fn set_tutor_mode(&mut self, mode: TutorMode) {
        self.tutor_mode = mode;
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = Some(subject.into());
    }

    pub fn set_level(&mut self, level: impl Into<String>) {
        self.level = Some(level.into());
    }

    pub fn set_active_topic(&mut self, topic: Option<String>) {
        self.active_topic = topic;
    }

    /// Record an area the student struggles with. Returns `false` if it was
    /// already known.
    pub fn add_weak_area(&mut self, area: impl Into<String>) -> bool {
        let area = area.into();
        if self.weak_areas.contains(&area) {
            return false;
        }
        self.weak_areas.push(area);
        true
    }

    pub fn update_rolling_summary(&mut self, summary: impl Into<String>) {
        self.rolling_summary = summary.into();
    }

    /// Start over, keeping only subject and level.
    pub fn reset(&mut self) {
        TraceEvent::SessionReset {
            messages_dropped: self.messages.len(),
            notes_dropped: self.notes.len(),
        }
        .emit();

        *self = Self {
            subject: self.subject.take(),
            level: self.level.take(),
            ..Self::default()
        };
    }

    // ── Notes ────────────────────────────────────────────────────────

    pub fn add_note(&mut self, topic: impl Into<String>, content: impl Into<String>) -> Note {
        let note = Note::new(topic, content);
        self.notes.push(note.clone());
        note
    }

    pub fn update_note(&mut self, id: &str, content: impl Into<String>) -> bool {
        match self.notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.content = content.into();
                true
            }
            None => false,
        }
    }

    pub fn delete_note(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }
}
