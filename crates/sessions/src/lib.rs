//! Study session management.
//!
//! An explicitly owned [`SessionState`] (subject, level, tutor mode, notes,
//! weak areas, messages), the [`StudySession`] that keeps it in step with
//! the conversation memory, and a key-value [`SnapshotStore`] that persists
//! the durable part of a session between runs.

pub mod heuristics;
pub mod session;
pub mod snapshot;
pub mod state;

pub use heuristics::{annotate_attachments, extract_topic, signals_confusion};
pub use session::StudySession;
pub use snapshot::{PersistedSession, SnapshotStore};
pub use state::SessionState;
