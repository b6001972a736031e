//! Glue between a stored snapshot, the live study session and the prompt
//! builder.

use st_contextpack::{PromptReport, PromptRequest, TutorPromptBuilder};
use st_domain::config::Config;
use st_domain::error::Result;
use st_sessions::{SessionState, SnapshotStore, StudySession};

/// Open the snapshot store configured under `[session]`.
pub fn open_store(config: &Config) -> Result<SnapshotStore> {
    SnapshotStore::open(
        &config.session.state_path,
        config.session.persisted_message_limit,
    )
}

/// Resume the session stored under `key`, or start a fresh one in the
/// configured default mode.
pub fn open_session(store: &SnapshotStore, key: &str, config: &Config) -> StudySession {
    match store.load(key) {
        Some(state) => {
            tracing::debug!(key, messages = state.messages.len(), "resuming session");
            StudySession::restore(state, config.memory.clone())
        }
        None => StudySession::new(config.tutor.default_mode, config.memory.clone()),
    }
}

/// Persist the session under `key`.
pub fn save_session(store: &SnapshotStore, key: &str, session: &StudySession) -> Result<()> {
    store.save(key, session.state())
}

/// Reset the session but put it back in the configured default mode.
pub fn reset_session(session: &mut StudySession, config: &Config) {
    session.reset();
    session.state_mut().set_tutor_mode(config.tutor.default_mode);
}

/// Build the tutor prompt for `message` from the session's current state
/// and memory.
pub fn compose_prompt(
    session: &StudySession,
    builder: &TutorPromptBuilder,
    message: &str,
    attachments: usize,
    has_audio: bool,
) -> (String, PromptReport) {
    let state: &SessionState = session.state();
    let summary = session.context_summary();
    builder.build(&PromptRequest {
        message,
        mode: state.tutor_mode,
        subject: state.subject.as_deref(),
        level: state.level.as_deref(),
        session_summary: Some(&summary),
        attachments,
        has_audio,
    })
}
