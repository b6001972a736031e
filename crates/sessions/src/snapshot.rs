//! Key-value snapshot store.
//!
//! Persists the durable part of each session in `snapshots.json` under the
//! configured state path. Each key maps to an envelope of the form
//! `{"state": {...}, "version": 0}`. Only the most recent
//! `persisted_message_limit` messages are kept; transient fields such as the
//! rolling summary are rebuilt on load.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use st_domain::error::{Error, Result};
use st_domain::trace::TraceEvent;
use st_domain::{Message, Note, TutorMode};

use crate::state::SessionState;

const SNAPSHOT_FILE: &str = "snapshots.json";
const SNAPSHOT_VERSION: u32 = 0;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Persisted shape
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The subset of [`SessionState`] that survives a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub tutor_mode: TutorMode,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub weak_areas: Vec<String>,
    #[serde(default)]
    pub active_topic: Option<String>,
}

impl PersistedSession {
    /// Project a session down to its persisted fields, keeping only the
    /// last `message_limit` messages.
    pub fn from_state(state: &SessionState, message_limit: usize) -> Self {
        let skip = state.messages.len().saturating_sub(message_limit);
        Self {
            subject: state.subject.clone(),
            level: state.level.clone(),
            tutor_mode: state.tutor_mode,
            messages: state.messages[skip..].to_vec(),
            notes: state.notes.clone(),
            weak_areas: state.weak_areas.clone(),
            active_topic: state.active_topic.clone(),
        }
    }

    pub fn into_state(self) -> SessionState {
        SessionState {
            subject: self.subject,
            level: self.level,
            active_topic: self.active_topic,
            weak_areas: self.weak_areas,
            preferred_style: None,
            tutor_mode: self.tutor_mode,
            rolling_summary: String::new(),
            messages: self.messages,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Envelope {
    state: PersistedSession,
    #[serde(default)]
    version: u32,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Snapshot store
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Session snapshots keyed by name, backed by a single JSON file.
pub struct SnapshotStore {
    path: PathBuf,
    message_limit: usize,
    entries: RwLock<BTreeMap<String, Envelope>>,
}

impl SnapshotStore {
    /// Load or create the store at `state_path/snapshots.json`.
    ///
    /// An unreadable or corrupt file is logged and treated as empty; it is
    /// overwritten on the next save.
    pub fn open(state_path: &Path, message_limit: usize) -> Result<Self> {
        std::fs::create_dir_all(state_path).map_err(Error::Io)?;

        let path = state_path.join(SNAPSHOT_FILE);
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(Error::Io)?;
            match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "ignoring malformed snapshot file"
                    );
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        tracing::info!(
            snapshots = entries.len(),
            path = %path.display(),
            "snapshot store loaded"
        );

        Ok(Self {
            path,
            message_limit,
            entries: RwLock::new(entries),
        })
    }

    /// Snapshot `state` under `key` and write the store to disk.
    pub fn save(&self, key: &str, state: &SessionState) -> Result<()> {
        let persisted = PersistedSession::from_state(state, self.message_limit);
        let (messages, notes) = (persisted.messages.len(), persisted.notes.len());

        self.entries.write().insert(
            key.to_owned(),
            Envelope {
                state: persisted,
                version: SNAPSHOT_VERSION,
            },
        );
        self.flush()?;

        TraceEvent::SnapshotSaved {
            key: key.to_owned(),
            messages,
            notes,
        }
        .emit();

        Ok(())
    }

    /// Restore the session stored under `key`.
    pub fn load(&self, key: &str) -> Option<SessionState> {
        self.get(key).map(PersistedSession::into_state)
    }

    /// The persisted form stored under `key`.
    pub fn get(&self, key: &str) -> Option<PersistedSession> {
        self.entries.read().get(key).map(|e| e.state.clone())
    }

    /// Delete a snapshot. Returns `false` if the key was unknown.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let removed = self.entries.write().remove(key).is_some();
        if removed {
            self.flush()?;
        }
        Ok(removed)
    }

    /// All stored keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the current snapshots to disk (write to a temp file, then
    /// rename over the old one).
    pub fn flush(&self) -> Result<()> {
        let json = {
            let entries = self.entries.read();
            serde_json::to_string_pretty(&*entries)?
        };
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(Error::Io)?;
        std::fs::rename(&tmp, &self.path).map_err(Error::Io)?;
        Ok(())
    }
}
