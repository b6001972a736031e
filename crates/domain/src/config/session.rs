use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Session snapshots
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Where and how much of a study session is snapshotted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory holding `snapshots.json`.
    #[serde(default = "d_state_path")]
    pub state_path: PathBuf,
    /// Key the default session is stored under.
    #[serde(default = "d_snapshot_key")]
    pub snapshot_key: String,
    /// Only the most recent messages are persisted.
    #[serde(default = "d_50")]
    pub persisted_message_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            state_path: d_state_path(),
            snapshot_key: d_snapshot_key(),
            persisted_message_limit: 50,
        }
    }
}

fn d_state_path() -> PathBuf {
    PathBuf::from("./data")
}
fn d_snapshot_key() -> String {
    "study-tutor-session".into()
}
fn d_50() -> usize {
    50
}
