use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Conversation memory
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Bounds on the verbatim window kept by the conversation memory.
/// Older turns are folded into one-line summaries as they fall out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Most recent messages kept word for word.
    #[serde(default = "d_10")]
    pub max_verbatim: usize,
    /// Turns after which a fresh (richer) summary is considered due.
    #[serde(default = "d_5")]
    pub summary_update_interval: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_verbatim: 10,
            summary_update_interval: 5,
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_10() -> usize {
    10
}
fn d_5() -> usize {
    5
}
