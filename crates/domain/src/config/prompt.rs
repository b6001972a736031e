use serde::{Deserialize, Serialize};

use crate::tutor::TutorMode;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Prompt caps
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Cap on the conversation summary injected into the prompt.
    #[serde(default = "d_4000")]
    pub summary_max_chars: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            summary_max_chars: 4_000,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tutor defaults
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorConfig {
    /// Mode a brand-new session starts in.
    #[serde(default)]
    pub default_mode: TutorMode,
}

fn d_4000() -> usize {
    4_000
}
