use serde::{Deserialize, Serialize};

use st_domain::TutorMode;

/// Report of a tutor prompt build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptReport {
    pub mode: TutorMode,
    /// Chars of session summary offered by the caller.
    pub summary_raw_chars: usize,
    /// Chars of session summary actually injected.
    pub summary_injected_chars: usize,
    pub summary_truncated: bool,
    pub attachments: usize,
    pub audio: bool,
    pub total_chars: usize,
}
