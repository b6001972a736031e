use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tutor modes
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Teaching style the tutor is asked to adopt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TutorMode {
    #[default]
    Explain,
    Socratic,
    Revision,
    ExamFocused,
}

impl TutorMode {
    pub const ALL: [TutorMode; 4] = [
        TutorMode::Explain,
        TutorMode::Socratic,
        TutorMode::Revision,
        TutorMode::ExamFocused,
    ];

    /// Wire name (`explain`, `socratic`, `revision`, `exam-focused`).
    pub fn as_str(self) -> &'static str {
        match self {
            TutorMode::Explain => "explain",
            TutorMode::Socratic => "socratic",
            TutorMode::Revision => "revision",
            TutorMode::ExamFocused => "exam-focused",
        }
    }

    /// Short human label.
    pub fn label(self) -> &'static str {
        match self {
            TutorMode::Explain => "Explain",
            TutorMode::Socratic => "Socratic",
            TutorMode::Revision => "Revision",
            TutorMode::ExamFocused => "Exam",
        }
    }

    /// Instruction that opens the tutor prompt for this mode.
    pub fn directive(self) -> &'static str {
        match self {
            TutorMode::Explain => {
                "Patient, clear teaching. Step-by-step breakdowns with examples. \
                 Simple first, then add complexity."
            }
            TutorMode::Socratic => {
                "Guide through questions. Never give direct answers. One question at a time."
            }
            TutorMode::Revision => {
                "Review and consolidate. Create summaries, find patterns, test understanding."
            }
            TutorMode::ExamFocused => {
                "Concise, structured answers. Key terms, pitfalls, techniques. \
                 Direct and efficient."
            }
        }
    }
}

impl std::fmt::Display for TutorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TutorMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explain" => Ok(TutorMode::Explain),
            "socratic" => Ok(TutorMode::Socratic),
            "revision" => Ok(TutorMode::Revision),
            "exam-focused" | "exam" => Ok(TutorMode::ExamFocused),
            other => Err(crate::Error::UnknownName {
                kind: "tutor mode",
                value: other.to_string(),
            }),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Suggestion chips
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One-tap follow-up offered after a tutor reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionChip {
    Example,
    Simplify,
    Exam,
    Deeper,
}

impl SuggestionChip {
    pub const ALL: [SuggestionChip; 4] = [
        SuggestionChip::Example,
        SuggestionChip::Simplify,
        SuggestionChip::Exam,
        SuggestionChip::Deeper,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SuggestionChip::Example => "Show example",
            SuggestionChip::Simplify => "Simplify",
            SuggestionChip::Exam => "Exam answer",
            SuggestionChip::Deeper => "Go deeper",
        }
    }

    /// The student message sent when the chip is selected.
    pub fn follow_up(self) -> &'static str {
        match self {
            SuggestionChip::Example => "Can you provide a concrete example of this?",
            SuggestionChip::Simplify => "Can you explain this more simply?",
            SuggestionChip::Exam => "How would I answer this in an exam?",
            SuggestionChip::Deeper => "Can you explain this in more depth?",
        }
    }
}

impl std::str::FromStr for SuggestionChip {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "example" => Ok(SuggestionChip::Example),
            "simplify" => Ok(SuggestionChip::Simplify),
            "exam" => Ok(SuggestionChip::Exam),
            "deeper" => Ok(SuggestionChip::Deeper),
            other => Err(crate::Error::UnknownName {
                kind: "suggestion",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_wire_names_round_trip() {
        for mode in TutorMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
            assert_eq!(mode.as_str().parse::<TutorMode>().unwrap(), mode);
        }
    }

    #[test]
    fn exam_alias_parses() {
        assert_eq!("Exam".parse::<TutorMode>().unwrap(), TutorMode::ExamFocused);
        let err = "Lecture".parse::<TutorMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown tutor mode: \"lecture\"");
    }

    #[test]
    fn default_mode_is_explain() {
        assert_eq!(TutorMode::default(), TutorMode::Explain);
    }

    #[test]
    fn chips_have_questions() {
        for chip in SuggestionChip::ALL {
            assert!(chip.follow_up().ends_with('?'));
        }
        assert_eq!("deeper".parse::<SuggestionChip>().unwrap(), SuggestionChip::Deeper);
    }
}
