use st_domain::config::PromptConfig;
use st_domain::trace::TraceEvent;
use st_domain::TutorMode;

use crate::injection;
use crate::report::PromptReport;
use crate::truncation;

/// Inputs for one tutor prompt.
#[derive(Debug, Clone, Default)]
pub struct PromptRequest<'a> {
    /// The student's question, without attachment annotations.
    pub message: &'a str,
    pub mode: TutorMode,
    pub subject: Option<&'a str>,
    pub level: Option<&'a str>,
    /// Rendered conversation memory. Empty or `None` omits the session line.
    pub session_summary: Option<&'a str>,
    pub attachments: usize,
    pub has_audio: bool,
}

/// Deterministic tutor prompt builder.
///
/// Pure function of its inputs: returns the assembled prompt and a report.
#[derive(Debug, Clone)]
pub struct TutorPromptBuilder {
    pub summary_max_chars: usize,
}

impl TutorPromptBuilder {
    pub fn new(summary_max_chars: usize) -> Self {
        Self { summary_max_chars }
    }

    pub fn from_config(config: &PromptConfig) -> Self {
        Self::new(config.summary_max_chars)
    }

    /// Build the prompt.
    ///
    /// Layout, sections separated by blank lines:
    /// mode directive, context block, guidance, `Q:`/`A:`; then the audio
    /// note when the student sent a recording.
    pub fn build(&self, req: &PromptRequest<'_>) -> (String, PromptReport) {
        let raw_summary = req.session_summary.unwrap_or("");
        let (summary, summary_truncated) =
            truncation::truncate_keep_tail(raw_summary, self.summary_max_chars);
        if summary_truncated {
            tracing::debug!(
                raw_chars = raw_summary.len(),
                max_chars = self.summary_max_chars,
                "session summary truncated"
            );
        }

        let sections = [
            req.mode.directive().to_string(),
            injection::format_context(req.subject, req.level, Some(summary.as_str())),
            injection::format_guidance(req.attachments > 0, req.has_audio),
            injection::format_question(req.message),
        ];
        let mut prompt = sections.join("\n\n");

        if req.has_audio {
            prompt.push_str("\n\n");
            prompt.push_str(injection::audio_note());
        }

        let report = PromptReport {
            mode: req.mode,
            summary_raw_chars: raw_summary.len(),
            summary_injected_chars: summary.len(),
            summary_truncated,
            attachments: req.attachments,
            audio: req.has_audio,
            total_chars: prompt.len(),
        };

        TraceEvent::PromptBuilt {
            mode: req.mode.to_string(),
            summary_chars: report.summary_injected_chars,
            summary_truncated,
            total_chars: report.total_chars,
        }
        .emit_debug();

        (prompt, report)
    }
}

impl Default for TutorPromptBuilder {
    fn default() -> Self {
        Self::from_config(&PromptConfig::default())
    }
}
