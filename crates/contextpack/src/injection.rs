/// Placeholder shown when the student has not set a subject or level.
pub const NOT_SPECIFIED: &str = "Not specified";

const GUIDANCE: &str = "Focus on ONE concept. Use concrete examples. Normalize confusion. \
Ask before deeper dives. Markdown formatting. LaTeX for math.";

const AUDIO_NOTE: &str = "[Note: Student sent an audio message - please acknowledge this]";

/// Format the context block: subject, level and (if any) the session summary.
pub fn format_context(subject: Option<&str>, level: Option<&str>, session: Option<&str>) -> String {
    let subject = subject.filter(|s| !s.is_empty()).unwrap_or(NOT_SPECIFIED);
    let level = level.filter(|s| !s.is_empty()).unwrap_or(NOT_SPECIFIED);
    let mut out = format!("Context:\nSubject: {subject}\nLevel: {level}");
    if let Some(session) = session.filter(|s| !s.is_empty()) {
        out.push_str("\nSession: ");
        out.push_str(session);
    }
    out
}

/// Format the fixed teaching guidance, extended for attachments and audio.
pub fn format_guidance(has_files: bool, has_audio: bool) -> String {
    let mut out = GUIDANCE.to_string();
    if has_files {
        out.push_str(" Reference attached files.");
    }
    if has_audio {
        out.push_str(" Process audio input.");
    }
    out
}

/// Format the question/answer tail of the prompt.
pub fn format_question(message: &str) -> String {
    format!("Q: {message}\n\nA:")
}

/// Note appended after the prompt when the student sent audio.
pub fn audio_note() -> &'static str {
    AUDIO_NOTE
}
