//! Deterministic tutor prompt assembly.
//!
//! Combines the tutor-mode directive, session context (subject, level and
//! the conversation memory summary) and the student's question into the
//! single prompt sent to the model, plus a report describing what went in.

pub mod builder;
pub mod injection;
pub mod report;
pub mod truncation;

pub use builder::{PromptRequest, TutorPromptBuilder};
pub use report::PromptReport;
