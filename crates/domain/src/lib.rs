//! Shared types for the study tutor crates: conversation messages, tutor
//! modes, notes, configuration, errors and structured trace events.

pub mod config;
pub mod error;
pub mod message;
pub mod trace;
pub mod tutor;

pub use error::{Error, Result};
pub use message::{Message, Note, Role};
pub use tutor::{SuggestionChip, TutorMode};
