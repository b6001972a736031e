//! Bounded conversation memory.
//!
//! Keeps the most recent messages verbatim and folds everything older into
//! an append-only list of one-line summaries, so the context handed to the
//! model stays small no matter how long a study session runs.

pub mod compress;
pub mod manager;
pub mod shared;

pub use compress::{Compressor, KeywordCompressor};
pub use manager::ConversationMemory;
pub use shared::SharedMemory;
