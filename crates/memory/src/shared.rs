//! Thread-safe handle around [`ConversationMemory`].
//!
//! Every operation takes the one mutex for its whole duration, so an
//! eviction inside `add_to_memory` is never observed half-done.

use std::sync::Arc;

use parking_lot::Mutex;
use st_domain::Message;

use crate::manager::ConversationMemory;

/// Cloneable, lock-guarded conversation memory.
#[derive(Debug, Clone)]
pub struct SharedMemory {
    inner: Arc<Mutex<ConversationMemory>>,
}

impl SharedMemory {
    pub fn new(memory: ConversationMemory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(memory)),
        }
    }

    pub fn add_to_memory(&self, message: Message) {
        self.inner.lock().add_to_memory(message);
    }

    pub fn generate_summary(&self) -> String {
        self.inner.lock().generate_summary()
    }

    pub fn clear_memory(&self) {
        self.inner.lock().clear_memory();
    }

    pub fn needs_summary_update(&self) -> bool {
        self.inner.lock().needs_summary_update()
    }

    /// Run a read-only closure against a consistent view of the memory.
    pub fn with<R>(&self, f: impl FnOnce(&ConversationMemory) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl Default for SharedMemory {
    fn default() -> Self {
        Self::new(ConversationMemory::default())
    }
}
