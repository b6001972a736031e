use serde::Serialize;

/// Structured trace events emitted across all study tutor crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    MemoryCompacted {
        evicted: usize,
        compressed_batches: usize,
        summary_chars: usize,
    },
    MemoryCleared {
        verbatim: usize,
        compressed_batches: usize,
    },
    SessionReset {
        messages_dropped: usize,
        notes_dropped: usize,
    },
    SnapshotSaved {
        key: String,
        messages: usize,
        notes: usize,
    },
    PromptBuilt {
        mode: String,
        summary_chars: usize,
        summary_truncated: bool,
        total_chars: usize,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "st_event");
    }

    /// Same as [`emit`](Self::emit) but at debug level, for events fired on
    /// every turn.
    pub fn emit_debug(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::debug!(trace_event = %json, "st_event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged() {
        let ev = TraceEvent::MemoryCleared {
            verbatim: 3,
            compressed_batches: 1,
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["event"], "MemoryCleared");
        assert_eq!(json["verbatim"], 3);
    }
}
