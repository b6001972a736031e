mod memory;
mod prompt;
mod session;

pub use memory::*;
pub use prompt::*;
pub use session::*;

use serde::{Deserialize, Serialize};
use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub tutor: TutorConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Returns an empty vec when everything looks good.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // A zero-length window would evict every message immediately.
        if self.memory.max_verbatim == 0 {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "memory.max_verbatim".into(),
                message: "max_verbatim must be greater than 0".into(),
            });
        }

        if self.memory.summary_update_interval == 0 {
            errors.push(ConfigError {
                severity: ConfigSeverity::Warning,
                field: "memory.summary_update_interval".into(),
                message: "interval of 0 reports a summary update as always due".into(),
            });
        }

        if self.session.snapshot_key.trim().is_empty() {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "session.snapshot_key".into(),
                message: "snapshot_key must not be empty".into(),
            });
        }

        if self.session.persisted_message_limit == 0 {
            errors.push(ConfigError {
                severity: ConfigSeverity::Warning,
                field: "session.persisted_message_limit".into(),
                message: "no messages will survive a restart".into(),
            });
        }

        if self.prompt.summary_max_chars < 200 {
            errors.push(ConfigError {
                severity: ConfigSeverity::Warning,
                field: "prompt.summary_max_chars".into(),
                message: format!(
                    "{} chars is too small to carry useful conversation context",
                    self.prompt.summary_max_chars
                ),
            });
        }

        errors
    }
}
