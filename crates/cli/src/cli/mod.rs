pub mod chat;
pub mod config;
pub mod snapshot;

use clap::{Parser, Subcommand};

/// studytutor: conversation memory and prompt tooling for an AI study tutor.
#[derive(Debug, Parser)]
#[command(name = "studytutor", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive session (default when no subcommand is given).
    Chat {
        /// Snapshot key (defaults to `session.snapshot_key`).
        #[arg(long)]
        session: Option<String>,
    },
    /// Print the tutor prompt a message would be sent with.
    Prompt {
        /// The student's question.
        message: String,
        /// Snapshot key (defaults to `session.snapshot_key`).
        #[arg(long)]
        session: Option<String>,
        /// Name of an attached file (repeatable).
        #[arg(long)]
        file: Vec<String>,
        /// The question was sent as audio.
        #[arg(long)]
        audio: bool,
    },
    /// Print a stored session snapshot as JSON.
    Show {
        #[arg(long)]
        session: Option<String>,
    },
    /// Reset a stored session, keeping subject and level.
    Reset {
        #[arg(long)]
        session: Option<String>,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `STUDYTUTOR_CONFIG`
/// (or `studytutor.toml` by default). Returns the parsed [`Config`] and
/// the path that was used.
///
/// [`Config`]: st_domain::config::Config
pub fn load_config() -> anyhow::Result<(st_domain::config::Config, String)> {
    let config_path =
        std::env::var("STUDYTUTOR_CONFIG").unwrap_or_else(|_| "studytutor.toml".into());
    let config = load_config_from(&config_path)?;
    Ok((config, config_path))
}

/// Parse the config at `path`, falling back to defaults if it does not exist.
pub fn load_config_from(path: &str) -> anyhow::Result<st_domain::config::Config> {
    if !std::path::Path::new(path).exists() {
        return Ok(st_domain::config::Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("reading {path}: {e}"))?;
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("parsing {path}: {e}"))
}

/// The snapshot key to use: explicit flag, else the configured default.
pub fn session_key(config: &st_domain::config::Config, session: Option<String>) -> String {
    session.unwrap_or_else(|| config.session.snapshot_key.clone())
}
