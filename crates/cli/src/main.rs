use clap::Parser;
use tracing_subscriber::EnvFilter;

use st_cli::cli::{Cli, Command, ConfigCommand};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_cli_tracing();

    match cli.command {
        // Default to chat when no subcommand is given.
        None => {
            let (config, _) = st_cli::cli::load_config()?;
            st_cli::cli::chat::chat(&config, None)
        }
        Some(Command::Chat { session }) => {
            let (config, _) = st_cli::cli::load_config()?;
            st_cli::cli::chat::chat(&config, session)
        }
        Some(Command::Prompt { message, session, file, audio }) => {
            let (config, _) = st_cli::cli::load_config()?;
            st_cli::cli::snapshot::prompt(&config, session, &message, &file, audio)
        }
        Some(Command::Show { session }) => {
            let (config, _) = st_cli::cli::load_config()?;
            st_cli::cli::snapshot::show(&config, session)
        }
        Some(Command::Reset { session }) => {
            let (config, _) = st_cli::cli::load_config()?;
            st_cli::cli::snapshot::reset(&config, session)
        }
        Some(Command::Config(ConfigCommand::Validate)) => {
            let (config, config_path) = st_cli::cli::load_config()?;
            let valid = st_cli::cli::config::validate(&config, &config_path);
            if !valid {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Command::Config(ConfigCommand::Show)) => {
            let (config, _config_path) = st_cli::cli::load_config()?;
            st_cli::cli::config::show(&config);
            Ok(())
        }
        Some(Command::Version) => {
            println!("studytutor {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Initialize compact stderr-only tracing.
///
/// Defaults to `warn` level so diagnostic output does not pollute stdout.
fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
