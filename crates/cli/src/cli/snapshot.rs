//! One-shot commands over stored session snapshots.

use anyhow::Context;

use st_contextpack::TutorPromptBuilder;
use st_domain::config::Config;

use crate::turn;

/// `studytutor prompt`: print the prompt `message` would be sent with,
/// given the stored session. The message itself is not recorded.
pub fn prompt(
    config: &Config,
    session: Option<String>,
    message: &str,
    files: &[String],
    audio: bool,
) -> anyhow::Result<()> {
    let key = super::session_key(config, session);
    let store = turn::open_store(config).context("opening snapshot store")?;
    let session = turn::open_session(&store, &key, config);

    let builder = TutorPromptBuilder::from_config(&config.prompt);
    let (prompt, report) = turn::compose_prompt(&session, &builder, message, files.len(), audio);

    println!("{prompt}");
    eprintln!(
        "\n[{} chars, summary {}/{} chars{}]",
        report.total_chars,
        report.summary_injected_chars,
        report.summary_raw_chars,
        if report.summary_truncated { ", truncated" } else { "" },
    );
    Ok(())
}

/// `studytutor show`: print the stored snapshot as JSON.
pub fn show(config: &Config, session: Option<String>) -> anyhow::Result<()> {
    let key = super::session_key(config, session);
    let store = turn::open_store(config).context("opening snapshot store")?;

    match store.get(&key) {
        Some(persisted) => {
            println!("{}", serde_json::to_string_pretty(&persisted)?);
            Ok(())
        }
        None => {
            let known = store.keys();
            if known.is_empty() {
                anyhow::bail!("no snapshot stored under {key:?} (store is empty)");
            }
            anyhow::bail!(
                "no snapshot stored under {key:?}; known keys: {}",
                known.join(", ")
            )
        }
    }
}

/// `studytutor reset`: reset the stored session, keeping subject and level.
pub fn reset(config: &Config, session: Option<String>) -> anyhow::Result<()> {
    let key = super::session_key(config, session);
    let store = turn::open_store(config).context("opening snapshot store")?;
    let mut session = turn::open_session(&store, &key, config);

    turn::reset_session(&mut session, config);
    turn::save_session(&store, &key, &session).context("saving snapshot")?;

    eprintln!("Session {key:?} reset.");
    Ok(())
}
