//! `studytutor chat`: interactive REPL command.
//!
//! Plain lines are recorded as student messages. Tutor replies come from
//! elsewhere (the model is not called here) and are recorded with
//! `/tutor <text>`. Slash-commands manage settings, notes and the session.
//! The session is snapshotted after every change.

use anyhow::Context;

use st_contextpack::TutorPromptBuilder;
use st_domain::config::Config;
use st_domain::{SuggestionChip, TutorMode};
use st_sessions::{SnapshotStore, StudySession};

use crate::turn;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Public entry point
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Run the interactive chat REPL.
pub fn chat(config: &Config, session: Option<String>) -> anyhow::Result<()> {
    let key = super::session_key(config, session);
    let store = turn::open_store(config).context("opening snapshot store")?;
    let mut session = turn::open_session(&store, &key, config);
    let builder = TutorPromptBuilder::from_config(&config.prompt);

    // Readline editor with persistent history.
    let history_path = dirs::home_dir()
        .unwrap_or_default()
        .join(".studytutor")
        .join("chat_history.txt");
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let mut rl = rustyline::DefaultEditor::new()?;
    let _ = rl.load_history(&history_path);

    // Banner goes to stderr to keep stdout clean for output.
    eprintln!("Study tutor session");
    eprintln!(
        "Session: {key}  |  {} message(s)  |  Type /help for commands, Ctrl+D to exit",
        session.state().messages.len()
    );
    eprintln!();

    loop {
        let readline = rl.readline("student> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                rl.add_history_entry(&line).ok();

                let outcome = if trimmed.starts_with('/') {
                    handle_slash_command(trimmed, &mut session, &builder, config)
                } else {
                    session.record_student(trimmed);
                    announce_summary_due(&session);
                    Outcome::Changed
                };

                match outcome {
                    Outcome::Exit => break,
                    Outcome::Changed => persist(&store, &key, &session),
                    Outcome::Unchanged => {}
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                eprintln!("(Use Ctrl+D or /exit to quit)");
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                break;
            }
            Err(e) => {
                eprintln!("\x1B[31mreadline error: {e}\x1B[0m");
                break;
            }
        }
    }

    rl.save_history(&history_path).ok();
    persist(&store, &key, &session);

    eprintln!("Goodbye!");
    Ok(())
}

/// What a handled line did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Changed,
    Unchanged,
    Exit,
}

fn persist(store: &SnapshotStore, key: &str, session: &StudySession) {
    if let Err(e) = turn::save_session(store, key, session) {
        eprintln!("\x1B[31merror saving session: {e}\x1B[0m");
    }
}

fn announce_summary_due(session: &StudySession) {
    if session.needs_summary_update() {
        eprintln!(
            "\x1B[2m({} turns since last summary; a fresh summary is due)\x1B[0m",
            session.memory().turns_since_last_summary()
        );
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Slash command handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

fn handle_slash_command(
    input: &str,
    session: &mut StudySession,
    builder: &TutorPromptBuilder,
    config: &Config,
) -> Outcome {
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0];
    let arg = parts.get(1).map(|s| s.trim()).filter(|s| !s.is_empty());

    match (cmd, arg) {
        ("/exit" | "/quit", _) => return Outcome::Exit,

        ("/tutor", Some(text)) => {
            session.record_tutor(text);
            announce_summary_due(session);
            return Outcome::Changed;
        }

        ("/mode", Some(name)) => match name.parse::<TutorMode>() {
            Ok(mode) => {
                session.state_mut().set_tutor_mode(mode);
                eprintln!("Mode set to: {}", mode.label());
                return Outcome::Changed;
            }
            Err(e) => eprintln!("{e}"),
        },
        ("/mode", None) => {
            eprintln!("Current mode: {}", session.state().tutor_mode.label());
            let names: Vec<_> = TutorMode::ALL.iter().map(|m| m.as_str()).collect();
            eprintln!("Usage: /mode <{}>", names.join("|"));
        }

        ("/subject", Some(subject)) => {
            session.state_mut().set_subject(subject);
            eprintln!("Subject set to: {subject}");
            return Outcome::Changed;
        }

        ("/level", Some(level)) => {
            session.state_mut().set_level(level);
            eprintln!("Level set to: {level}");
            return Outcome::Changed;
        }

        ("/note", Some(text)) => {
            let (topic, content) = match text.split_once(':') {
                Some((topic, content)) => (topic.trim(), content.trim()),
                None => ("General", text),
            };
            let note = session.state_mut().add_note(topic, content);
            eprintln!("Note saved ({})", note.id);
            return Outcome::Changed;
        }

        ("/notes", _) => {
            let notes = &session.state().notes;
            if notes.is_empty() {
                eprintln!("No notes yet.");
            }
            for note in notes {
                println!("[{}] {}: {}", note.id, note.topic, note.content);
            }
        }

        ("/delnote", Some(id)) => {
            if session.state_mut().delete_note(id) {
                eprintln!("Note deleted.");
                return Outcome::Changed;
            }
            eprintln!("No note with id {id}");
        }

        ("/chip", Some(name)) => match name.parse::<SuggestionChip>() {
            Ok(chip) => {
                let question = chip.follow_up();
                println!("student> {question}");
                session.record_student(question);
                return Outcome::Changed;
            }
            Err(e) => eprintln!("{e}"),
        },
        ("/chips", _) | ("/chip", None) => {
            for chip in SuggestionChip::ALL {
                eprintln!("  /chip {:<9} {}", format!("{chip:?}").to_lowercase(), chip.label());
            }
        }

        ("/context", _) => match session.state().last_user_message() {
            Some(last) => {
                let question = last.content.clone();
                let (prompt, _) = turn::compose_prompt(session, builder, &question, 0, false);
                println!("{prompt}");
            }
            None => eprintln!("No student message yet."),
        },

        ("/summary", _) => {
            let summary = session.context_summary();
            if summary.is_empty() {
                eprintln!("(memory is empty)");
            } else {
                print!("{summary}");
            }
        }

        ("/status", _) => {
            let state = session.state();
            let memory = session.memory();
            eprintln!("Subject:      {}", state.subject.as_deref().unwrap_or("-"));
            eprintln!("Level:        {}", state.level.as_deref().unwrap_or("-"));
            eprintln!("Mode:         {}", state.tutor_mode.label());
            eprintln!("Topic:        {}", state.active_topic.as_deref().unwrap_or("-"));
            eprintln!("Weak areas:   {}", state.weak_areas.join(", "));
            eprintln!("Messages:     {}", state.messages.len());
            eprintln!("Verbatim:     {}", memory.verbatim_messages().len());
            eprintln!("Compressed:   {}", memory.compressed_turns().len());
            eprintln!("Summary due:  {}", session.needs_summary_update());
        }

        ("/reset", _) => {
            turn::reset_session(session, config);
            eprintln!("Session reset (subject and level kept).");
            return Outcome::Changed;
        }

        ("/help", _) => {
            eprintln!("Commands:");
            eprintln!("  <text>                 Record a student message");
            eprintln!("  /tutor <text>          Record the tutor's reply");
            eprintln!("  /mode <mode>           explain | socratic | revision | exam-focused");
            eprintln!("  /subject <s>           Set the subject");
            eprintln!("  /level <l>             Set the level");
            eprintln!("  /note [topic:] <text>  Save a note");
            eprintln!("  /notes                 List notes");
            eprintln!("  /delnote <id>          Delete a note");
            eprintln!("  /chip <kind>           Send a suggested follow-up (/chips to list)");
            eprintln!("  /context               Show the prompt for the last question");
            eprintln!("  /summary               Show the conversation memory");
            eprintln!("  /status                Show session details");
            eprintln!("  /reset                 Start over (keeps subject and level)");
            eprintln!("  /exit, /quit           Exit");
        }

        (other, _) => {
            eprintln!("Unknown or incomplete command: {other}  (type /help for a list)");
        }
    }

    Outcome::Unchanged
}
