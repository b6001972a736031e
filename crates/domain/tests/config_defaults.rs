use st_domain::config::{Config, ConfigSeverity};
use st_domain::TutorMode;

#[test]
fn default_memory_window() {
    let config = Config::default();
    assert_eq!(config.memory.max_verbatim, 10);
    assert_eq!(config.memory.summary_update_interval, 5);
}

#[test]
fn default_snapshot_settings() {
    let config = Config::default();
    assert_eq!(config.session.snapshot_key, "study-tutor-session");
    assert_eq!(config.session.persisted_message_limit, 50);
    assert_eq!(config.tutor.default_mode, TutorMode::Explain);
}

#[test]
fn default_config_is_valid() {
    assert!(Config::default().validate().is_empty());
}

#[test]
fn empty_toml_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.memory.max_verbatim, 10);
    assert_eq!(config.prompt.summary_max_chars, 4_000);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let toml_str = r#"
[memory]
max_verbatim = 4
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.memory.max_verbatim, 4);
    assert_eq!(config.memory.summary_update_interval, 5);
}

#[test]
fn tutor_mode_parses_kebab_case() {
    let toml_str = r#"
[tutor]
default_mode = "exam-focused"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.tutor.default_mode, TutorMode::ExamFocused);
}

#[test]
fn zero_window_is_an_error() {
    let toml_str = r#"
[memory]
max_verbatim = 0
summary_update_interval = 0
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    let issues = config.validate();
    assert!(issues
        .iter()
        .any(|i| i.field == "memory.max_verbatim" && i.severity == ConfigSeverity::Error));
    assert!(issues
        .iter()
        .any(|i| i.field == "memory.summary_update_interval"
            && i.severity == ConfigSeverity::Warning));
}

#[test]
fn blank_snapshot_key_is_an_error() {
    let toml_str = r#"
[session]
snapshot_key = "  "
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    let issues = config.validate();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].to_string(), "[ERROR] session.snapshot_key: snapshot_key must not be empty");
}
