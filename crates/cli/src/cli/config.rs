use st_domain::config::{Config, ConfigSeverity};

/// Validate the loaded config and print a report.
///
/// Errors are listed before warnings. Returns `false` when any error is found.
pub fn validate(config: &Config, config_path: &str) -> bool {
    let mut issues = config.validate();
    issues.sort_by_key(|i| i.severity != ConfigSeverity::Error);

    let errors = issues
        .iter()
        .take_while(|i| i.severity == ConfigSeverity::Error)
        .count();

    for issue in &issues {
        println!("{issue}");
    }

    if issues.is_empty() {
        println!(
            "Config OK ({config_path}): {} verbatim messages, summary due every {} turns, \
             snapshots in {}",
            config.memory.max_verbatim,
            config.memory.summary_update_interval,
            config.session.state_path.display(),
        );
    } else {
        println!(
            "\n{errors} error(s), {} warning(s) in {config_path}",
            issues.len() - errors
        );
    }

    errors == 0
}

/// Print the effective config, defaults included, as TOML.
pub fn show(config: &Config) {
    match toml::to_string_pretty(config) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Failed to serialize config: {e}");
            std::process::exit(1);
        }
    }
}
