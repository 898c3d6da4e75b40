use std::path::Path;

use clap::Parser;

use crate::app_config::AppConfig;
use crate::app_errors::AppError;
use crate::app_shell::AppShell;
use crate::ui_host::{self, UiHostError, UiHostOptions};
use crate::{config_paths, failure_notice, logging};
use crate::DEFAULT_CONFIG_PATH;

/// k-WL web application.
#[derive(Parser, Debug)]
#[command(name = "k-WL", about = "k-WL web application")]
pub(crate) struct CliArgs {
    /// Path to the configuration file. If not provided, uses the default config.
    #[arg(short, long, value_name = "CONFIG_FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub(crate) config: String,
}

pub(crate) fn run() {
    let args = CliArgs::parse();

    if let Err(error) = logging::init_log_file() {
        eprintln!("impossible d'initialiser le fichier de log: {error}");
    }
    logging::log_info("Starting kwl-desktop");

    if let Err(error) = bootstrap(Path::new(""), &args.config, ui_host::start_ui_host) {
        failure_notice::report_failure(&failure_message(&error));
        std::process::exit(1);
    }
}

/// Resolve -> load -> construct -> run. UI host startup failures never show
/// up in the returned result; the shell absorbs them.
fn bootstrap<F>(base_dir: &Path, raw_config_path: &str, launcher: F) -> Result<(), AppError>
where
    F: FnOnce(AppConfig, UiHostOptions) -> Result<(), UiHostError>,
{
    let config_path = config_paths::resolve_config_path(base_dir, raw_config_path)?;
    logging::log_info(&format!("Using config file {}", config_path.display()));

    let shell = AppShell::construct(&config_path)?;
    shell.run(launcher);
    Ok(())
}

/// Maps every failure kind onto one of the two user-facing categories.
fn failure_message(error: &AppError) -> String {
    match error {
        AppError::ConfigNotFound { .. } => format!("Erreur de configuration : {error}"),
        AppError::ConfigParse { .. } | AppError::Io(_) => {
            format!("Une erreur inattendue s'est produite : {error}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn cli_defaults_to_the_fixed_config_path() {
        let args = CliArgs::parse_from(["k-WL"]);
        assert_eq!(args.config, DEFAULT_CONFIG_PATH);
    }

    #[test]
    fn cli_accepts_both_flag_forms() {
        let short = CliArgs::parse_from(["k-WL", "-c", "alt"]);
        assert_eq!(short.config, "alt");

        let long = CliArgs::parse_from(["k-WL", "--config", "alt.toml"]);
        assert_eq!(long.config, "alt.toml");
    }

    #[test]
    fn bootstrap_with_an_unresolvable_path_never_starts_the_ui() {
        let dir = tempfile::tempdir().unwrap();
        let mut launched = false;

        let error = bootstrap(dir.path(), "does-not-exist", |_, _| {
            launched = true;
            Ok(())
        })
        .unwrap_err();

        assert!(!launched);
        assert!(matches!(error, AppError::ConfigNotFound { .. }));
        assert!(error.to_string().contains("n'a pas été trouvé"));
    }

    #[test]
    fn bootstrap_with_an_empty_default_config_starts_the_ui_once() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("config")).unwrap();
        fs::write(dir.path().join("config/default.toml"), "").unwrap();

        let mut launches = 0;
        bootstrap(dir.path(), "default", |config, _| {
            launches += 1;
            assert_eq!(config, AppConfig::default());
            Ok(())
        })
        .unwrap();

        assert_eq!(launches, 1);
    }

    #[test]
    fn failure_message_splits_the_two_categories() {
        let not_found = AppError::ConfigNotFound {
            raw: "absent".to_string(),
            attempted: config_paths::candidate_paths("absent").to_vec(),
        };
        let message = failure_message(&not_found);
        assert!(message.starts_with("Erreur de configuration :"));
        assert!(message.contains("n'a pas été trouvé"));

        let io = AppError::Io(std::io::Error::other("disque plein"));
        assert!(failure_message(&io).starts_with("Une erreur inattendue s'est produite :"));
    }
}
