use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds that can reach the entry point.
///
/// UI host startup failures are absorbed inside
/// [`crate::app_shell::AppShell::run`] and deliberately have no variant here.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{}", config_not_found_message(.raw, .attempted))]
    ConfigNotFound {
        raw: String,
        attempted: Vec<PathBuf>,
    },

    #[error("le fichier de configuration '{}' est invalide : {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn config_not_found_message(raw: &str, attempted: &[PathBuf]) -> String {
    let mut message = format!(
        "Le fichier de configuration '{raw}' n'a pas été trouvé.\n\
         Les chemins suivants ont été essayés :\n"
    );
    for path in attempted {
        message.push_str(&format!("- {}\n", path.display()));
    }
    message.push_str("\nVeuillez vérifier que le fichier existe.");
    message
}
