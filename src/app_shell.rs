use std::path::Path;

use crate::app_config::{load_config, AppConfig};
use crate::app_errors::AppError;
use crate::ui_host::{UiHostError, UiHostOptions};
use crate::{failure_notice, logging};

/// Owns the configuration for the lifetime of the UI.
///
/// The shell moves through configured -> running -> terminated exactly once:
/// [`AppShell::run`] consumes it, so there is no restart path.
pub(crate) struct AppShell {
    config: AppConfig,
}

impl AppShell {
    pub(crate) fn construct(config_path: &Path) -> Result<Self, AppError> {
        let config = load_config(config_path)?;
        Ok(Self { config })
    }

    /// Starts the UI host through `launcher` and blocks until it exits.
    /// A launch failure is absorbed here: written through the log sink and
    /// the failure notice, never surfaced to the caller. Production passes
    /// [`crate::ui_host::start_ui_host`]; tests inject a fake.
    pub(crate) fn run<F>(self, launcher: F)
    where
        F: FnOnce(AppConfig, UiHostOptions) -> Result<(), UiHostError>,
    {
        logging::log_info("starting UI host");
        if let Err(error) = launcher(self.config, UiHostOptions::default()) {
            let message = format!("Erreur lors de l'initialisation de l'application: {error}");
            logging::log_error(&message);
            failure_notice::report_failure(&message);
        }
    }
}
