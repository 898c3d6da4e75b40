use std::time::Duration;

use tauri::{Manager, RunEvent};
use thiserror::Error;

use crate::app_config::AppConfig;
use crate::{bridge_commands, logging};
use crate::{FULLSCREEN_AT_STARTUP, MAIN_WINDOW_LABEL, SHUTDOWN_GRACE};

/// Fixed launch parameters handed to the UI host. The asset root (`web/`)
/// and entry document (`index.html`) are fixed in `tauri.conf.json`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct UiHostOptions {
    pub(crate) fullscreen: bool,
    pub(crate) shutdown_grace: Duration,
}

impl Default for UiHostOptions {
    fn default() -> Self {
        Self {
            fullscreen: FULLSCREEN_AT_STARTUP,
            shutdown_grace: SHUTDOWN_GRACE,
        }
    }
}

/// Failures raised while bringing the webview runtime up. Deliberately not
/// convertible into [`crate::app_errors::AppError`]: the shell absorbs these
/// instead of letting them reach the entry point.
#[derive(Debug, Error)]
pub(crate) enum UiHostError {
    #[error("échec du démarrage du runtime UI : {0}")]
    Runtime(#[from] tauri::Error),

    #[error("fenêtre principale '{0}' introuvable au démarrage")]
    MainWindowMissing(&'static str),
}

/// Builds the webview runtime pointed at the local assets, registers the
/// bridge command table, and runs it to completion. Does not return until
/// the UI is closed.
pub(crate) fn start_ui_host(config: AppConfig, options: UiHostOptions) -> Result<(), UiHostError> {
    let shutdown_grace = options.shutdown_grace;

    let app = tauri::Builder::default()
        .manage(config)
        .invoke_handler(tauri::generate_handler![
            bridge_commands::desktop_bridge_is_desktop_runtime,
            bridge_commands::desktop_bridge_shell_version,
            bridge_commands::desktop_bridge_runtime_config,
            bridge_commands::desktop_bridge_log_message,
        ])
        .build(tauri::generate_context!())?;

    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return Err(UiHostError::MainWindowMissing(MAIN_WINDOW_LABEL));
    };
    if options.fullscreen {
        window.set_fullscreen(true)?;
    }

    app.run(move |_app_handle, event| match event {
        RunEvent::ExitRequested { .. } | RunEvent::Exit => {
            logging::shutdown_flush(shutdown_grace);
        }
        _ => {}
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_carry_the_fixed_launch_parameters() {
        let options = UiHostOptions::default();
        assert!(options.fullscreen);
        assert_eq!(options.shutdown_grace, Duration::from_secs(3));
    }

    #[test]
    fn missing_window_error_names_the_label() {
        let error = UiHostError::MainWindowMissing(MAIN_WINDOW_LABEL);
        assert_eq!(
            error.to_string(),
            "fenêtre principale 'main' introuvable au démarrage"
        );
    }
}
