use tauri::State;

use crate::app_config::AppConfig;
use crate::logging;

// Every command below is registered by name in the `generate_handler!` table
// in `ui_host.rs`; the `desktop_bridge_` prefix marks the surface callable
// from the page.

/// Lets the page detect that it runs inside the desktop shell rather than a
/// plain browser tab.
#[tauri::command]
pub(crate) fn desktop_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn desktop_bridge_shell_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the configuration record the shell was started with.
#[tauri::command]
pub(crate) fn desktop_bridge_runtime_config(config: State<'_, AppConfig>) -> AppConfig {
    config.inner().clone()
}

/// Forwards a page-side message into the shell log sink.
#[tauri::command]
pub(crate) fn desktop_bridge_log_message(level: String, message: String) {
    let message = format!("[web] {message}");
    if level.eq_ignore_ascii_case("error") {
        logging::log_error(&message);
    } else {
        logging::log_info(&message);
    }
}
