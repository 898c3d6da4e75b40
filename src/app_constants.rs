use std::time::Duration;

pub(crate) const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub(crate) const CONFIG_DIR: &str = "config";
pub(crate) const CONFIG_EXTENSION: &str = "toml";

pub(crate) const LOG_FILE_PATH: &str = "log/log.log";
pub(crate) const LOG_DATE_FORMAT: &str = "%d-%b-%y %H:%M:%S";
pub(crate) const LOG_TARGET: &str = "kwl_desktop";

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const FULLSCREEN_AT_STARTUP: bool = true;
pub(crate) const SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

pub(crate) const CONSOLE_ERROR_NOTICE: &str =
    "Erreur: plus d'informations dans le fichier de log.";
