use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::Local;
use once_cell::sync::Lazy;

use crate::{LOG_DATE_FORMAT, LOG_FILE_PATH, LOG_TARGET};

/// Process-wide log sink. `None` until [`init_log_file`] has run; records
/// emitted before that fall back to stderr.
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

pub(crate) fn init_log_file() -> Result<PathBuf, std::io::Error> {
    init_log_file_at(Path::new(LOG_FILE_PATH))
}

/// Opens `path` in overwrite mode and installs it as the process log sink,
/// creating the parent directory if missing. Called once per run, before any
/// other component.
pub(crate) fn init_log_file_at(path: &Path) -> Result<PathBuf, std::io::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = Some(file);
    }
    Ok(path.to_path_buf())
}

pub(crate) fn log_info(message: &str) {
    write_record("INFO", message);
}

pub(crate) fn log_error(message: &str) {
    write_record("ERROR", message);
}

/// One timestamped record, mirroring the fixed sink format:
/// `07-Aug-26 14:03:12 - kwl_desktop - ERROR - message`.
pub(crate) fn format_record(level: &str, message: &str) -> String {
    format!(
        "{} - {} - {} - {}",
        Local::now().format(LOG_DATE_FORMAT),
        LOG_TARGET,
        level,
        message
    )
}

fn write_record(level: &str, message: &str) {
    let line = format_record(level, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(file) = guard.as_mut() {
            if writeln!(file, "{line}").is_ok() {
                let _ = file.flush();
                return;
            }
        }
    }

    eprintln!("{line}");
}

/// Flushes and releases the sink when the UI host reports exit, giving the
/// lock at most `grace` to become available.
pub(crate) fn shutdown_flush(grace: Duration) {
    let deadline = Instant::now() + grace;
    loop {
        if let Ok(mut guard) = LOG_FILE.try_lock() {
            if let Some(mut file) = guard.take() {
                let _ = file.flush();
            }
            return;
        }
        if Instant::now() >= deadline {
            return;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
}
