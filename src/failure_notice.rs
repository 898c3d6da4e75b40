use crate::logging;
use crate::CONSOLE_ERROR_NOTICE;

/// Error-routing sink of last resort: one record to the log file, one fixed
/// localized line to the console. Termination stays with the caller.
pub(crate) fn report_failure(message: &str) {
    logging::log_error(message);
    println!("{CONSOLE_ERROR_NOTICE}");
}
