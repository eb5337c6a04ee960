//! Diagnostic logging for the address book.
//!
//! Logs go to stderr so they never mix with the menu on stdout. The default
//! level is `warn`, which keeps an ordinary session quiet apart from real problems.

use flexi_logger::{Logger, LoggerHandle};
use log::info;

use crate::errors::AppError;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Starts the stderr logger with a `log`-style filter such as `info` or
/// `contact_ease=debug`.
///
/// The returned handle must be kept alive for as long as logging is wanted.
pub fn init_logging(level: &str) -> Result<LoggerHandle, AppError> {
    let level = normalize_level(level);

    let handle = Logger::try_with_str(&level)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;

    info!(
        "event=app_start level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

fn normalize_level(level: &str) -> String {
    let level = level.trim().to_ascii_lowercase();
    if level.is_empty() {
        DEFAULT_LOG_LEVEL.to_string()
    } else if level == "warning" {
        "warn".to_string()
    } else {
        level
    }
}
