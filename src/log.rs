//! Simple file-based logging
//!
//! Lines go to `elevate-tray.log` next to the executable. Until [`init`] has
//! opened the file every call is a no-op, so library code and tests can log
//! freely.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use crate::shared::config::exe_dir;

/// Name of the log file created beside the executable
pub const LOG_FILE_NAME: &str = "elevate-tray.log";

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Severity tag written in front of each line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Level::Info => "INFO ",
            Level::Warn => "WARN ",
            Level::Error => "ERROR",
        };
        f.write_str(tag)
    }
}

/// Initialize logging to a file next to the executable.
///
/// Passing `enabled = false` leaves logging switched off.
pub fn init(enabled: bool) {
    if !enabled {
        return;
    }

    let log_path = exe_dir().join(LOG_FILE_NAME);

    if let Ok(file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
    {
        if let Ok(mut guard) = LOG_FILE.lock() {
            *guard = Some(file);
        }
    }

    write(Level::Info, "=== Elevate Tray Log Started ===");
}

/// Close the log file; later calls become no-ops again
pub fn shutdown() {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = file.flush();
        }
        *guard = None;
    }
}

/// Format one log line
fn format_line(level: Level, msg: &str) -> String {
    let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{}] {} {}", ts, level, msg)
}

/// Write a message to the log file
pub fn write(level: Level, msg: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let _ = writeln!(file, "{}", format_line(level, msg));
            let _ = file.flush();
        }
    }
}

/// Log a formatted info message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::write($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Log a formatted warning
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::log::write($crate::log::Level::Warn, &format!($($arg)*))
    };
}

/// Log a formatted error
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::log::write($crate::log::Level::Error, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_carries_level_and_message() {
        let line = format_line(Level::Warn, "icon missing");
        assert!(line.starts_with('['));
        assert!(line.contains("] WARN  icon missing"));
    }

    #[test]
    fn test_write_before_init_is_noop() {
        // No file is open in unit tests; must not panic
        write(Level::Error, "nothing happens");
        log!("formatted {}", 42);
        log_warn!("still {}", "quiet");
    }
}
