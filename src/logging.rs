//! Logging module for RosterBox
//!
//! Optional file logging for debugging suggestion traffic: which queries
//! went out, which responses were applied, and which were dropped as stale.
//! Disabled unless a log path is supplied at startup.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

/// Global logger instance
static LOGGER: OnceLock<Mutex<RosterLogger>> = OnceLock::new();

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Main logger struct
pub struct RosterLogger {
    file: Option<File>,
    min_level: LogLevel,
}

impl RosterLogger {
    fn new(path: &Path) -> Self {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true) // Start fresh each run
            .open(path)
            .ok();

        if file.is_some() {
            eprintln!("[rosterbox] Logging to: {}", path.display());
        }

        Self {
            file,
            min_level: LogLevel::Debug,
        }
    }

    /// Write a log entry
    fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        let entry = format!(
            "[{:013}] [{:5}] [{}] {}\n",
            timestamp, level, module, message
        );

        if let Some(ref mut file) = self.file {
            let _ = file.write_all(entry.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Initialize the global logger with a log file path
pub fn init(path: &Path) {
    let _ = LOGGER.set(Mutex::new(RosterLogger::new(path)));
}

fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut l) = logger.lock() {
            l.log(level, module, message);
        }
    }
}

/// Log debug message
pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

/// Log info message
pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

/// Log warning message
pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

/// Log error message
pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

// ============================================================================
// Specialized logging functions for suggestion traffic
// ============================================================================

/// Log an outgoing suggestion query
pub fn log_query_issued(field: &str, seq: u64, query: &str) {
    let msg = format!("Query #{}: field='{}', query='{}'", seq, field, query);
    debug("FETCH", &msg);
}

/// Log an applied suggestion response
pub fn log_response_applied(field: &str, seq: u64, count: usize) {
    let msg = format!(
        "Response #{} applied: field='{}', {} suggestions",
        seq, field, count
    );
    debug("FETCH", &msg);
}

/// Log a response dropped because a newer query superseded it
pub fn log_stale_dropped(field: &str, seq: u64) {
    let msg = format!("Response #{} dropped as stale: field='{}'", seq, field);
    info("FETCH", &msg);
}

/// Log a failed suggestion fetch
pub fn log_fetch_error(field: &str, seq: u64, detail: &str) {
    let msg = format!("Fetch #{} failed: field='{}', {}", seq, field, detail);
    error("FETCH", &msg);
}

/// Flush the log file
pub fn flush() {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut l) = logger.lock() {
            if let Some(ref mut file) = l.file {
                let _ = file.flush();
            }
        }
    }
}
