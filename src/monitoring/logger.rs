//! Frontend logging for Dioxus
//!
//! Logs to the browser console with a structured format. Off wasm the same
//! entries go through `tracing`, so native builds and tests never touch
//! browser APIs.

use serde_json::json;
use std::fmt;
use std::sync::Once;

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct Logger;

impl Logger {
    /// Initialize logging (call once at app startup)
    pub fn init() {
        INIT.call_once(|| {
            Self::log_info("Frontend monitoring initialized");
        });
    }

    /// Log an info message
    pub fn log_info(msg: &str) {
        Self::log_with_level(Level::Info, msg);
    }

    /// Log a warning message
    pub fn warn(msg: &str) {
        Self::log_with_level(Level::Warn, msg);
    }

    /// Log an error message
    pub fn error(msg: &str) {
        Self::log_with_level(Level::Error, msg);
    }

    /// Log a debug message
    pub fn debug(msg: &str) {
        Self::log_with_level(Level::Debug, msg);
    }

    /// Generic log method
    pub fn log(msg: &str) {
        Self::log_info(msg);
    }

    /// Structured record for one log line
    pub fn entry(level: Level, timestamp: &str, msg: &str) -> serde_json::Value {
        json!({
            "timestamp": timestamp,
            "level": level.as_str(),
            "message": msg,
        })
    }

    /// Console line: `[timestamp] LEVEL - message`
    pub fn format_line(level: Level, timestamp: &str, msg: &str) -> String {
        format!("[{}] {} - {}", timestamp, level, msg)
    }

    /// Log with level and timestamp
    fn log_with_level(level: Level, msg: &str) {
        let timestamp = Self::timestamp();
        let entry = Self::entry(level, &timestamp, msg);
        let line = Self::format_line(level, &timestamp, msg);
        Self::emit(level, &line, &entry);
    }

    #[cfg(target_arch = "wasm32")]
    fn emit(level: Level, line: &str, _entry: &serde_json::Value) {
        match level {
            Level::Error => web_sys::console::error_1(&line.into()),
            Level::Warn => web_sys::console::warn_1(&line.into()),
            Level::Debug => web_sys::console::debug_1(&line.into()),
            Level::Info => web_sys::console::log_1(&line.into()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn emit(level: Level, line: &str, entry: &serde_json::Value) {
        match level {
            Level::Error => tracing::error!(entry = %entry, "{}", line),
            Level::Warn => tracing::warn!(entry = %entry, "{}", line),
            Level::Debug => tracing::debug!(entry = %entry, "{}", line),
            Level::Info => tracing::info!(entry = %entry, "{}", line),
        }
    }

    /// Get current timestamp
    fn timestamp() -> String {
        chrono::Local::now().format("%H:%M:%S%.3f").to_string()
    }
}
