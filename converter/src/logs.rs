//! Progress log for conversion runs.
//!
//! Log lines go to standard error so that standard output only carries
//! the messages a caller may want to script against.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth for sub-steps
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Render the entry as a single line.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "  ",
            LogLevel::Success => "  ✓",
            LogLevel::Warning => "  ⚠️",
            LogLevel::Error => "  ❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }
}

/// Global logger
pub static LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// Writes log entries to standard error unless muted.
pub struct Logger {
    quiet: AtomicBool,
}

impl Logger {
    pub fn new() -> Self {
        Self { quiet: AtomicBool::new(false) }
    }

    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet.load(Ordering::Relaxed)
    }

    /// Errors are always written; quiet mode mutes everything else.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level == LogLevel::Error || !self.is_quiet()
    }

    pub fn log(&self, entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }
        eprintln!("{}", entry.render());
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    LOGGER.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    LOGGER.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    LOGGER.log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    LOGGER.log(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.log(LogEntry::info(msg).with_indent(indent));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_levels() {
        assert_eq!(LogEntry::info("reading").render(), "   reading");
        assert_eq!(LogEntry::success("done").render(), "  ✓ done");
        assert!(LogEntry::error("boom").render().contains("❌ boom"));
    }

    #[test]
    fn test_render_indent() {
        let entry = LogEntry::info("nested").with_indent(1);
        assert_eq!(entry.render(), "      nested");
    }

    #[test]
    fn test_quiet_toggle() {
        let logger = Logger::new();
        assert!(!logger.is_quiet());
        logger.set_quiet(true);
        assert!(logger.is_quiet());
        logger.log(LogEntry::warning("muted"));
    }

    #[test]
    fn test_quiet_keeps_errors() {
        let logger = Logger::new();
        assert!(logger.enabled(LogLevel::Info));
        logger.set_quiet(true);
        assert!(!logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Warning));
        assert!(logger.enabled(LogLevel::Error));
    }
}
