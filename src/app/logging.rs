//! Diagnostic log lines: `LogLevel`, `LogLine`, and `mask_key`.
//!
//! Diagnostics go to stderr so stdout carries nothing but the conversation.

use std::fmt;
use std::io::{self, IsTerminal, Write};

use chrono::Local;
use crossterm::style::{Color, Stylize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name as accepted in `QUARTET_LOG`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    fn color(self) -> Color {
        match self {
            LogLevel::Debug => Color::DarkGrey,
            LogLevel::Info => Color::Cyan,
            LogLevel::Warn => Color::Yellow,
            LogLevel::Error => Color::Red,
        }
    }
}

/// A single timestamped diagnostic.
#[derive(Clone, Debug)]
pub struct LogLine {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

impl LogLine {
    pub fn now(level: LogLevel, message: String) -> Self {
        LogLine {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            level,
            message,
        }
    }
}

impl LogLine {
    /// Render the line, colouring the level only when `styled` is set.
    pub fn render(&self, styled: bool) -> String {
        let level = format!("{:<5}", self.level.label());
        if styled {
            format!("{} {} {}", self.timestamp, level.with(self.level.color()), self.message)
        } else {
            format!("{} {} {}", self.timestamp, level, self.message)
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// Stderr logger with a minimum level. Colours only when stderr is a terminal.
#[derive(Clone, Debug)]
pub struct Logger {
    threshold: LogLevel,
    styled: bool,
}

impl Logger {
    pub fn new(threshold: LogLevel) -> Self {
        Logger {
            threshold,
            styled: io::stderr().is_terminal(),
        }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.threshold
    }

    pub fn log(&self, level: LogLevel, message: String) {
        if !self.enabled(level) {
            return;
        }
        let line = LogLine::now(level, message).render(self.styled);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }

    /// Append a message with a source location suffix (debug-logs builds only).
    #[cfg(feature = "debug-logs")]
    pub fn log_with_src(&self, level: LogLevel, message: String, src: &str) {
        let tagged = match level {
            LogLevel::Warn | LogLevel::Error => format!("{message}  [{src}]"),
            _ => message,
        };
        self.log(level, tagged);
    }
}

/// Log a `Warn`/`Error` message, attaching `[file:line]` in debug-logs builds.
///
/// In release (no `debug-logs` feature) this behaves like `logger.log()`.
///
/// ```ignore
/// log_src!(self.logger, LogLevel::Warn, format!("something broke: {err:#}"));
/// ```
macro_rules! log_src {
    ($logger:expr, $level:expr, $msg:expr) => {{
        #[cfg(feature = "debug-logs")]
        {
            let loc = format!("{}:{}", file!(), line!());
            $logger.log_with_src($level, $msg, &loc);
        }
        #[cfg(not(feature = "debug-logs"))]
        {
            $logger.log($level, $msg);
        }
    }};
}
pub(crate) use log_src;

/// Show only the first and last four characters of a secret.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mask_key_hides_the_middle() {
        assert_eq!(mask_key("AIzaSyD-1234567890-abcd"), "AIza…abcd");
        assert_eq!(mask_key("short"), "*****");
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        let logger = Logger::new(LogLevel::Warn);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    fn plain_render_has_no_escape_codes() {
        let line = LogLine {
            timestamp: "12:00:00".to_string(),
            level: LogLevel::Error,
            message: "provider down".to_string(),
        };
        assert_eq!(line.render(false), "12:00:00 ERROR provider down");
        assert_eq!(line.to_string(), "12:00:00 ERROR provider down");
        assert!(line.render(true).contains('\u{1b}'));
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(LogLevel::parse(" WARNING "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
    }
}
