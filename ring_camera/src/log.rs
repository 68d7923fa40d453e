//! Logging for the ring camera
//!
//! The controller reports through a replaceable `Logger`:
//! - Hosts install their own sink with `Rig::set_logger`
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - ERROR entries carry file:line of the call site

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for camera log entries
///
/// # Example
///
/// ```no_run
/// use ring_camera::ringcam::log::{Logger, LogEntry};
///
/// struct HudLogger;
///
/// impl Logger for HudLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Push to an in-game console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Handle one entry
    fn log(&self, entry: &LogEntry);
}

/// One log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Creation time
    pub timestamp: SystemTime,

    /// Emitting component (e.g. "ringcam::Controller", "ringcam::Occlusion")
    pub source: String,

    /// Message text
    pub message: String,

    /// Call-site file (ERROR entries only)
    pub file: Option<&'static str>,

    /// Call-site line (ERROR entries only)
    pub line: Option<u32>,
}

/// Log severity levels, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame chatter (occlusion hits, skipped ticks)
    Trace,

    /// Regime changes and other development details
    Debug,

    /// Lifecycle events (controller built)
    Info,

    /// Soft failures the controller recovered from
    Warn,

    /// Rejected configuration
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by `DefaultLogger`
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Console logger with colored severities
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let label = entry.severity.label();
        let severity_str = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        let source = entry.source.bright_blue();

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            ),
            _ => println!(
                "[{}] [{}] [{}] {}",
                timestamp, severity_str, source, entry.message
            ),
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// ```ignore
/// rig_trace!("ringcam::Occlusion", "hit at {:.2}", distance);
/// ```
#[macro_export]
macro_rules! rig_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::ringcam::Rig::log(
            $crate::ringcam::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! rig_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::ringcam::Rig::log(
            $crate::ringcam::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! rig_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::ringcam::Rig::log(
            $crate::ringcam::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! rig_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::ringcam::Rig::log(
            $crate::ringcam::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! rig_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::ringcam::Rig::log_detailed(
            $crate::ringcam::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR and build the matching `Error` variant
///
/// ```ignore
/// let err = rig_err!("ringcam::Config", InvalidConfig, "cap {} < start {}", cap, start);
/// ```
#[macro_export]
macro_rules! rig_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::ringcam::Rig::log_detailed(
            $crate::ringcam::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::ringcam::Error::$variant(message)
    }};
}

/// Log an ERROR and return the matching `Error` variant from the current function
#[macro_export]
macro_rules! rig_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::rig_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
