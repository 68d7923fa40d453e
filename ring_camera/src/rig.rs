/// Rig - process-wide logging hub for ring cameras
///
/// Controllers are plain owned values (one per camera, no registry), so the
/// only shared state is the log sink. It lives in a `OnceLock<RwLock<..>>`
/// and defaults to `DefaultLogger`.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Logging entry point used by the `rig_*` macros
///
/// # Example
///
/// ```no_run
/// use ring_camera::ringcam::{Rig, log::{Logger, LogEntry}};
///
/// struct Quiet;
/// impl Logger for Quiet {
///     fn log(&self, _entry: &LogEntry) {}
/// }
///
/// Rig::set_logger(Quiet);
/// ```
pub struct Rig;

impl Rig {
    /// Replace the active logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Restore `DefaultLogger`
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Emit an entry without call-site information
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Emit an entry carrying file:line (used for ERROR entries)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        // A poisoned lock drops the entry; logging must never take the frame down
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "rig_tests.rs"]
mod tests;
