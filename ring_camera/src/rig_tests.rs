//! Unit tests for the Rig logging hub
//!
//! IMPORTANT: the logger is a process-wide OnceLock shared across all tests.
//! Every test that swaps it is marked #[serial].

use crate::ringcam::{Rig, Error};
use crate::ringcam::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Rig::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

/// Entries emitted by these tests only; other unit tests may log concurrently
fn own_entries(entries: &Arc<Mutex<Vec<LogEntry>>>) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == "ringcam::Test")
        .cloned()
        .collect()
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOGGER SWAP
// ============================================================================

#[test]
#[serial]
fn test_set_logger_captures_entries() {
    let entries = install_capture();

    Rig::log(LogSeverity::Info, "ringcam::Test", "hello".to_string());
    Rig::log_detailed(LogSeverity::Error, "ringcam::Test", "boom".to_string(), "x.rs", 3);

    {
        let captured = own_entries(&entries);
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].message, "hello");
        assert!(captured[0].file.is_none());
        assert_eq!(captured[1].severity, LogSeverity::Error);
        assert_eq!(captured[1].file, Some("x.rs"));
        assert_eq!(captured[1].line, Some(3));
    }

    Rig::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_stops_capture() {
    let entries = install_capture();
    Rig::reset_logger();

    Rig::log(LogSeverity::Debug, "ringcam::Test", "to console".to_string());

    assert!(own_entries(&entries).is_empty());
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
#[serial]
fn test_level_macros_route_through_rig() {
    let entries = install_capture();

    crate::rig_trace!("ringcam::Test", "t{}", 1);
    crate::rig_debug!("ringcam::Test", "d{}", 2);
    crate::rig_info!("ringcam::Test", "i{}", 3);
    crate::rig_warn!("ringcam::Test", "w{}", 4);
    crate::rig_error!("ringcam::Test", "e{}", 5);

    {
        let captured = own_entries(&entries);
        let severities: Vec<LogSeverity> = captured.iter().map(|e| e.severity).collect();
        assert_eq!(
            severities,
            vec![
                LogSeverity::Trace,
                LogSeverity::Debug,
                LogSeverity::Info,
                LogSeverity::Warn,
                LogSeverity::Error,
            ]
        );
        assert_eq!(captured[4].message, "e5");
        assert!(captured[4].file.is_some());
    }

    Rig::reset_logger();
}

#[test]
#[serial]
fn test_rig_err_logs_and_builds_variant() {
    let entries = install_capture();

    let err = crate::rig_err!("ringcam::Test", DegenerateRing, "radius {}", -1);
    match err {
        Error::DegenerateRing(msg) => assert_eq!(msg, "radius -1"),
        other => panic!("unexpected variant: {:?}", other),
    }

    {
        let captured = own_entries(&entries);
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert_eq!(captured[0].message, "radius -1");
    }

    Rig::reset_logger();
}

#[test]
#[serial]
fn test_rig_bail_returns_early() {
    let _entries = install_capture();

    fn check(value: f32) -> crate::ringcam::Result<f32> {
        if value < 0.0 {
            crate::rig_bail!("ringcam::Test", InvalidConfig, "negative value {}", value);
        }
        Ok(value)
    }

    assert!(check(1.0).is_ok());
    assert!(matches!(check(-2.0), Err(Error::InvalidConfig(_))));

    Rig::reset_logger();
}
