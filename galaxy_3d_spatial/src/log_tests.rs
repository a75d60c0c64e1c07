//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the
//! severity filter of the global sink.

use crate::log::{
    self, DefaultLogger, LogEntry, LogSeverity, Logger,
};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

/// Captures entries so the tests can inspect what reached the sink
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    log::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

/// Entries emitted by this file only (other tests may log concurrently)
fn own_entries(entries: &Arc<Mutex<Vec<LogEntry>>>) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == SOURCE)
        .cloned()
        .collect()
}

const SOURCE: &str = "galaxy3d::log_tests";

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_round_trips_through_discriminant() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(LogSeverity::from_u8(severity as u8), severity);
    }
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    let timestamp = SystemTime::now();

    for (severity, file, line) in [
        (LogSeverity::Trace, None, None),
        (LogSeverity::Debug, None, None),
        (LogSeverity::Info, None, None),
        (LogSeverity::Warn, None, None),
        (LogSeverity::Error, Some("octree.rs"), Some(42)),
    ] {
        // Just verify it doesn't panic
        logger.log(&LogEntry {
            severity,
            timestamp,
            source: "galaxy3d::test".to_string(),
            message: format!("{:?} message", severity),
            file,
            line,
        });
    }
}

// ============================================================================
// GLOBAL SINK
// ============================================================================

#[test]
#[serial]
fn test_min_severity_filters_messages() {
    let entries = install_capture();
    log::set_min_severity(LogSeverity::Warn);

    crate::spatial_debug!(SOURCE, "filtered {}", 1);
    crate::spatial_info!(SOURCE, "filtered {}", 2);
    crate::spatial_warn!(SOURCE, "kept {}", 3);

    let captured = own_entries(&entries);
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Warn);
    assert_eq!(captured[0].message, "kept 3");
    assert!(captured[0].file.is_none());

    log::set_min_severity(LogSeverity::Info);
    log::reset_logger();
}

#[test]
#[serial]
fn test_error_macro_records_location() {
    let entries = install_capture();

    crate::spatial_error!(SOURCE, "broken {}", "mesh");

    let captured = own_entries(&entries);
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "broken mesh");
    assert!(captured[0].file.is_some());
    assert!(captured[0].line.is_some());

    log::reset_logger();
}

#[test]
#[serial]
fn test_min_severity_accessor() {
    log::set_min_severity(LogSeverity::Trace);
    assert_eq!(log::min_severity(), LogSeverity::Trace);
    assert!(log::is_enabled(LogSeverity::Trace));

    log::set_min_severity(LogSeverity::Error);
    assert!(!log::is_enabled(LogSeverity::Warn));

    log::set_min_severity(LogSeverity::Info);
}
