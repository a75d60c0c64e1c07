//! Integration tests for the spatial logging system
//!
//! These tests verify what the builders and constructors report through
//! the global logger.
//!
//! Run with: cargo test --test logging_integration_tests

use galaxy_3d_spatial::galaxy3d::log::{self, Logger, LogEntry, LogSeverity};
use galaxy_3d_spatial::galaxy3d::{
    Aabb, BvhBuilder, Camera, Error, IdAllocator, IndexBuilder, Item, Mesh, OctreeBuilder,
};
use galaxy_3d_spatial::glam::Vec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install(min_severity: LogSeverity) -> Arc<Mutex<Vec<LogEntry>>> {
    let (test_logger, entries) = TestLogger::new();
    log::set_logger(test_logger);
    log::set_min_severity(min_severity);
    entries
}

fn restore() {
    log::set_min_severity(LogSeverity::Info);
    log::reset_logger();
}

fn world() -> Aabb {
    Aabb::new(Vec3::splat(-7.5), Vec3::splat(7.5))
}

fn scattered_items(ids: &mut IdAllocator) -> Vec<Item> {
    [
        Vec3::new(-4.0, -4.0, -4.0),
        Vec3::new(4.0, -4.0, -4.0),
        Vec3::new(-4.0, 4.0, 4.0),
        Vec3::new(4.0, 4.0, 4.0),
    ]
    .iter()
    .map(|&center| Item::from_center_size(ids, center, Vec3::ONE))
    .collect()
}

// ============================================================================
// BUILD REPORTS
// ============================================================================

#[test]
#[serial]
fn test_integration_build_summary_at_debug() {
    let entries = install(LogSeverity::Debug);

    let mut ids = IdAllocator::new();
    let items = scattered_items(&mut ids);
    let index = OctreeBuilder::new(3).build(&items, world());

    let captured = entries.lock().unwrap().clone();
    restore();

    let summary = captured
        .iter()
        .find(|e| e.source == "galaxy3d::Octree" && e.severity == LogSeverity::Debug)
        .expect("octree build should report a summary");
    assert!(summary.message.contains(&format!("{} nodes", index.node_count())));
    assert!(summary.file.is_none());
}

#[test]
#[serial]
fn test_integration_build_summary_filtered_at_info() {
    let entries = install(LogSeverity::Info);

    let mut ids = IdAllocator::new();
    let items = scattered_items(&mut ids);
    OctreeBuilder::new(3).build(&items, world());
    BvhBuilder::new(2).build(&items, world());

    let captured = entries.lock().unwrap().clone();
    restore();

    assert!(captured.is_empty(), "nothing at or above Info expected, got {:?}", captured);
}

#[test]
#[serial]
fn test_integration_bvh_summary_source() {
    let entries = install(LogSeverity::Debug);

    let mut ids = IdAllocator::new();
    let items = scattered_items(&mut ids);
    BvhBuilder::new(1).build(&items, world());

    let captured = entries.lock().unwrap().clone();
    restore();

    assert!(captured.iter().any(|e| e.source == "galaxy3d::Bvh"));
}

#[test]
#[serial]
fn test_integration_outside_world_box_warns() {
    let entries = install(LogSeverity::Warn);

    let mut ids = IdAllocator::new();
    let mut items = scattered_items(&mut ids);
    items.push(Item::from_center_size(&mut ids, Vec3::splat(50.0), Vec3::ONE));
    OctreeBuilder::new(3).build(&items, world());

    let captured = entries.lock().unwrap().clone();
    restore();

    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Warn);
    assert!(captured[0].message.starts_with("1 of 5 primitives"));
}

#[test]
#[serial]
fn test_integration_no_progress_traced() {
    let entries = install(LogSeverity::Trace);

    let mut ids = IdAllocator::new();
    let items: Vec<Item> = (0..3)
        .map(|i| Item::from_center_size(&mut ids, Vec3::new(0.0, 0.0, 2.0), Vec3::splat(1.0 + i as f32)))
        .collect();
    let index = OctreeBuilder::new(3).build(&items, world());

    let captured = entries.lock().unwrap().clone();
    restore();

    assert_eq!(index.node_count(), 1);
    assert!(captured
        .iter()
        .any(|e| e.severity == LogSeverity::Trace && e.message.contains("no progress")));
}

// ============================================================================
// REJECTED INPUT
// ============================================================================

#[test]
#[serial]
fn test_integration_invalid_mesh_logs_error_with_location() {
    let entries = install(LogSeverity::Info);

    let result = Mesh::new(vec![Vec3::ZERO; 3], vec![0, 1, 9]);

    let captured = entries.lock().unwrap().clone();
    restore();

    assert!(matches!(result, Err(Error::InvalidMesh(_))));
    assert_eq!(captured.len(), 1);
    let entry = &captured[0];
    assert_eq!(entry.severity, LogSeverity::Error);
    assert_eq!(entry.source, "galaxy3d::Mesh");
    assert!(entry.file.is_some());
    assert!(entry.line.is_some());
}

#[test]
#[serial]
fn test_integration_invalid_camera_logs_error() {
    let entries = install(LogSeverity::Info);

    let result = Camera::new(Vec3::Z, Vec3::ZERO, Vec3::Y, 1.0, 1.0, 5.0, 1.0);

    let captured = entries.lock().unwrap().clone();
    restore();

    assert!(matches!(result, Err(Error::InvalidCamera(_))));
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].source, "galaxy3d::Camera");
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let entries = install(LogSeverity::Info);
    let _ = Mesh::new(Vec::new(), vec![0]);
    assert_eq!(entries.lock().unwrap().len(), 1);

    restore();

    // Goes to the default logger, not captured
    let _ = Mesh::new(Vec::new(), vec![0]);
    assert_eq!(entries.lock().unwrap().len(), 1);
}
