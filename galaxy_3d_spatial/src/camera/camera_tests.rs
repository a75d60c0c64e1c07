use glam::{Mat4, Vec3, Vec4};
use crate::error::Error;
use super::*;

fn default_camera() -> Camera {
    Camera::new(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
        std::f32::consts::FRAC_PI_4,
        16.0 / 9.0,
        0.1,
        100.0,
    )
    .unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_new_stores_parameters() {
    let camera = default_camera();
    assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(camera.target(), Vec3::ZERO);
    assert_eq!(camera.up(), Vec3::Y);
    assert_eq!(camera.near(), 0.1);
    assert_eq!(camera.far(), 100.0);
    assert_eq!(camera.forward(), Vec3::NEG_Z);
}

#[test]
fn test_camera_rejects_bad_clip_range() {
    let result = Camera::new(Vec3::Z, Vec3::ZERO, Vec3::Y, 1.0, 1.0, 10.0, 1.0);
    assert!(matches!(result, Err(Error::InvalidCamera(_))));

    let result = Camera::new(Vec3::Z, Vec3::ZERO, Vec3::Y, 1.0, 1.0, 0.0, 1.0);
    assert!(matches!(result, Err(Error::InvalidCamera(_))));
}

#[test]
fn test_camera_rejects_bad_fov_and_aspect() {
    assert!(Camera::new(Vec3::Z, Vec3::ZERO, Vec3::Y, 0.0, 1.0, 0.1, 10.0).is_err());
    assert!(Camera::new(Vec3::Z, Vec3::ZERO, Vec3::Y, 4.0, 1.0, 0.1, 10.0).is_err());
    assert!(Camera::new(Vec3::Z, Vec3::ZERO, Vec3::Y, 1.0, 0.0, 0.1, 10.0).is_err());
    assert!(Camera::new(Vec3::Z, Vec3::ZERO, Vec3::Y, 1.0, f32::NAN, 0.1, 10.0).is_err());
}

#[test]
fn test_camera_rejects_degenerate_orientation() {
    // Target equals position
    assert!(Camera::new(Vec3::ONE, Vec3::ONE, Vec3::Y, 1.0, 1.0, 0.1, 10.0).is_err());
    // Up parallel to view direction
    assert!(Camera::new(Vec3::ZERO, Vec3::Y, Vec3::Y, 1.0, 1.0, 0.1, 10.0).is_err());
    // Zero up
    assert!(Camera::new(Vec3::Z, Vec3::ZERO, Vec3::ZERO, 1.0, 1.0, 0.1, 10.0).is_err());
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn test_view_projection_is_projection_times_view() {
    let camera = default_camera();
    let expected = camera.projection_matrix() * camera.view_matrix();
    assert_eq!(camera.view_projection_matrix(), expected);
}

#[test]
fn test_inverse_view_projection_round_trips() {
    let camera = default_camera();
    let product = camera.view_projection_matrix() * camera.inverse_view_projection();
    assert!(product.abs_diff_eq(Mat4::IDENTITY, 1e-4));
}

#[test]
fn test_projection_maps_near_plane_to_minus_one() {
    let camera = default_camera();
    // A point on the near plane, straight ahead
    let clip = camera.view_projection_matrix() * Vec4::new(0.0, 0.0, 4.9, 1.0);
    let ndc_z = clip.z / clip.w;
    assert!((ndc_z + 1.0).abs() < 1e-4, "near plane should map to z = -1, got {}", ndc_z);
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_set_look_at_moves_camera() {
    let mut camera = default_camera();
    camera.set_look_at(Vec3::new(3.0, 0.0, 0.0), Vec3::ZERO).unwrap();
    assert_eq!(camera.position(), Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(camera.forward(), Vec3::NEG_X);
}

#[test]
fn test_set_look_at_rejects_and_keeps_state() {
    let mut camera = default_camera();
    let before = camera.clone();
    assert!(camera.set_look_at(Vec3::ZERO, Vec3::Y * 2.0).is_err());
    assert_eq!(camera, before);
}

#[test]
fn test_set_aspect() {
    let mut camera = default_camera();
    camera.set_aspect(1.0).unwrap();
    assert_eq!(camera.aspect(), 1.0);
    assert!(camera.set_aspect(-1.0).is_err());
    assert_eq!(camera.aspect(), 1.0);
}
