//! Look-at camera that frustum queries are driven by.
//!
//! Holds the high-level look-at parameters and derives the view and
//! projection matrices from them. Projection is OpenGL-style (right-handed,
//! NDC z in [-1, 1]), which is what the frustum corner extraction expects.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};

const SOURCE: &str = "galaxy3d::Camera";

/// Perspective look-at camera.
///
/// Validated at construction; every accessor afterward is infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    up: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Create a camera.
    ///
    /// # Arguments
    ///
    /// * `position` - Eye position in world space
    /// * `target` - Point the camera looks at
    /// * `up` - Approximate up direction
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect` - Width / height
    /// * `near`, `far` - Clip distances, `0 < near < far`
    ///
    /// # Errors
    ///
    /// `Error::InvalidCamera` when the parameters cannot produce an
    /// invertible view-projection.
    pub fn new(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Result<Self> {
        let camera = Self { position, target, up, fov_y, aspect, near, far };
        camera.validate()?;
        Ok(camera)
    }

    fn validate(&self) -> Result<()> {
        let forward = self.target - self.position;
        let problem = if !(self.fov_y > 0.0 && self.fov_y < std::f32::consts::PI) {
            Some(format!("field of view {} must be in (0, pi)", self.fov_y))
        } else if !(self.aspect > 0.0 && self.aspect.is_finite()) {
            Some(format!("aspect ratio {} must be positive", self.aspect))
        } else if !(self.near > 0.0 && self.far > self.near && self.far.is_finite()) {
            Some(format!("clip range [{}, {}] must satisfy 0 < near < far", self.near, self.far))
        } else if forward.length_squared() == 0.0 {
            Some("position and target coincide".to_string())
        } else if forward.cross(self.up).length_squared() == 0.0 {
            Some("up vector is zero or parallel to the view direction".to_string())
        } else {
            None
        };

        match problem {
            Some(message) => {
                crate::spatial_error!(SOURCE, "{}", message);
                Err(Error::InvalidCamera(message))
            }
            None => Ok(()),
        }
    }

    // ===== GETTERS =====

    /// Eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Look-at target.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Up direction as given.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Vertical field of view (radians).
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Normalized view direction.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    // ===== MATRICES =====

    /// View matrix (world → camera).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Projection matrix (camera → clip), NDC z in [-1, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Inverse of the view-projection matrix (NDC → world).
    pub fn inverse_view_projection(&self) -> Mat4 {
        self.view_projection_matrix().inverse()
    }

    // ===== SETTERS =====

    /// Move the camera, keeping every other parameter.
    ///
    /// # Errors
    ///
    /// Same validation as [`Camera::new`]; the camera is left unchanged on error.
    pub fn set_look_at(&mut self, position: Vec3, target: Vec3) -> Result<()> {
        let candidate = Self { position, target, ..self.clone() };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    /// Change the aspect ratio (window resize).
    ///
    /// # Errors
    ///
    /// `Error::InvalidCamera` for a non-positive aspect.
    pub fn set_aspect(&mut self, aspect: f32) -> Result<()> {
        let candidate = Self { aspect, ..self.clone() };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
