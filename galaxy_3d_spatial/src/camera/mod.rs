//! Camera module
//!
//! The camera is a collaborator of the spatial index, not part of it:
//! frustum queries take a `Frustum` derived from the camera's current
//! transform each time they run.

mod camera;
mod frustum;

pub use camera::Camera;
pub use frustum::{
    Frustum,
    PLANE_NEAR, PLANE_FAR, PLANE_LEFT, PLANE_RIGHT, PLANE_TOP, PLANE_BOTTOM,
};
