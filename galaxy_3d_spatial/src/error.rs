//! Error types for the Galaxy3D spatial crate
//!
//! The build and query paths never fail. Errors only come from the
//! collaborator-facing constructors (meshes, cameras) that validate their input.

use std::fmt;

/// Result type for Galaxy3D spatial operations
pub type Galaxy3dResult<T> = std::result::Result<T, Galaxy3dError>;

/// Short names used inside the crate and re-exported from `galaxy3d`
pub type Result<T> = Galaxy3dResult<T>;
pub type Error = Galaxy3dError;

/// Galaxy3D spatial errors
#[derive(Debug, Clone, PartialEq)]
pub enum Galaxy3dError {
    /// Mesh buffers are malformed (index out of range, partial triangle, ...)
    InvalidMesh(String),

    /// Camera parameters cannot produce an invertible projection
    InvalidCamera(String),

    /// Any other rejected input
    InvalidInput(String),
}

impl fmt::Display for Galaxy3dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Galaxy3dError::InvalidMesh(msg) => write!(f, "Invalid mesh: {}", msg),
            Galaxy3dError::InvalidCamera(msg) => write!(f, "Invalid camera: {}", msg),
            Galaxy3dError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Galaxy3dError {}

/// Log an error and build an `Error::InvalidInput` from it.
///
/// # Example
///
/// ```ignore
/// let err = spatial_err!("galaxy3d::Mesh", "index {} out of range", i);
/// ```
#[macro_export]
macro_rules! spatial_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::spatial_error!($source, "{}", message);
        $crate::galaxy3d::Galaxy3dError::InvalidInput(message)
    }};
}

/// Log an error and return early with an `Error::InvalidInput`.
#[macro_export]
macro_rules! spatial_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::spatial_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
