//! Object transforms
//!
//! Scene objects are placed with a scale, three Euler angles in degrees
//! and a position. The model matrix is `T · Rx · Ry · Rz · S`: scale first,
//! then rotate about Z, Y and X, then translate.

use crate::foundation::math::{utils, Mat4, Mat4Ext, Point3, Vec3};

/// Placement of one scene object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransform {
    /// Scale factors
    pub scale: Vec3,
    /// Rotation about X, Y and Z in degrees
    pub rotation_degrees: Vec3,
    /// World position
    pub position: Vec3,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation_degrees: Vec3::zeros(),
            position: Vec3::zeros(),
        }
    }
}

impl ObjectTransform {
    /// Create a transform from all three components
    pub fn new(scale: Vec3, rotation_degrees: Vec3, position: Vec3) -> Self {
        Self {
            scale,
            rotation_degrees,
            position,
        }
    }

    /// Unrotated transform
    pub fn scaled_at(scale: Vec3, position: Vec3) -> Self {
        Self {
            scale,
            position,
            ..Default::default()
        }
    }

    /// Set the rotation in degrees
    pub fn with_rotation(mut self, x_degrees: f32, y_degrees: f32, z_degrees: f32) -> Self {
        self.rotation_degrees = Vec3::new(x_degrees, y_degrees, z_degrees);
        self
    }

    /// Compose the model matrix
    pub fn to_matrix(&self) -> Mat4 {
        let scale = Mat4::scaling(&self.scale);
        let rotation_x = Mat4::rotation_x(utils::deg_to_rad(self.rotation_degrees.x));
        let rotation_y = Mat4::rotation_y(utils::deg_to_rad(self.rotation_degrees.y));
        let rotation_z = Mat4::rotation_z(utils::deg_to_rad(self.rotation_degrees.z));
        let translation = Mat4::translation(&self.position);

        translation * rotation_x * rotation_y * rotation_z * scale
    }

    /// Map a model-space point to world space
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }
}
