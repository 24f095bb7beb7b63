//! Math utilities and types
//!
//! Provides the nalgebra aliases used by the renderer and the model transform
//! applied to every scene object.

pub use nalgebra::{
    Vector2, Vector3, Vector4,
    Matrix4,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Scale, Euler rotation (degrees) and position of one object instance
///
/// The model matrix is always composed as `T * Rz * Ry * Rx * S`: scale is
/// applied first, then the X, Y and Z rotations, then the translation.
/// Placement values in the scene table are tuned against this exact order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    /// Scale factors along each axis
    pub scale: Vec3,

    /// Rotation angles around X, Y and Z in degrees
    pub rotation_degrees: Vec3,

    /// World-space position
    pub position: Vec3,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation_degrees: Vec3::zeros(),
            position: Vec3::zeros(),
        }
    }
}

impl ModelTransform {
    /// Create a transform from scale, rotation in degrees and position
    pub const fn new(scale: Vec3, rotation_degrees: Vec3, position: Vec3) -> Self {
        Self {
            scale,
            rotation_degrees,
            position,
        }
    }

    /// Create a transform that only scales and translates
    pub fn scaled_at(scale: Vec3, position: Vec3) -> Self {
        Self {
            scale,
            position,
            ..Default::default()
        }
    }

    /// Set the rotation in degrees around X, Y and Z
    #[must_use]
    pub fn with_rotation(mut self, x_degrees: f32, y_degrees: f32, z_degrees: f32) -> Self {
        self.rotation_degrees = Vec3::new(x_degrees, y_degrees, z_degrees);
        self
    }

    /// Convert to the model matrix `T * Rz * Ry * Rx * S`
    pub fn to_matrix(&self) -> Mat4 {
        let rotation_x = Mat4::rotation_x(utils::deg_to_rad(self.rotation_degrees.x));
        let rotation_y = Mat4::rotation_y(utils::deg_to_rad(self.rotation_degrees.y));
        let rotation_z = Mat4::rotation_z(utils::deg_to_rad(self.rotation_degrees.z));

        Mat4::new_translation(&self.position)
            * rotation_z
            * rotation_y
            * rotation_x
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Create an OpenGL perspective projection (clip depth in [-1, 1])
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a right-handed look-at view matrix
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::new_perspective(aspect, fov_y, near, far)
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }
}
