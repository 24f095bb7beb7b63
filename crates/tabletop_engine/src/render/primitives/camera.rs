//! # 3D Camera
//!
//! Fixed perspective camera for the tabletop view. It never moves; only the
//! aspect ratio follows the framebuffer.
//!
//! Uses a right-handed Y-up view space and the OpenGL clip convention
//! (depth in [-1, 1]).

use crate::core::CameraConfig;
use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};
use crate::render::uniforms::{names, ShaderUniforms};

/// Perspective camera looking at a fixed target
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a perspective camera looking at the origin
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Create the camera described by the configuration
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self::perspective(config.position_vec(), config.fov_degrees, aspect, config.near, config.far);
        camera.target = config.target_vec();
        camera
    }

    /// Update the aspect ratio after a framebuffer resize
    ///
    /// Zero-height framebuffers (minimized windows) keep the previous ratio.
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let aspect = width as f32 / height as f32;
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// World-to-camera transform
    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Camera-to-clip transform
    pub fn get_projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Write `view`, `projection` and `viewPosition`
    pub fn apply<U: ShaderUniforms + ?Sized>(&self, uniforms: &mut U) {
        uniforms.set_mat4(names::VIEW, &self.get_view_matrix());
        uniforms.set_mat4(names::PROJECTION, &self.get_projection_matrix());
        uniforms.set_vec3(names::VIEW_POSITION, self.position);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), 1000.0 / 800.0)
    }
}
