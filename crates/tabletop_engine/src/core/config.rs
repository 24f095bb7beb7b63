//! # Unified Configuration System
//!
//! All configuration structures of the tabletop renderer in one place. The
//! defaults reproduce the reference scene, so a missing or partial config file
//! still renders the full tabletop.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: logging level and frame clear color
//! - **Window Config**: title, size, vsync
//! - **Camera Config**: fixed viewpoint and projection
//! - **Asset Config**: where texture files are read from

use serde::{Serialize, Deserialize};
use std::path::PathBuf;

pub use crate::config::{Config, ConfigError};
use crate::foundation::math::Vec3;

/// Core engine behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Color the frame is cleared to before the scene is drawn
    pub clear_color: [f32; 4],
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Set log level
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Window creation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Synchronize buffer swaps with the display refresh
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tabletop Scene".to_string(),
            width: 1000,
            height: 800,
            vsync: true,
        }
    }
}

/// Fixed camera viewpoint and perspective projection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position in world space
    pub position: [f32; 3],
    /// Point the camera looks at
    pub target: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
}

impl CameraConfig {
    /// Eye position as a vector
    pub fn position_vec(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    /// Look-at target as a vector
    pub fn target_vec(&self) -> Vec3 {
        Vec3::from(self.target)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 7.0, 20.0],
            target: [0.0, 2.0, 0.0],
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Asset location configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory the scene texture files are read from
    pub textures_dir: PathBuf,
}

impl AssetConfig {
    /// Set the texture directory
    #[must_use]
    pub fn with_textures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.textures_dir = dir.into();
        self
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            textures_dir: PathBuf::from("resources/textures"),
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration the tabletop binary loads at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabletopConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Window configuration
    pub window: WindowConfig,
    /// Camera configuration
    pub camera: CameraConfig,
    /// Asset configuration
    pub assets: AssetConfig,
}

impl TabletopConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "camera fov must be within (0, 180) degrees, got {}",
                camera.fov_degrees
            )));
        }
        if camera.near <= 0.0 || camera.far <= camera.near {
            return Err(ConfigError::Invalid(format!(
                "camera clip planes must satisfy 0 < near < far, got near={} far={}",
                camera.near, camera.far
            )));
        }
        if camera.position == camera.target {
            return Err(ConfigError::Invalid("camera position and target coincide".to_string()));
        }

        Ok(())
    }
}

impl Config for TabletopConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TabletopConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engine.log_level, "info");
        assert_eq!(config.assets.textures_dir, PathBuf::from("resources/textures"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TabletopConfig = toml::from_str(
            r#"
            [window]
            width = 640

            [assets]
            textures_dir = "textures"
            "#,
        )
        .unwrap();

        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, WindowConfig::default().height);
        assert_eq!(config.assets.textures_dir, PathBuf::from("textures"));
        assert_eq!(config.camera.fov_degrees, 45.0);
    }

    #[test]
    fn test_invalid_clip_planes_rejected() {
        let mut config = TabletopConfig::default();
        config.camera.near = 10.0;
        config.camera.far = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_window_rejected() {
        let mut config = TabletopConfig::default();
        config.window.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_ron() {
        let path = std::env::temp_dir().join(format!("tabletop_config_{}.ron", std::process::id()));
        let mut config = TabletopConfig::default();
        config.engine = config.engine.with_log_level("debug");
        config.save_to_file(&path).unwrap();

        let loaded = TabletopConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.engine.log_level, "debug");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let result = TabletopConfig::load_from_file("settings.json");
        // The read fails before the format check when the file is missing,
        // so only assert that loading did not succeed.
        assert!(result.is_err());

        let path = std::env::temp_dir().join(format!("tabletop_config_{}.json", std::process::id()));
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(
            TabletopConfig::load_from_file(&path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        std::fs::remove_file(&path).ok();
    }
}
