//! # Tabletop Engine
//!
//! Renders a static tabletop scene with OpenGL: a tablecloth and wall, a loaf
//! of bread, a glass butter dish, an orange and a bottle, built from six basic
//! shapes, ten textures, seven materials and three lights.
//!
//! ## Features
//!
//! - **Texture registry**: tagged textures on sequential texture units
//! - **Materials and lights**: named Phong materials, point and spot lights
//! - **Per-object render step**: one generic step driven by the object table
//! - **OpenGL backend**: `glow` on a GLFW window
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tabletop_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TabletopConfig::default();
//!     let mut window = GlWindow::new(&config.window)?;
//!     let gl = window.gl();
//!
//!     let shader = GlShaderProgram::scene(gl.clone())?;
//!     shader.use_program();
//!     let mut scene = SceneManager::new(shader, GlTextureBackend::new(gl.clone()), GlShapeMeshes::new(gl));
//!     scene.prepare_scene(&config.assets.textures_dir)?;
//!
//!     while !window.should_close() {
//!         window.poll_events();
//!         scene.render_scene()?;
//!         window.swap_buffers();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod assets;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::{Config, TabletopConfig},
        foundation::math::{ModelTransform, Mat4, Vec2, Vec3, Vec4},
        render::{
            lighting::SceneLights,
            material::{MaterialCatalog, TextureRegistry},
            opengl::{GlShaderProgram, GlShapeMeshes, GlTextureBackend, GlWindow},
            primitives::{Camera, MeshLibrary, ShapeKind},
            uniforms::ShaderUniforms,
        },
        scene::{SceneError, SceneManager, SceneObject, Surface},
    };
}
