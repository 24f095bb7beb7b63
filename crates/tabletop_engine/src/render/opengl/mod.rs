//! OpenGL backend
//!
//! Implements the renderer traits on top of a `glow` context created from a
//! GLFW window. This is the only module that issues raw GL calls.

#![allow(unsafe_code)]

pub mod window;
pub mod shader;
pub mod texture;
pub mod meshes;

pub use window::{GlWindow, WindowError, WindowResult};
pub use shader::{GlShaderProgram, ShaderError};
pub use texture::GlTextureBackend;
pub use meshes::GlShapeMeshes;
