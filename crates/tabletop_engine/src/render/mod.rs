//! Rendering
//!
//! - **`uniforms`**: the shader uniform seam and the uniform names
//! - **`material`**: textures, the texture registry and the material catalog
//! - **`lighting`**: point and spot lights
//! - **`primitives`**: meshes, shape generators and the camera
//! - **`opengl`**: the `glow`/GLFW implementation of the traits above

pub mod uniforms;
pub mod material;
pub mod lighting;
pub mod primitives;
pub mod opengl;

#[cfg(test)]
pub(crate) mod testing;

pub use uniforms::ShaderUniforms;
pub use material::{Material, MaterialCatalog, TextureBackend, TextureRegistry, TextureSlot};
pub use lighting::{PointLight, SceneLights, SpotLight};
pub use primitives::{Camera, Mesh, MeshError, MeshLibrary, ShapeKind, Vertex};
