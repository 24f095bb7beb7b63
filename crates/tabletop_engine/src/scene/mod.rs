//! The tabletop scene
//!
//! - **`objects`**: the object table and the textures it loads
//! - **`scene_manager`**: preparation and the per-object render step

pub mod objects;
pub mod scene_manager;

pub use objects::{tabletop_objects, SceneObject, Surface, TextureSource, TABLETOP_TEXTURES};
pub use scene_manager::{SceneError, SceneManager, MISSING_TEXTURE_COLOR};
