//! Textures and materials
//!
//! - **`texture_manager`**: texture handles, slots, sampler parameters and the
//!   backend trait
//! - **`texture_registry`**: tag and slot bookkeeping for loaded textures
//! - **`material_catalog`**: the named Phong materials of the scene

pub mod texture_manager;
pub mod texture_registry;
pub mod material_catalog;

pub use texture_manager::{
    TextureBackend, TextureError, TextureHandle, TextureParams, TextureSlot, WrapMode,
};
pub use texture_registry::{TextureEntry, TextureRegistry, MAX_TEXTURE_SLOTS};
pub use material_catalog::{Material, MaterialCatalog};
