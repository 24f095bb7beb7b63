//! Texture types shared by the registry and the graphics backends
//!
//! Handles, slots and sampler parameters are plain values; the actual GPU work
//! happens behind the [`TextureBackend`] trait so the registry logic can run
//! without a graphics context.

use thiserror::Error;
use crate::assets::{AssetError, ImageData};

/// Handle for a GPU texture resource
///
/// An opaque id handed out by the backend that created the texture; it is not
/// a driver object name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Index of the texture unit a registered texture is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureSlot(pub u32);

impl TextureSlot {
    /// Texture unit index as expected by sampler uniforms
    pub fn unit_index(self) -> i32 {
        self.0 as i32
    }
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Repeat the texture
    Repeat,
    /// Mirror the texture on every repeat
    MirroredRepeat,
}

/// Texture creation parameters
///
/// Minification and magnification always filter linearly from the base
/// level; generated mipmaps are stored but not sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    /// Texture wrapping mode for both S and T
    pub wrap_mode: WrapMode,
    /// Generate mipmaps
    pub generate_mipmaps: bool,
}

impl TextureParams {
    /// Repeat wrapping with linear filtering and mipmaps
    pub const fn repeat() -> Self {
        Self {
            wrap_mode: WrapMode::Repeat,
            generate_mipmaps: true,
        }
    }

    /// Same as [`TextureParams::repeat`] with mirrored-repeat wrapping
    pub const fn mirrored_repeat() -> Self {
        Self {
            wrap_mode: WrapMode::MirroredRepeat,
            ..Self::repeat()
        }
    }

    /// Default parameters for a wrap mode
    pub const fn with_wrap(wrap_mode: WrapMode) -> Self {
        Self {
            wrap_mode,
            ..Self::repeat()
        }
    }
}

impl Default for TextureParams {
    fn default() -> Self {
        Self::repeat()
    }
}

/// Texture registration and binding errors
#[derive(Error, Debug)]
pub enum TextureError {
    /// Image could not be read or decoded
    #[error("Image load failed: {0}")]
    Asset(#[from] AssetError),

    /// Only RGB and RGBA images can be uploaded
    #[error("Texture '{tag}' has {channels} channels, only 3 (RGB) or 4 (RGBA) are supported")]
    UnsupportedChannels {
        /// Tag the texture was registered under
        tag: String,
        /// Decoded channel count
        channels: u8,
    },

    /// Every texture unit is already taken
    #[error("Cannot register texture '{tag}': all {capacity} texture slots are in use")]
    SlotsExhausted {
        /// Tag the texture was registered under
        tag: String,
        /// Number of available slots
        capacity: usize,
    },

    /// Graphics backend failure
    #[error("Texture backend error: {0}")]
    Backend(String),

    /// No texture is registered under this tag or slot
    #[error("Texture not found: {0}")]
    NotFound(String),
}

/// GPU side of texture management
///
/// Implemented by the OpenGL backend and by recording doubles in tests.
pub trait TextureBackend {
    /// Upload an RGB or RGBA image and return its handle
    ///
    /// Implementations leave no texture bound when they return.
    fn create_texture(&mut self, image: &ImageData, params: &TextureParams) -> Result<TextureHandle, TextureError>;

    /// Bind a texture to the texture unit `slot`
    fn bind_texture(&mut self, slot: TextureSlot, texture: TextureHandle);

    /// Free the GPU storage of a texture
    fn delete_texture(&mut self, texture: TextureHandle);
}
