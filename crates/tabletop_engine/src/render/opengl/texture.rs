//! OpenGL texture backend

use std::collections::HashMap;
use std::rc::Rc;

use glow::HasContext;

use crate::assets::ImageData;
use crate::render::material::{TextureBackend, TextureError, TextureHandle, TextureParams, TextureSlot, WrapMode};

/// Creates and binds 2D textures through a shared GL context
pub struct GlTextureBackend {
    gl: Rc<glow::Context>,
    textures: HashMap<TextureHandle, glow::Texture>,
    next_handle: u32,
}

impl GlTextureBackend {
    /// Create a backend on the current context
    pub fn new(gl: Rc<glow::Context>) -> Self {
        Self {
            gl,
            textures: HashMap::new(),
            next_handle: 1,
        }
    }
}

fn gl_wrap(mode: WrapMode) -> i32 {
    match mode {
        WrapMode::Repeat => glow::REPEAT as i32,
        WrapMode::MirroredRepeat => glow::MIRRORED_REPEAT as i32,
    }
}

/// `TEXTURE_2D` parameters set before upload
///
/// Minification stays plain `LINEAR` even when mipmaps are generated, so
/// only the base level is ever sampled.
fn sampler_parameters(params: &TextureParams) -> [(u32, i32); 4] {
    let wrap = gl_wrap(params.wrap_mode);
    [
        (glow::TEXTURE_WRAP_S, wrap),
        (glow::TEXTURE_WRAP_T, wrap),
        (glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32),
        (glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32),
    ]
}

impl TextureBackend for GlTextureBackend {
    fn create_texture(&mut self, image: &ImageData, params: &TextureParams) -> Result<TextureHandle, TextureError> {
        let (internal_format, format) = match image.channels {
            3 => (glow::RGB8, glow::RGB),
            4 => (glow::RGBA8, glow::RGBA),
            channels => {
                return Err(TextureError::Backend(format!(
                    "cannot upload image with {} channels",
                    channels
                )))
            }
        };

        let gl = &self.gl;
        let texture = unsafe {
            let texture = gl.create_texture().map_err(TextureError::Backend)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            for (parameter, value) in sampler_parameters(params) {
                gl.tex_parameter_i32(glow::TEXTURE_2D, parameter, value);
            }

            // Rows of RGB images are not 4-byte aligned in general
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                internal_format as i32,
                image.width as i32,
                image.height as i32,
                0,
                format,
                glow::UNSIGNED_BYTE,
                Some(&image.data),
            );

            if params.generate_mipmaps {
                gl.generate_mipmap(glow::TEXTURE_2D);
            }

            gl.bind_texture(glow::TEXTURE_2D, None);
            texture
        };

        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.textures.insert(handle, texture);

        log::debug!(
            "Created GL texture {:?} ({}x{}, {} channels, {:?})",
            handle,
            image.width,
            image.height,
            image.channels,
            params.wrap_mode
        );
        Ok(handle)
    }

    fn bind_texture(&mut self, slot: TextureSlot, texture: TextureHandle) {
        let Some(&gl_texture) = self.textures.get(&texture) else {
            log::warn!("Bind of unknown texture {:?} to slot {}", texture, slot.0);
            return;
        };
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + slot.0);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(gl_texture));
        }
    }

    fn delete_texture(&mut self, texture: TextureHandle) {
        if let Some(gl_texture) = self.textures.remove(&texture) {
            unsafe {
                self.gl.delete_texture(gl_texture);
            }
        }
    }
}

impl Drop for GlTextureBackend {
    fn drop(&mut self) {
        if !self.textures.is_empty() {
            log::debug!("Deleting {} remaining GL textures", self.textures.len());
        }
        for (_, texture) in self.textures.drain() {
            unsafe {
                self.gl.delete_texture(texture);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameter(params: &TextureParams, name: u32) -> Option<i32> {
        sampler_parameters(params)
            .iter()
            .find(|(parameter, _)| *parameter == name)
            .map(|&(_, value)| value)
    }

    #[test]
    fn test_minification_is_plain_linear_with_mipmaps() {
        let params = TextureParams::repeat();
        assert!(params.generate_mipmaps);
        assert_eq!(parameter(&params, glow::TEXTURE_MIN_FILTER), Some(glow::LINEAR as i32));
        assert_eq!(parameter(&params, glow::TEXTURE_MAG_FILTER), Some(glow::LINEAR as i32));
    }

    #[test]
    fn test_wrap_mode_applies_to_both_axes() {
        let mirrored = TextureParams::mirrored_repeat();
        assert_eq!(parameter(&mirrored, glow::TEXTURE_WRAP_S), Some(glow::MIRRORED_REPEAT as i32));
        assert_eq!(parameter(&mirrored, glow::TEXTURE_WRAP_T), Some(glow::MIRRORED_REPEAT as i32));

        let repeat = TextureParams::repeat();
        assert_eq!(parameter(&repeat, glow::TEXTURE_WRAP_S), Some(glow::REPEAT as i32));
        assert_eq!(parameter(&repeat, glow::TEXTURE_WRAP_T), Some(glow::REPEAT as i32));
    }
}
