//! Texture registry
//!
//! Loads image files into GPU textures, gives each one the next free texture
//! unit (its slot) and a tag, and answers tag lookups. Slots are handed out in
//! registration order starting at 0 and never change while the texture is
//! registered.
//!
//! The registry owns its backend and deletes every texture it created when it
//! is released or dropped.

use std::path::Path;

use crate::assets::ImageData;
use super::texture_manager::{TextureBackend, TextureError, TextureHandle, TextureParams, TextureSlot};

/// Number of texture units a scene can use at once
pub const MAX_TEXTURE_SLOTS: usize = 16;

/// A registered texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    /// Lookup tag, matched exactly
    pub tag: String,
    /// GPU texture handle
    pub handle: TextureHandle,
    /// Texture unit the texture is bound to
    pub slot: TextureSlot,
}

/// Ordered collection of registered textures
pub struct TextureRegistry<B: TextureBackend> {
    backend: B,
    entries: Vec<TextureEntry>,
}

impl<B: TextureBackend> TextureRegistry<B> {
    /// Create an empty registry on top of a texture backend
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            entries: Vec::with_capacity(MAX_TEXTURE_SLOTS),
        }
    }

    /// Load an image file as a repeating texture
    pub fn register_texture(&mut self, path: impl AsRef<Path>, tag: &str) -> Result<TextureSlot, TextureError> {
        self.register_file(path.as_ref(), tag, TextureParams::repeat())
    }

    /// Load an image file as a mirrored-repeat texture
    pub fn register_mirrored_texture(&mut self, path: impl AsRef<Path>, tag: &str) -> Result<TextureSlot, TextureError> {
        self.register_file(path.as_ref(), tag, TextureParams::mirrored_repeat())
    }

    /// Load an image file with explicit sampler parameters
    pub fn register_file(&mut self, path: &Path, tag: &str, params: TextureParams) -> Result<TextureSlot, TextureError> {
        let image = ImageData::from_file(path).map_err(|e| {
            log::error!("Could not load image: {} ({})", path.display(), e);
            TextureError::from(e)
        })?;

        log::info!(
            "Successfully loaded image: {}, width: {}, height: {}, channels: {}",
            path.display(),
            image.width,
            image.height,
            image.channels
        );

        self.register_image(&image, tag, params)
    }

    /// Upload decoded pixels and register them under `tag`
    ///
    /// Fails without touching the registry when the image is not RGB/RGBA or
    /// when every slot is taken.
    pub fn register_image(&mut self, image: &ImageData, tag: &str, params: TextureParams) -> Result<TextureSlot, TextureError> {
        if !matches!(image.channels, 3 | 4) {
            log::error!("Not implemented to handle image with {} channels ('{}')", image.channels, tag);
            return Err(TextureError::UnsupportedChannels {
                tag: tag.to_string(),
                channels: image.channels,
            });
        }

        if self.entries.len() >= MAX_TEXTURE_SLOTS {
            log::error!("No free texture slot for '{}'", tag);
            return Err(TextureError::SlotsExhausted {
                tag: tag.to_string(),
                capacity: MAX_TEXTURE_SLOTS,
            });
        }

        if self.entry(tag).is_some() {
            log::warn!("Texture tag '{}' registered twice; lookups resolve to the first one", tag);
        }

        let handle = self.backend.create_texture(image, &params)?;
        let slot = TextureSlot(self.entries.len() as u32);
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
            slot,
        });

        log::debug!("Registered texture '{}' as {:?} in {:?}", tag, handle, slot);
        Ok(slot)
    }

    /// Bind every registered texture to its slot, in registration order
    pub fn bind_all(&mut self) {
        for entry in &self.entries {
            self.backend.bind_texture(entry.slot, entry.handle);
        }
    }

    /// Bind the texture registered in `slot` to its texture unit
    pub fn bind_slot(&mut self, slot: TextureSlot) -> Result<(), TextureError> {
        let entry = self
            .entries
            .get(slot.0 as usize)
            .ok_or_else(|| TextureError::NotFound(format!("{:?}", slot)))?;
        self.backend.bind_texture(entry.slot, entry.handle);
        Ok(())
    }

    /// First entry registered under `tag`
    pub fn entry(&self, tag: &str) -> Option<&TextureEntry> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    /// Slot of the first texture registered under `tag`
    pub fn slot(&self, tag: &str) -> Option<TextureSlot> {
        self.entry(tag).map(|entry| entry.slot)
    }

    /// GPU handle of the first texture registered under `tag`
    pub fn handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entry(tag).map(|entry| entry.handle)
    }

    /// All entries in slot order
    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no texture is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Access the texture backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Delete every GPU texture and empty the registry
    ///
    /// Slot numbering restarts at 0 for textures registered afterwards.
    pub fn release_all(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        log::debug!("Releasing {} textures", self.entries.len());
        for entry in self.entries.drain(..) {
            self.backend.delete_texture(entry.handle);
        }
    }
}

impl<B: TextureBackend> Drop for TextureRegistry<B> {
    fn drop(&mut self) {
        self.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::material::WrapMode;
    use crate::render::testing::{write_gray_png, write_rgb_png, RecordingTextureBackend};

    fn rgb(width: u32, height: u32) -> ImageData {
        ImageData::from_raw(width, height, 3, vec![0; (width * height * 3) as usize])
    }

    #[test]
    fn test_slots_follow_registration_order() {
        let mut registry = TextureRegistry::new(RecordingTextureBackend::new());
        let tags = ["cloth", "bottleLid", "breadTop", "butter"];

        for (index, tag) in tags.iter().enumerate() {
            let slot = registry.register_image(&rgb(1, 1), tag, TextureParams::repeat()).unwrap();
            assert_eq!(slot, TextureSlot(index as u32));
        }

        for (index, tag) in tags.iter().enumerate() {
            assert_eq!(registry.slot(tag), Some(TextureSlot(index as u32)));
        }
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_unknown_tag_has_no_slot_or_handle() {
        let mut registry = TextureRegistry::new(RecordingTextureBackend::new());
        registry.register_image(&rgb(1, 1), "cloth", TextureParams::repeat()).unwrap();

        assert_eq!(registry.slot("Cloth"), None);
        assert_eq!(registry.handle("missing"), None);
        assert_eq!(registry.handle("cloth"), Some(TextureHandle(1)));
    }

    #[test]
    fn test_unsupported_channels_leave_registry_unchanged() {
        let backend = RecordingTextureBackend::new();
        let log = backend.log.clone();
        let mut registry = TextureRegistry::new(backend);

        for channels in [1u8, 2] {
            let image = ImageData::from_raw(1, 1, channels, vec![0; channels as usize]);
            let result = registry.register_image(&image, "gray", TextureParams::repeat());
            assert!(matches!(result, Err(TextureError::UnsupportedChannels { channels: c, .. }) if c == channels));
        }

        assert!(registry.is_empty());
        assert!(log.borrow().created.is_empty());
    }

    #[test]
    fn test_rgba_images_are_accepted() {
        let mut registry = TextureRegistry::new(RecordingTextureBackend::new());
        let slot = registry
            .register_image(&ImageData::solid_color(2, 2, [1, 2, 3, 4]), "glass", TextureParams::repeat())
            .unwrap();
        assert_eq!(slot, TextureSlot(0));
    }

    #[test]
    fn test_register_from_files() {
        let backend = RecordingTextureBackend::new();
        let log = backend.log.clone();
        let mut registry = TextureRegistry::new(backend);

        let rgb_path = write_rgb_png("registry_rgb");
        let gray_path = write_gray_png("registry_gray");

        assert_eq!(registry.register_texture(&rgb_path, "wall").unwrap(), TextureSlot(0));
        assert!(registry.register_texture(&gray_path, "gray").is_err());
        assert!(matches!(
            registry.register_texture(rgb_path.with_extension("missing.png"), "gone"),
            Err(TextureError::Asset(_))
        ));
        assert_eq!(registry.register_mirrored_texture(&rgb_path, "skull").unwrap(), TextureSlot(1));

        let created = &log.borrow().created;
        assert_eq!(created.len(), 2);
        assert_eq!(created[0].1.wrap_mode, WrapMode::Repeat);
        assert_eq!(created[1].1.wrap_mode, WrapMode::MirroredRepeat);
        assert_eq!(created[0].2, 3);

        std::fs::remove_file(&rgb_path).ok();
        std::fs::remove_file(&gray_path).ok();
    }

    #[test]
    fn test_duplicate_tags_resolve_to_first_entry() {
        let mut registry = TextureRegistry::new(RecordingTextureBackend::new());
        registry.register_image(&rgb(1, 1), "butter", TextureParams::repeat()).unwrap();
        registry.register_image(&rgb(1, 1), "orange", TextureParams::repeat()).unwrap();
        let second = registry.register_image(&rgb(1, 1), "butter", TextureParams::repeat()).unwrap();

        assert_eq!(second, TextureSlot(2));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.slot("butter"), Some(TextureSlot(0)));
        assert_eq!(registry.handle("butter"), Some(TextureHandle(1)));
    }

    #[test]
    fn test_slot_capacity_is_enforced() {
        let backend = RecordingTextureBackend::new();
        let log = backend.log.clone();
        let mut registry = TextureRegistry::new(backend);

        for index in 0..MAX_TEXTURE_SLOTS {
            registry
                .register_image(&rgb(1, 1), &format!("texture{}", index), TextureParams::repeat())
                .unwrap();
        }

        let overflow = registry.register_image(&rgb(1, 1), "one_too_many", TextureParams::repeat());
        assert!(matches!(overflow, Err(TextureError::SlotsExhausted { capacity: MAX_TEXTURE_SLOTS, .. })));
        assert_eq!(registry.len(), MAX_TEXTURE_SLOTS);
        assert_eq!(log.borrow().created.len(), MAX_TEXTURE_SLOTS);
    }

    #[test]
    fn test_bind_all_binds_in_registration_order() {
        let backend = RecordingTextureBackend::new();
        let log = backend.log.clone();
        let mut registry = TextureRegistry::new(backend);
        registry.register_image(&rgb(1, 1), "cloth", TextureParams::repeat()).unwrap();
        registry.register_image(&rgb(1, 1), "wall", TextureParams::repeat()).unwrap();

        registry.bind_all();

        assert_eq!(
            log.borrow().bound,
            vec![(TextureSlot(0), TextureHandle(1)), (TextureSlot(1), TextureHandle(2))]
        );
    }

    #[test]
    fn test_bind_unregistered_slot_fails() {
        let mut registry = TextureRegistry::new(RecordingTextureBackend::new());
        assert!(matches!(registry.bind_slot(TextureSlot(3)), Err(TextureError::NotFound(_))));
    }

    #[test]
    fn test_release_all_deletes_every_texture_once() {
        let backend = RecordingTextureBackend::new();
        let log = backend.log.clone();
        let mut registry = TextureRegistry::new(backend);
        registry.register_image(&rgb(1, 1), "cloth", TextureParams::repeat()).unwrap();
        registry.register_image(&rgb(1, 1), "wall", TextureParams::repeat()).unwrap();

        registry.release_all();
        assert!(registry.is_empty());
        assert_eq!(log.borrow().deleted, vec![TextureHandle(1), TextureHandle(2)]);

        // Slots restart after a release.
        let slot = registry.register_image(&rgb(1, 1), "orange", TextureParams::repeat()).unwrap();
        assert_eq!(slot, TextureSlot(0));

        drop(registry);
        assert_eq!(
            log.borrow().deleted,
            vec![TextureHandle(1), TextureHandle(2), TextureHandle(3)]
        );
    }
}
