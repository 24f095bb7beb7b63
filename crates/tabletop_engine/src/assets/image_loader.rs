//! Image loading utilities for texture data
//!
//! Decodes PNG and JPEG files with the `image` crate. Images are always
//! flipped vertically on load so that row 0 is the bottom of the picture,
//! which is what OpenGL texture coordinates expect. The decoded channel count
//! is preserved; deciding which channel counts are usable is left to the
//! texture registry.

use std::path::Path;
use image::DynamicImage;
use crate::assets::AssetError;

/// Decoded image data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Tightly packed 8-bit pixel data, bottom row first
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (3 for RGB, 4 for RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path, flipping it vertically
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        log::debug!("Loading image from: {:?}", path_ref);

        let bytes = std::fs::read(path_ref)?;
        Self::from_bytes(&bytes).map_err(|e| match e {
            AssetError::LoadFailed(reason) => AssetError::LoadFailed(format!("{}: {}", path_ref.display(), reason)),
            other => other,
        })
    }

    /// Decode an image held in memory, flipping it vertically
    ///
    /// The format is detected from the content, not from a file name.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes).map_err(|e| AssetError::LoadFailed(e.to_string()))?;

        Ok(Self::from_dynamic(&img.flipv()))
    }

    /// Wrap already decoded pixels
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Self {
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// Create a solid color RGBA image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self::from_raw(width, height, 4, data)
    }

    fn from_dynamic(img: &DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let channels = img.color().channel_count();

        // Wider sample types are narrowed to 8 bits; the channel count is kept.
        let data = match channels {
            3 => img.to_rgb8().into_raw(),
            4 => img.to_rgba8().into_raw(),
            2 => img.to_luma_alpha8().into_raw(),
            _ => img.to_luma8().into_raw(),
        };

        Self::from_raw(width, height, channels, data)
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get one pixel's channels, with `y = 0` being the bottom row
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let channels = self.channels as usize;
        let start = (y as usize * self.width as usize + x as usize) * channels;
        self.data.get(start..start + channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tabletop_image_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_solid_color_image() {
        let img = ImageData::solid_color(4, 4, [255, 0, 0, 255]);
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.channels, 4);
        assert_eq!(img.size_bytes(), 4 * 4 * 4);
        assert_eq!(img.pixel(0, 0), Some(&[255, 0, 0, 255][..]));
        assert_eq!(img.pixel(4, 0), None);
    }

    #[test]
    fn test_rgb_file_is_flipped_vertically() {
        let path = temp_path("flip.png");
        let mut source = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        // Top row of the file is red.
        source.put_pixel(0, 0, Rgb([255, 0, 0]));
        source.put_pixel(1, 0, Rgb([255, 0, 0]));
        source.save(&path).unwrap();

        let img = ImageData::from_file(&path).unwrap();
        assert_eq!(img.channels, 3);
        assert_eq!(img.size_bytes(), 2 * 2 * 3);
        // After the flip the red row is the last row in memory.
        assert_eq!(img.pixel(0, 1), Some(&[255, 0, 0][..]));
        assert_eq!(img.pixel(0, 0), Some(&[0, 0, 0][..]));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_rgba_and_gray_channel_counts() {
        let rgba_path = temp_path("rgba.png");
        RgbaImage::from_pixel(3, 1, Rgba([1, 2, 3, 4])).save(&rgba_path).unwrap();
        let rgba = ImageData::from_file(&rgba_path).unwrap();
        assert_eq!(rgba.channels, 4);
        assert_eq!(rgba.pixel(2, 0), Some(&[1, 2, 3, 4][..]));

        let gray_path = temp_path("gray.png");
        GrayImage::from_pixel(3, 1, Luma([7])).save(&gray_path).unwrap();
        let gray = ImageData::from_file(&gray_path).unwrap();
        assert_eq!(gray.channels, 1);
        assert_eq!(gray.size_bytes(), 3);

        std::fs::remove_file(&rgba_path).ok();
        std::fs::remove_file(&gray_path).ok();
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = ImageData::from_file(temp_path("does_not_exist.png"));
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_file_error_names_the_path() {
        let path = temp_path("corrupt.jpg");
        std::fs::write(&path, b"definitely not an image").unwrap();

        match ImageData::from_file(&path) {
            Err(AssetError::LoadFailed(reason)) => assert!(reason.starts_with(&path.display().to_string()), "{}", reason),
            other => panic!("expected a decode failure, got {:?}", other.map(|img| img.size_bytes())),
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_corrupt_bytes_fail_to_decode() {
        let result = ImageData::from_bytes(b"definitely not an image");
        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }
}
