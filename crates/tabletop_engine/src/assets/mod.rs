//! Asset loading

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// File does not exist
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// File exists but could not be decoded
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// IO error while reading the asset
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
