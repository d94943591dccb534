//! Asset loading
//!
//! Only image decoding lives here; GPU upload is the job of a
//! [`TextureBackend`](crate::render::TextureBackend).

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// Decoded image has a channel layout the texture path cannot upload
    #[error("Not implemented to handle image with {0} channels")]
    UnsupportedChannels(u8),
}
