//! Image loading utilities for texture data
//!
//! Decodes PNG and JPEG files with the `image` crate. Unlike a generic
//! RGBA loader, the decoded channel count is preserved so the texture
//! backend can pick an RGB8 or RGBA8 upload format.

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::assets::AssetError;

/// Loaded image data ready for GPU upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Tightly packed pixel rows, `channels` bytes per pixel
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (3 for RGB, 4 for RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    ///
    /// With `flip_vertically` the first row of `data` is the bottom row of
    /// the file, which is what texture coordinates with a bottom-left origin
    /// expect.
    pub fn from_file<P: AsRef<Path>>(path: P, flip_vertically: bool) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        if !path_ref.exists() {
            return Err(AssetError::NotFound(path_ref.display().to_string()));
        }

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("Could not load image {}: {}", path_ref.display(), e)))?;

        let image = Self::from_dynamic(img, flip_vertically)?;

        log::info!(
            "Successfully loaded image: {}, width: {}, height: {}, channels: {}",
            path_ref.display(),
            image.width,
            image.height,
            image.channels
        );

        Ok(image)
    }

    /// Load image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8], flip_vertically: bool) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

        Self::from_dynamic(img, flip_vertically)
    }

    fn from_dynamic(img: DynamicImage, flip_vertically: bool) -> Result<Self, AssetError> {
        let img = if flip_vertically { img.flipv() } else { img };
        let (width, height) = img.dimensions();

        // Wider sample types are narrowed to 8 bits per channel
        let (data, channels) = match img.color().channel_count() {
            3 => (img.into_rgb8().into_raw(), 3),
            4 => (img.into_rgba8().into_raw(), 4),
            other => return Err(AssetError::UnsupportedChannels(other)),
        };

        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Create a solid color RGBA image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);

        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }

        Self {
            data,
            width,
            height,
            channels: 4,
        }
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
