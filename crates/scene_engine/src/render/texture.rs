//! Texture registry and GPU texture interface
//!
//! Textures are uploaded by a host [`TextureBackend`] and remembered here
//! under a string tag. The registry index of a texture doubles as the
//! sampler slot it is bound to, so capacity is limited by the number of
//! texture units.

use serde::{Deserialize, Serialize};

use crate::assets::ImageData;
use crate::render::{RenderError, RenderResult};

/// Sampler value written when a texture tag is not registered
pub const MISSING_TEXTURE_SLOT: i32 = -1;

/// Default number of texture units available to the scene shader
pub const DEFAULT_TEXTURE_SLOTS: usize = 16;

/// Backend handle of a GPU texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Texture filtering modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// Nearest neighbor filtering
    Nearest,
    /// Linear filtering
    #[default]
    Linear,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Repeat the texture
    #[default]
    Repeat,
    /// Mirror the texture
    MirroredRepeat,
    /// Clamp to edge
    ClampToEdge,
}

/// Pixel format used for the upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit RGB
    Rgb8,
    /// 8-bit RGBA
    Rgba8,
}

impl PixelFormat {
    /// Pick the upload format for a decoded image
    pub fn for_channels(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(PixelFormat::Rgb8),
            4 => Some(PixelFormat::Rgba8),
            _ => None,
        }
    }
}

/// Texture creation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    /// Upload format
    pub format: PixelFormat,
    /// Minification and magnification filter
    pub filter_mode: FilterMode,
    /// Wrapping on both axes
    pub wrap_mode: WrapMode,
    /// Generate mipmaps
    pub generate_mipmaps: bool,
}

impl TextureParams {
    /// Repeat-wrapped, linearly filtered, mipmapped texture of `format`
    pub fn new(format: PixelFormat) -> Self {
        Self {
            format,
            filter_mode: FilterMode::default(),
            wrap_mode: WrapMode::default(),
            generate_mipmaps: true,
        }
    }

    /// Set the filter
    pub fn with_filter(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self
    }

    /// Set the wrap mode
    pub fn with_wrap(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }
}

/// Host-provided GPU texture operations
pub trait TextureBackend {
    /// Upload `image` and return its handle
    fn create_texture(&mut self, image: &ImageData, params: &TextureParams) -> RenderResult<TextureId>;

    /// Bind `id` to texture unit `slot`
    fn bind_texture(&mut self, slot: u32, id: TextureId) -> RenderResult<()>;

    /// Release the GPU resources behind `id`
    fn delete_texture(&mut self, id: TextureId) -> RenderResult<()>;
}

/// A registered texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureEntry {
    /// Lookup tag
    pub tag: String,
    /// Backend handle
    pub id: TextureId,
}

/// Fixed-capacity tag → texture table
///
/// Tags are not checked for uniqueness; lookups return the first match.
#[derive(Debug, Clone)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    capacity: usize,
}

impl TextureRegistry {
    /// Create an empty registry with `capacity` slots
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.min(DEFAULT_TEXTURE_SLOTS)),
            capacity,
        }
    }

    /// Register `id` under `tag`, returning its slot
    pub fn register(&mut self, tag: impl Into<String>, id: TextureId) -> RenderResult<usize> {
        if self.entries.len() >= self.capacity {
            return Err(RenderError::TextureSlotsExhausted {
                capacity: self.capacity,
            });
        }

        let slot = self.entries.len();
        self.entries.push(TextureEntry { tag: tag.into(), id });
        Ok(slot)
    }

    /// Backend handle of the texture registered under `tag`
    pub fn find_texture_id(&self, tag: &str) -> Option<TextureId> {
        self.entries.iter().find(|entry| entry.tag == tag).map(|entry| entry.id)
    }

    /// Slot of the texture registered under `tag`
    pub fn find_texture_slot(&self, tag: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.tag == tag)
    }

    /// Slot of `tag` as a sampler value, or [`MISSING_TEXTURE_SLOT`]
    pub fn sampler_slot(&self, tag: &str) -> i32 {
        self.find_texture_slot(tag)
            .and_then(|slot| i32::try_from(slot).ok())
            .unwrap_or(MISSING_TEXTURE_SLOT)
    }

    /// Registered entries in slot order
    pub fn entries(&self) -> &[TextureEntry] {
        &self.entries
    }

    /// Number of registered textures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of textures
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keep only the entries `keep` returns true for
    ///
    /// Later entries move down, so their slots change.
    pub fn retain(&mut self, keep: impl FnMut(&TextureEntry) -> bool) {
        self.entries.retain(keep);
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_TEXTURE_SLOTS)
    }
}
