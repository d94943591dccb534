//! # Unified Configuration System
//!
//! Configuration for the scene composer and the application that hosts it.
//! Every field has a default matching the stock desk scene, so a config
//! file only needs to name what it changes.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: logging and how many frames the host renders
//! - **Scene Config**: texture sources, material presets, lights, mesh parameters
//! - **Application Config**: both of the above, loadable from TOML or RON

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::render::lighting::{desk_lights, LightSource, MAX_LIGHT_SOURCES};
use crate::render::material::{desk_materials, ObjectMaterial};
use crate::render::texture::{FilterMode, WrapMode, DEFAULT_TEXTURE_SLOTS};

pub use crate::config::{Config, ConfigError};

/// Upper bound on texture units any backend is expected to expose
const MAX_SUPPORTED_TEXTURE_SLOTS: usize = 32;

/// # Texture Source
///
/// An image file and the tag it is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureSource {
    /// Lookup tag used by draw instructions
    pub tag: String,
    /// File name, relative to [`SceneConfig::texture_dir`] unless absolute
    pub file: String,
}

impl TextureSource {
    /// Create a texture source
    pub fn new(tag: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            file: file.into(),
        }
    }
}

fn desk_textures() -> Vec<TextureSource> {
    vec![
        TextureSource::new("coffee", "coffee.jpg"),
        TextureSource::new("stainless", "stainless.jpg"),
        TextureSource::new("oak", "Light-blond-oak.jpg"),
        TextureSource::new("mug", "tissue.jpg"),
        TextureSource::new("blktx", "black-texture.jpg"),
        TextureSource::new("rubber", "rubber.jpg"),
        TextureSource::new("drywall", "drywall.jpg"),
        TextureSource::new("Kali", "Kali-Linux_13.jpg"),
    ]
}

/// # Scene Configuration
///
/// Everything the scene loads during preparation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Directory texture files are resolved against
    pub texture_dir: String,
    /// Flip images vertically on load
    pub flip_vertically: bool,
    /// Number of texture units the registry may fill
    pub max_texture_slots: usize,
    /// Texture filter passed to the backend
    pub texture_filter: FilterMode,
    /// Texture wrap mode passed to the backend
    pub texture_wrap: WrapMode,
    /// Tube thickness of the torus mesh
    pub torus_thickness: f32,
    /// Textures to load, in slot order
    pub textures: Vec<TextureSource>,
    /// Material presets
    pub materials: Vec<ObjectMaterial>,
    /// Light sources
    pub lights: Vec<LightSource>,
}

impl SceneConfig {
    /// Create the stock desk scene configuration
    pub fn new() -> Self {
        Self {
            texture_dir: "resources/textures".to_string(),
            flip_vertically: true,
            max_texture_slots: DEFAULT_TEXTURE_SLOTS,
            texture_filter: FilterMode::Linear,
            texture_wrap: WrapMode::Repeat,
            torus_thickness: 0.2,
            textures: desk_textures(),
            materials: desk_materials(),
            lights: desk_lights(),
        }
    }

    /// Set texture directory
    pub fn with_texture_dir(mut self, dir: impl Into<String>) -> Self {
        self.texture_dir = dir.into();
        self
    }

    /// Replace the texture list
    pub fn with_textures(mut self, textures: Vec<TextureSource>) -> Self {
        self.textures = textures;
        self
    }

    /// Replace the material presets
    pub fn with_materials(mut self, materials: Vec<ObjectMaterial>) -> Self {
        self.materials = materials;
        self
    }

    /// Replace the lights
    pub fn with_lights(mut self, lights: Vec<LightSource>) -> Self {
        self.lights = lights;
        self
    }

    /// Full path of a texture file
    pub fn texture_path(&self, source: &TextureSource) -> PathBuf {
        let file = Path::new(&source.file);
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            Path::new(&self.texture_dir).join(file)
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_texture_slots == 0 || self.max_texture_slots > MAX_SUPPORTED_TEXTURE_SLOTS {
            return Err(format!(
                "max_texture_slots must be between 1 and {}, got {}",
                MAX_SUPPORTED_TEXTURE_SLOTS, self.max_texture_slots
            ));
        }

        if self.textures.len() > self.max_texture_slots {
            return Err(format!(
                "{} textures configured but only {} slots available",
                self.textures.len(),
                self.max_texture_slots
            ));
        }

        if let Some(source) = self.textures.iter().find(|source| source.tag.is_empty()) {
            return Err(format!("Texture '{}' has an empty tag", source.file));
        }

        if self.materials.iter().any(|material| material.tag.is_empty()) {
            return Err("Material tags cannot be empty".to_string());
        }

        if self.lights.len() > MAX_LIGHT_SOURCES {
            return Err(format!(
                "At most {} light sources are supported, got {}",
                MAX_LIGHT_SOURCES,
                self.lights.len()
            ));
        }

        if self.torus_thickness <= 0.0 {
            return Err("Torus thickness must be positive".to_string());
        }

        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Engine Configuration
///
/// Host behavior: logging and frame count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine
    pub log_level: String,
    /// Number of frames the host renders before exiting
    pub frames: u32,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            frames: 1,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set frame count
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration applications load from disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Scene content configuration
    pub scene: SceneConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.engine.frames == 0 {
            return Err("At least one frame must be rendered".to_string());
        }
        self.scene.validate()
    }

    /// Load from `path` and validate
    pub fn load_validated<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    fn temp_config_path(name: &str) -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("scene_engine_{}_{}", std::process::id(), name));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ApplicationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scene.textures.len(), 8);
        assert_eq!(config.scene.materials.len(), 8);
        assert_eq!(config.scene.lights.len(), 3);
    }

    #[test]
    fn test_too_many_textures_rejected() {
        let mut config = SceneConfig::new();
        config.max_texture_slots = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_many_lights_rejected() {
        let lights = vec![LightSource::point(Vec3::zeros(), 0.0, 0.0, 0.0); MAX_LIGHT_SOURCES + 1];
        let config = SceneConfig::new().with_lights(lights);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_texture_path_resolution() {
        let config = SceneConfig::new().with_texture_dir("assets");
        let relative = TextureSource::new("oak", "oak.jpg");
        assert_eq!(config.texture_path(&relative), Path::new("assets").join("oak.jpg"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = r#"
            [engine]
            log_level = "debug"

            [scene]
            texture_dir = "textures"
        "#;

        let config = ApplicationConfig::from_str_with_format(text, "app.toml").unwrap();
        assert_eq!(config.engine.log_level, "debug");
        assert_eq!(config.engine.frames, 1);
        assert_eq!(config.scene.texture_dir, "textures");
        assert_eq!(config.scene.materials.len(), 8);
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let path = temp_config_path("app.toml");
        let config = ApplicationConfig {
            engine: EngineConfig::new().with_frames(3),
            scene: SceneConfig::new().with_texture_dir("elsewhere"),
        };

        config.save_to_file(&path).unwrap();
        let loaded = ApplicationConfig::load_validated(&path).unwrap();
        assert_eq!(loaded.engine.frames, 3);
        assert_eq!(loaded.scene.texture_dir, "elsewhere");
        assert_eq!(loaded.scene.materials[0].tag, "metal");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_ron_round_trip_through_file() {
        let path = temp_config_path("app.ron");
        let mut scene = SceneConfig::new()
            .with_texture_dir("ron_textures")
            .with_textures(vec![TextureSource::new("oak", "oak.png")])
            .with_lights(vec![LightSource::point(Vec3::new(1.0, 2.0, 3.0), 0.1, 0.5, 0.25).with_focus(12.0, 0.3)]);
        scene.texture_wrap = WrapMode::ClampToEdge;
        scene.texture_filter = FilterMode::Nearest;
        let config = ApplicationConfig {
            engine: EngineConfig::new().with_log_level("debug").with_frames(2),
            scene,
        };

        config.save_to_file(&path).unwrap();
        let loaded = ApplicationConfig::load_validated(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_toml_sampling_override() {
        let text = r#"
            [scene]
            texture_filter = "Nearest"
            texture_wrap = "MirroredRepeat"
        "#;

        let config = ApplicationConfig::from_str_with_format(text, "app.toml").unwrap();
        assert_eq!(config.scene.texture_filter, FilterMode::Nearest);
        assert_eq!(config.scene.texture_wrap, WrapMode::MirroredRepeat);
        assert_eq!(config.scene.max_texture_slots, DEFAULT_TEXTURE_SLOTS);
    }

    #[test]
    fn test_ron_material_override() {
        let text = r#"(
            scene: (
                materials: [
                    (
                        tag: "rubber",
                        ambient_color: [0.1, 0.1, 0.1],
                        ambient_strength: 0.2,
                        diffuse_color: [0.05, 0.05, 0.05],
                        specular_color: [0.0, 0.0, 0.0],
                        shininess: 1.0,
                    ),
                ],
            ),
        )"#;

        let config = ApplicationConfig::from_str_with_format(text, "app.ron").unwrap();
        assert_eq!(config.scene.materials.len(), 1);
        assert_eq!(config.scene.materials[0].tag, "rubber");
        assert_eq!(config.scene.textures.len(), 8);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = ApplicationConfig::from_str_with_format("", "app.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let path = temp_config_path("bad_frames.toml");
        std::fs::write(&path, "[engine]\nframes = 0\n").unwrap();

        let result = ApplicationConfig::load_validated(&path);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        std::fs::remove_file(&path).ok();
    }
}
