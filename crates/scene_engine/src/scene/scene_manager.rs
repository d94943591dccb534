//! # Scene Manager
//!
//! Owns the three host collaborators and the two lookup tables, prepares
//! the scene once and replays its draw list every frame.
//!
//! Preparation runs in a fixed order: textures are loaded and bound,
//! materials defined, lights written, then every primitive mesh loaded.
//! Setup failures are logged and preparation carries on; rendering always
//! runs, falling back to the `-1` sampler for textures that never loaded.

use std::path::Path;

use crate::assets::{AssetError, ImageData};
use crate::core::config::SceneConfig;
use crate::foundation::math::{Vec2, Vec4};
use crate::render::headless::{RecordingMeshes, RecordingShader, RecordingTextures};
use crate::render::lighting::apply_lights;
use crate::render::material::{MaterialRegistry, ObjectMaterial};
use crate::render::mesh::{MeshParams, ShapeKind, ShapeMeshes};
use crate::render::shader::{names, ShaderUniforms};
use crate::render::texture::{
    PixelFormat, TextureBackend, TextureId, TextureParams, TextureRegistry, MISSING_TEXTURE_SLOT,
};
use crate::render::RenderError;
use crate::scene::draw::DrawInstruction;
use crate::scene::layout::desk_layout;
use crate::scene::transform::ObjectTransform;
use crate::scene::SceneError;

/// Outcome of [`SceneManager::prepare_scene`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrepareReport {
    /// Textures uploaded and registered
    pub textures_loaded: usize,
    /// Tags of textures that failed to load
    pub texture_failures: Vec<String>,
    /// Material presets defined
    pub materials_defined: usize,
    /// Light sources written to the shader
    pub lights_written: usize,
    /// Primitive meshes loaded
    pub meshes_loaded: usize,
}

impl PrepareReport {
    /// Whether every setup step succeeded
    pub fn is_complete(&self) -> bool {
        self.texture_failures.is_empty() && self.meshes_loaded == ShapeKind::ALL.len()
    }
}

/// Outcome of one [`SceneManager::render_scene`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Draw calls issued
    pub draws: usize,
    /// Draw calls the mesh backend rejected
    pub failed_draws: usize,
}

/// Fixed-layout scene over a shader, a mesh utility and a texture backend
pub struct SceneManager<S, M, G>
where
    S: ShaderUniforms,
    M: ShapeMeshes,
    G: TextureBackend,
{
    shader: S,
    meshes: M,
    texture_backend: G,
    config: SceneConfig,
    textures: TextureRegistry,
    materials: MaterialRegistry,
    instructions: Vec<DrawInstruction>,
    prepared: bool,
    frames_rendered: u64,
}

impl<S, M, G> SceneManager<S, M, G>
where
    S: ShaderUniforms,
    M: ShapeMeshes,
    G: TextureBackend,
{
    /// Create a manager for the desk scene
    pub fn new(shader: S, meshes: M, texture_backend: G, config: SceneConfig) -> Self {
        Self::with_layout(shader, meshes, texture_backend, config, desk_layout())
    }

    /// Create a manager that draws `instructions` instead of the desk scene
    pub fn with_layout(
        shader: S,
        meshes: M,
        texture_backend: G,
        config: SceneConfig,
        instructions: Vec<DrawInstruction>,
    ) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("Scene configuration is invalid: {}", e);
        }

        Self {
            shader,
            meshes,
            texture_backend,
            textures: TextureRegistry::new(config.max_texture_slots),
            materials: MaterialRegistry::new(),
            config,
            instructions,
            prepared: false,
            frames_rendered: 0,
        }
    }

    /// Decode an image file, upload it and register it under `tag`
    ///
    /// Returns the sampler slot the texture occupies. Failures are logged
    /// before being returned.
    pub fn create_texture(&mut self, path: impl AsRef<Path>, tag: &str) -> Result<usize, SceneError> {
        let path = path.as_ref();
        self.try_create_texture(path, tag).map_err(|e| {
            log::error!("Could not load texture '{}' from {}: {}", tag, path.display(), e);
            e
        })
    }

    fn try_create_texture(&mut self, path: &Path, tag: &str) -> Result<usize, SceneError> {
        if self.textures.len() >= self.textures.capacity() {
            return Err(RenderError::TextureSlotsExhausted {
                capacity: self.textures.capacity(),
            }
            .into());
        }

        let image = ImageData::from_file(path, self.config.flip_vertically)?;
        let format = PixelFormat::for_channels(image.channels)
            .ok_or(AssetError::UnsupportedChannels(image.channels))?;

        let params = TextureParams::new(format)
            .with_filter(self.config.texture_filter)
            .with_wrap(self.config.texture_wrap);
        let id = self.texture_backend.create_texture(&image, &params)?;
        let slot = self.textures.register(tag, id)?;

        log::debug!(
            "Registered texture '{}' ({}x{}, {} channels) into slot {}",
            tag,
            image.width,
            image.height,
            image.channels,
            slot
        );
        Ok(slot)
    }

    /// Bind every registered texture to the unit matching its slot
    pub fn bind_textures(&mut self) -> Result<(), SceneError> {
        for (slot, entry) in self.textures.entries().iter().enumerate() {
            let unit = u32::try_from(slot)
                .map_err(|_| RenderError::BackendError(format!("texture unit {} out of range", slot)))?;
            self.texture_backend.bind_texture(unit, entry.id)?;
            log::debug!("Bound texture '{}' to unit {}", entry.tag, unit);
        }
        Ok(())
    }

    /// Release every registered texture
    ///
    /// Returns how many handles the backend released. Textures the backend
    /// fails to release stay registered so a later call can retry. Not
    /// called on drop; the host decides when its GPU context is still valid.
    pub fn destroy_textures(&mut self) -> usize {
        let backend = &mut self.texture_backend;
        let mut released = 0;

        self.textures.retain(|entry| match backend.delete_texture(entry.id) {
            Ok(()) => {
                released += 1;
                false
            }
            Err(e) => {
                log::warn!("Failed to release texture '{}': {}", entry.tag, e);
                true
            }
        });

        log::debug!("Released {} textures, {} still held", released, self.textures.len());
        released
    }

    /// Handle of the texture registered under `tag`
    pub fn find_texture_id(&self, tag: &str) -> Option<TextureId> {
        self.textures.find_texture_id(tag)
    }

    /// Sampler slot of the texture registered under `tag`
    pub fn find_texture_slot(&self, tag: &str) -> Option<usize> {
        self.textures.find_texture_slot(tag)
    }

    /// Material registered under `tag`
    pub fn find_material(&self, tag: &str) -> Option<&ObjectMaterial> {
        self.materials.find_material(tag)
    }

    /// Write the model matrix for `transform`
    pub fn set_transformations(&mut self, transform: &ObjectTransform) {
        self.shader.set_mat4(names::MODEL, &transform.to_matrix());
    }

    /// Shade the next draw with a flat color
    pub fn set_shader_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.shader.set_int(names::USE_TEXTURE, 0);
        self.shader
            .set_vec4(names::OBJECT_COLOR, Vec4::new(red, green, blue, alpha));
    }

    /// Shade the next draw with the texture registered under `tag`
    ///
    /// An unknown tag selects sampler `-1`.
    pub fn set_shader_texture(&mut self, tag: &str) {
        self.shader.set_int(names::USE_TEXTURE, 1);

        let slot = self.textures.sampler_slot(tag);
        if slot == MISSING_TEXTURE_SLOT {
            log::warn!("No texture registered under '{}'", tag);
        }
        self.shader.set_sampler2d(names::OBJECT_TEXTURE, slot);
    }

    /// Scale texture coordinates for the next draw
    pub fn set_texture_uv_scale(&mut self, u: f32, v: f32) {
        self.shader.set_vec2(names::UV_SCALE, Vec2::new(u, v));
    }

    /// Write the material registered under `tag`
    ///
    /// Nothing is written when no materials are defined or the tag is
    /// unknown. Returns whether the material was applied.
    pub fn set_shader_material(&mut self, tag: &str) -> bool {
        if self.materials.is_empty() {
            return false;
        }

        match self.materials.find_material(tag) {
            Some(material) => {
                material.apply(&mut self.shader);
                true
            }
            None => {
                log::warn!("No material defined under '{}'", tag);
                false
            }
        }
    }

    /// Load and bind every configured texture
    ///
    /// Returns the tags that failed to load.
    pub fn load_scene_textures(&mut self) -> Vec<String> {
        let sources = self.config.textures.clone();
        let mut failures = Vec::new();

        for source in &sources {
            let path = self.config.texture_path(source);
            if self.create_texture(&path, &source.tag).is_err() {
                failures.push(source.tag.clone());
            }
        }

        if let Err(e) = self.bind_textures() {
            log::error!("Failed to bind scene textures: {}", e);
        }
        failures
    }

    /// Register the configured material presets
    pub fn define_object_materials(&mut self) -> usize {
        self.materials.extend(self.config.materials.iter().cloned());
        self.config.materials.len()
    }

    /// Write the configured lights and enable lighting
    pub fn setup_scene_lights(&mut self) -> usize {
        apply_lights(&self.config.lights, &mut self.shader)
    }

    /// Load every primitive mesh the scene draws
    pub fn load_meshes(&mut self) -> usize {
        let params = MeshParams {
            torus_thickness: self.config.torus_thickness,
        };

        let mut loaded = 0;
        for kind in ShapeKind::ALL {
            match self.meshes.load_mesh(kind, &params) {
                Ok(()) => loaded += 1,
                Err(e) => log::error!("Failed to load {} mesh: {}", kind, e),
            }
        }
        loaded
    }

    /// Load everything the scene needs before the first frame
    ///
    /// Runs once per manager; later calls fail with
    /// [`SceneError::AlreadyPrepared`] and change nothing.
    pub fn prepare_scene(&mut self) -> Result<PrepareReport, SceneError> {
        if self.prepared {
            return Err(SceneError::AlreadyPrepared);
        }
        self.prepared = true;

        let texture_failures = self.load_scene_textures();
        let report = PrepareReport {
            textures_loaded: self.textures.len(),
            texture_failures,
            materials_defined: self.define_object_materials(),
            lights_written: self.setup_scene_lights(),
            meshes_loaded: self.load_meshes(),
        };

        if report.is_complete() {
            log::info!(
                "Scene prepared: {} textures, {} materials, {} lights, {} meshes",
                report.textures_loaded,
                report.materials_defined,
                report.lights_written,
                report.meshes_loaded
            );
        } else {
            log::warn!("Scene prepared with errors: {:?}", report);
        }
        Ok(report)
    }

    /// Set the per-object state for `instruction` and draw it
    pub fn draw(&mut self, instruction: &DrawInstruction) -> Result<(), SceneError> {
        self.set_transformations(&instruction.transform);

        if let Some(color) = instruction.color {
            self.set_shader_color(color.x, color.y, color.z, color.w);
        }
        if let Some(tag) = &instruction.texture {
            self.set_shader_texture(tag);
        }
        self.set_texture_uv_scale(instruction.uv_scale.x, instruction.uv_scale.y);
        if let Some(tag) = &instruction.material {
            self.set_shader_material(tag);
        }

        self.meshes.draw_mesh(instruction.shape)?;
        Ok(())
    }

    /// Draw one frame
    pub fn render_scene(&mut self) -> FrameStats {
        let instructions = std::mem::take(&mut self.instructions);
        let mut stats = FrameStats::default();

        for instruction in &instructions {
            stats.draws += 1;
            if let Err(e) = self.draw(instruction) {
                stats.failed_draws += 1;
                log::error!("Failed to draw {}: {}", instruction.label, e);
            }
        }

        self.instructions = instructions;
        self.frames_rendered += 1;
        log::trace!("Frame {} drew {} objects", self.frames_rendered, stats.draws);
        stats
    }

    /// The shader collaborator
    pub fn shader(&self) -> &S {
        &self.shader
    }

    /// The mesh collaborator
    pub fn meshes(&self) -> &M {
        &self.meshes
    }

    /// The texture collaborator
    pub fn texture_backend(&self) -> &G {
        &self.texture_backend
    }

    /// Registered textures
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// Defined materials
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// Scene configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Draw list, in order
    pub fn instructions(&self) -> &[DrawInstruction] {
        &self.instructions
    }

    /// Frames drawn so far
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Mutable access to the shader collaborator
    pub fn shader_mut(&mut self) -> &mut S {
        &mut self.shader
    }
}

/// Scene over the recording backends
pub type HeadlessScene = SceneManager<RecordingShader, RecordingMeshes, RecordingTextures>;

impl HeadlessScene {
    /// Create a desk scene that records instead of rendering
    pub fn headless(config: SceneConfig) -> Self {
        Self::new(
            RecordingShader::new(),
            RecordingMeshes::new(),
            RecordingTextures::new(),
            config,
        )
    }
}
