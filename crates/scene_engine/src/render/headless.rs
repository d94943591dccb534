//! Recording backends
//!
//! In-memory implementations of the three backend seams. They keep every
//! uniform write, mesh call and texture operation so a frame can be
//! inspected without a GPU. Used by the tests and by the `desk_scene`
//! dry-run binary.

use std::collections::HashMap;

use crate::assets::ImageData;
use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use crate::render::mesh::{MeshParams, Shape, ShapeKind, ShapeMeshes};
use crate::render::shader::ShaderUniforms;
use crate::render::texture::{TextureBackend, TextureId, TextureParams};
use crate::render::{RenderError, RenderResult};

/// A uniform value as written by the scene
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// mat4
    Mat4(Mat4),
    /// vec4
    Vec4(Vec4),
    /// vec3
    Vec3(Vec3),
    /// vec2
    Vec2(Vec2),
    /// float
    Float(f32),
    /// int
    Int(i32),
    /// bool
    Bool(bool),
    /// sampler2D unit
    Sampler(i32),
}

/// Shader that remembers every uniform write
#[derive(Debug, Default)]
pub struct RecordingShader {
    current: HashMap<String, UniformValue>,
    writes: Vec<(String, UniformValue)>,
}

impl RecordingShader {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value written to `name`
    pub fn value(&self, name: &str) -> Option<&UniformValue> {
        self.current.get(name)
    }

    /// Every write in order
    pub fn writes(&self) -> &[(String, UniformValue)] {
        &self.writes
    }

    /// Names written, in order
    pub fn written_names(&self) -> Vec<&str> {
        self.writes.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Forget the write log but keep current values
    pub fn clear_log(&mut self) {
        self.writes.clear();
    }

    fn record(&mut self, name: &str, value: UniformValue) {
        log::trace!("uniform {} = {:?}", name, value);
        self.current.insert(name.to_string(), value.clone());
        self.writes.push((name.to_string(), value));
    }
}

impl ShaderUniforms for RecordingShader {
    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.record(name, UniformValue::Mat4(*value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.record(name, UniformValue::Vec4(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.record(name, UniformValue::Vec3(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.record(name, UniformValue::Vec2(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, UniformValue::Float(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.record(name, UniformValue::Int(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.record(name, UniformValue::Bool(value));
    }

    fn set_sampler2d(&mut self, name: &str, slot: i32) {
        self.record(name, UniformValue::Sampler(slot));
    }
}

/// Mesh utility that records loads and draws
#[derive(Debug, Default)]
pub struct RecordingMeshes {
    loaded: Vec<(ShapeKind, MeshParams)>,
    draws: Vec<Shape>,
}

impl RecordingMeshes {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Mesh kinds loaded so far, in load order
    pub fn loaded(&self) -> Vec<ShapeKind> {
        self.loaded.iter().map(|(kind, _)| *kind).collect()
    }

    /// Parameters `kind` was loaded with
    pub fn params(&self, kind: ShapeKind) -> Option<&MeshParams> {
        self.loaded.iter().find(|(k, _)| *k == kind).map(|(_, params)| params)
    }

    /// Every draw in order
    pub fn draws(&self) -> &[Shape] {
        &self.draws
    }

    fn is_loaded(&self, kind: ShapeKind) -> bool {
        self.loaded.iter().any(|(k, _)| *k == kind)
    }
}

impl ShapeMeshes for RecordingMeshes {
    fn load_mesh(&mut self, kind: ShapeKind, params: &MeshParams) -> RenderResult<()> {
        if !self.is_loaded(kind) {
            self.loaded.push((kind, *params));
        }
        Ok(())
    }

    fn draw_mesh(&mut self, shape: Shape) -> RenderResult<()> {
        if !self.is_loaded(shape.kind()) {
            return Err(RenderError::MeshNotLoaded(shape.kind()));
        }
        self.draws.push(shape);
        Ok(())
    }
}

/// What the recorder knows about an uploaded texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTexture {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Upload parameters
    pub params: TextureParams,
}

/// Texture backend that hands out sequential ids
#[derive(Debug)]
pub struct RecordingTextures {
    next_id: u32,
    textures: HashMap<TextureId, RecordedTexture>,
    bindings: HashMap<u32, TextureId>,
    deleted: Vec<TextureId>,
}

impl RecordingTextures {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self {
            // 0 is the "no texture" name in most APIs
            next_id: 1,
            textures: HashMap::new(),
            bindings: HashMap::new(),
            deleted: Vec::new(),
        }
    }

    /// Live texture lookup
    pub fn texture(&self, id: TextureId) -> Option<&RecordedTexture> {
        self.textures.get(&id)
    }

    /// Number of live textures
    pub fn live_count(&self) -> usize {
        self.textures.len()
    }

    /// Texture bound to unit `slot`
    pub fn bound(&self, slot: u32) -> Option<TextureId> {
        self.bindings.get(&slot).copied()
    }

    /// Ids released so far
    pub fn deleted(&self) -> &[TextureId] {
        &self.deleted
    }
}

impl Default for RecordingTextures {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureBackend for RecordingTextures {
    fn create_texture(&mut self, image: &ImageData, params: &TextureParams) -> RenderResult<TextureId> {
        if image.width == 0 || image.height == 0 {
            return Err(RenderError::ResourceCreationFailed(format!(
                "empty texture {}x{}",
                image.width, image.height
            )));
        }

        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.textures.insert(
            id,
            RecordedTexture {
                width: image.width,
                height: image.height,
                params: *params,
            },
        );
        Ok(id)
    }

    fn bind_texture(&mut self, slot: u32, id: TextureId) -> RenderResult<()> {
        if !self.textures.contains_key(&id) {
            return Err(RenderError::BackendError(format!("texture {:?} does not exist", id)));
        }
        self.bindings.insert(slot, id);
        Ok(())
    }

    fn delete_texture(&mut self, id: TextureId) -> RenderResult<()> {
        if self.textures.remove(&id).is_none() {
            return Err(RenderError::BackendError(format!("texture {:?} does not exist", id)));
        }
        self.bindings.retain(|_, bound| *bound != id);
        self.deleted.push(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::texture::PixelFormat;

    #[test]
    fn test_drawing_unloaded_mesh_fails() {
        let mut meshes = RecordingMeshes::new();
        let err = meshes.draw_mesh(Shape::Torus).unwrap_err();
        assert!(matches!(err, RenderError::MeshNotLoaded(ShapeKind::Torus)));

        meshes.load_mesh(ShapeKind::Torus, &MeshParams::default()).unwrap();
        meshes.draw_mesh(Shape::Torus).unwrap();
        assert_eq!(meshes.draws(), &[Shape::Torus]);
    }

    #[test]
    fn test_texture_lifecycle() {
        let mut textures = RecordingTextures::new();
        let image = ImageData::solid_color(2, 2, [0, 0, 0, 255]);
        let params = TextureParams::new(PixelFormat::Rgba8);

        let id = textures.create_texture(&image, &params).unwrap();
        assert_eq!(id, TextureId(1));
        textures.bind_texture(0, id).unwrap();
        assert_eq!(textures.bound(0), Some(id));

        textures.delete_texture(id).unwrap();
        assert_eq!(textures.live_count(), 0);
        assert_eq!(textures.bound(0), None);
        assert_eq!(textures.deleted(), &[id]);
        assert!(textures.delete_texture(id).is_err());
    }

    #[test]
    fn test_shader_keeps_latest_value() {
        let mut shader = RecordingShader::new();
        shader.set_int("bUseTexture", 0);
        shader.set_int("bUseTexture", 1);

        assert_eq!(shader.value("bUseTexture"), Some(&UniformValue::Int(1)));
        assert_eq!(shader.writes().len(), 2);
    }
}
