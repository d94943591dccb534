//! Draw instructions
//!
//! One [`DrawInstruction`] holds all the state the scene sets before a
//! single mesh draw.

use crate::foundation::math::{Vec2, Vec4};
use crate::render::mesh::Shape;
use crate::scene::transform::ObjectTransform;

/// State for one draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction {
    /// Human-readable name for logs
    pub label: String,
    /// Primitive to draw
    pub shape: Shape,
    /// Placement
    pub transform: ObjectTransform,
    /// Flat RGBA color, applied before the texture
    pub color: Option<Vec4>,
    /// Texture tag
    pub texture: Option<String>,
    /// Texture coordinate multiplier
    pub uv_scale: Vec2,
    /// Material tag
    pub material: Option<String>,
}

impl DrawInstruction {
    /// Untextured, unlit-material draw of `shape` at `transform`
    pub fn new(label: impl Into<String>, shape: Shape, transform: ObjectTransform) -> Self {
        Self {
            label: label.into(),
            shape,
            transform,
            color: None,
            texture: None,
            uv_scale: Vec2::new(1.0, 1.0),
            material: None,
        }
    }

    /// Sample the texture registered under `tag`
    pub fn textured(mut self, tag: impl Into<String>) -> Self {
        self.texture = Some(tag.into());
        self
    }

    /// Use a flat color
    pub fn colored(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.color = Some(Vec4::new(r, g, b, a));
        self
    }

    /// Scale texture coordinates
    pub fn uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = Vec2::new(u, v);
        self
    }

    /// Light with the material registered under `tag`
    pub fn material(mut self, tag: impl Into<String>) -> Self {
        self.material = Some(tag.into());
        self
    }
}
