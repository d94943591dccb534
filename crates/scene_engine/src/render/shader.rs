//! Shader uniform interface
//!
//! The scene composer never compiles or binds shaders itself. It only
//! writes named uniforms through [`ShaderUniforms`], which the host's
//! shader manager implements.

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};

/// Uniform names understood by the scene shader
pub mod names {
    /// Model matrix of the object about to be drawn
    pub const MODEL: &str = "model";
    /// Flat RGBA color used when texturing is off
    pub const OBJECT_COLOR: &str = "objectColor";
    /// Sampler slot of the object texture
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    /// Whether the fragment shader samples `objectTexture`
    pub const USE_TEXTURE: &str = "bUseTexture";
    /// Whether the fragment shader applies lighting
    pub const USE_LIGHTING: &str = "bUseLighting";
    /// Texture coordinate multiplier
    pub const UV_SCALE: &str = "UVscale";

    /// Material ambient color
    pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
    /// Material ambient strength
    pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
    /// Material diffuse color
    pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
    /// Material specular color
    pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
    /// Material shininess exponent
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    /// Name of a field of the `index`-th entry of the `lightSources` array
    pub fn light_source(index: usize, field: &str) -> String {
        format!("lightSources[{}].{}", index, field)
    }
}

/// Named uniform setter implemented by the host's shader manager
///
/// Every setter targets the currently active program. Implementations are
/// free to ignore names the program does not declare.
pub trait ShaderUniforms {
    /// Set a 4x4 matrix uniform
    fn set_mat4(&mut self, name: &str, value: &Mat4);

    /// Set a vec4 uniform
    fn set_vec4(&mut self, name: &str, value: Vec4);

    /// Set a vec3 uniform
    fn set_vec3(&mut self, name: &str, value: Vec3);

    /// Set a vec2 uniform
    fn set_vec2(&mut self, name: &str, value: Vec2);

    /// Set a float uniform
    fn set_float(&mut self, name: &str, value: f32);

    /// Set an int uniform
    fn set_int(&mut self, name: &str, value: i32);

    /// Set a bool uniform
    fn set_bool(&mut self, name: &str, value: bool);

    /// Point a sampler2D uniform at a texture unit
    ///
    /// `-1` selects no unit; shaders treat it as an unbound sampler.
    fn set_sampler2d(&mut self, name: &str, slot: i32);
}
