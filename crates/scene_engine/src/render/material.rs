//! Material presets for the Phong scene shader
//!
//! A material is a named set of lighting coefficients. The registry is
//! filled once while preparing the scene and only read afterwards.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use crate::render::shader::{names, ShaderUniforms};

/// Lighting coefficients of a surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMaterial {
    /// Lookup tag
    pub tag: String,
    /// Ambient color (RGB)
    pub ambient_color: Vec3,
    /// Ambient contribution factor
    pub ambient_strength: f32,
    /// Diffuse color (RGB)
    pub diffuse_color: Vec3,
    /// Specular color (RGB)
    pub specular_color: Vec3,
    /// Specular exponent
    pub shininess: f32,
}

impl ObjectMaterial {
    /// Create a material from its coefficients
    pub fn new(
        tag: impl Into<String>,
        ambient_color: Vec3,
        ambient_strength: f32,
        diffuse_color: Vec3,
        specular_color: Vec3,
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.into(),
            ambient_color,
            ambient_strength,
            diffuse_color,
            specular_color,
            shininess,
        }
    }

    /// Write the `material.*` uniforms
    pub fn apply<S: ShaderUniforms + ?Sized>(&self, shader: &mut S) {
        shader.set_vec3(names::MATERIAL_AMBIENT_COLOR, self.ambient_color);
        shader.set_float(names::MATERIAL_AMBIENT_STRENGTH, self.ambient_strength);
        shader.set_vec3(names::MATERIAL_DIFFUSE_COLOR, self.diffuse_color);
        shader.set_vec3(names::MATERIAL_SPECULAR_COLOR, self.specular_color);
        shader.set_float(names::MATERIAL_SHININESS, self.shininess);
    }
}

/// Ordered tag → material list
#[derive(Debug, Clone, Default)]
pub struct MaterialRegistry {
    materials: Vec<ObjectMaterial>,
}

impl MaterialRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material
    pub fn define(&mut self, material: ObjectMaterial) {
        log::debug!("Defined material '{}'", material.tag);
        self.materials.push(material);
    }

    /// First material registered under `tag`
    pub fn find_material(&self, tag: &str) -> Option<&ObjectMaterial> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    /// Registered materials in definition order
    pub fn materials(&self) -> &[ObjectMaterial] {
        &self.materials
    }

    /// Number of materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether no material is defined
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Extend<ObjectMaterial> for MaterialRegistry {
    fn extend<I: IntoIterator<Item = ObjectMaterial>>(&mut self, iter: I) {
        for material in iter {
            self.define(material);
        }
    }
}

/// Material presets used by the desk scene
pub fn desk_materials() -> Vec<ObjectMaterial> {
    vec![
        ObjectMaterial::new("metal", Vec3::new(0.1, 0.1, 0.1), 0.4, Vec3::new(0.1, 0.1, 0.1), Vec3::new(0.6, 0.5, 0.4), 22.0),
        ObjectMaterial::new("cement", Vec3::new(0.2, 0.2, 0.2), 0.2, Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.4, 0.4, 0.4), 0.5),
        ObjectMaterial::new("wood", Vec3::new(0.4, 0.3, 0.1), 0.2, Vec3::new(0.3, 0.2, 0.1), Vec3::new(0.1, 0.1, 0.1), 0.3),
        ObjectMaterial::new("tile", Vec3::new(0.2, 0.3, 0.4), 0.3, Vec3::new(0.3, 0.2, 0.1), Vec3::new(0.4, 0.5, 0.6), 25.0),
        ObjectMaterial::new("glass", Vec3::new(0.4, 0.4, 0.4), 0.3, Vec3::new(0.3, 0.3, 0.3), Vec3::new(0.6, 0.6, 0.6), 85.0),
        ObjectMaterial::new("clay", Vec3::new(0.2, 0.2, 0.3), 0.3, Vec3::new(0.4, 0.4, 0.5), Vec3::new(0.2, 0.2, 0.4), 0.5),
        ObjectMaterial::new("plastic", Vec3::new(0.3, 0.3, 0.3), 0.5, Vec3::new(0.6, 0.6, 0.6), Vec3::new(0.8, 0.8, 0.8), 32.0),
        ObjectMaterial::new("lightplastic", Vec3::new(0.3, 0.3, 0.3), 0.5, Vec3::new(0.6, 0.6, 0.6), Vec3::new(0.8, 0.8, 0.8), 22.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_material_returns_coefficients() {
        let mut registry = MaterialRegistry::new();
        registry.extend(desk_materials());

        let glass = registry.find_material("glass").unwrap();
        assert_eq!(glass.shininess, 85.0);
        assert_eq!(glass.specular_color, Vec3::new(0.6, 0.6, 0.6));

        let wood = registry.find_material("wood").unwrap();
        assert_eq!(wood.ambient_color, Vec3::new(0.4, 0.3, 0.1));
        assert_eq!(wood.ambient_strength, 0.2);
    }

    #[test]
    fn test_missing_material() {
        let empty = MaterialRegistry::new();
        assert!(empty.is_empty());
        assert!(empty.find_material("metal").is_none());

        let mut registry = MaterialRegistry::new();
        registry.extend(desk_materials());
        assert!(registry.find_material("rubber").is_none());
    }

    #[test]
    fn test_definition_order_is_kept() {
        let mut registry = MaterialRegistry::new();
        registry.extend(desk_materials());

        let tags: Vec<&str> = registry.materials().iter().map(|m| m.tag.as_str()).collect();
        assert_eq!(
            tags,
            ["metal", "cement", "wood", "tile", "glass", "clay", "plastic", "lightplastic"]
        );
    }
}
