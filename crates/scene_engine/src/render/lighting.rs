//! Scene light sources
//!
//! The scene shader supports up to [`MAX_LIGHT_SOURCES`] point lights,
//! written to the `lightSources[]` uniform array.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use crate::render::shader::{names, ShaderUniforms};

/// Number of entries in the shader's `lightSources` array
pub const MAX_LIGHT_SOURCES: usize = 4;

/// A point light as the scene shader sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightSource {
    /// World position
    pub position: Vec3,
    /// Ambient contribution
    pub ambient_color: Vec3,
    /// Diffuse contribution
    pub diffuse_color: Vec3,
    /// Specular contribution
    pub specular_color: Vec3,
    /// Specular highlight exponent
    pub focal_strength: f32,
    /// Specular highlight multiplier
    pub specular_intensity: f32,
}

impl LightSource {
    /// Create a light with grey ambient/diffuse/specular terms
    pub fn point(position: Vec3, ambient: f32, diffuse: f32, specular: f32) -> Self {
        Self {
            position,
            ambient_color: Vec3::repeat(ambient),
            diffuse_color: Vec3::repeat(diffuse),
            specular_color: Vec3::repeat(specular),
            focal_strength: 32.0,
            specular_intensity: 0.1,
        }
    }

    /// Set the specular highlight shape
    pub fn with_focus(mut self, focal_strength: f32, specular_intensity: f32) -> Self {
        self.focal_strength = focal_strength;
        self.specular_intensity = specular_intensity;
        self
    }

    /// Write this light into slot `index` of `lightSources`
    pub fn apply<S: ShaderUniforms + ?Sized>(&self, index: usize, shader: &mut S) {
        shader.set_vec3(&names::light_source(index, "position"), self.position);
        shader.set_vec3(&names::light_source(index, "ambientColor"), self.ambient_color);
        shader.set_vec3(&names::light_source(index, "diffuseColor"), self.diffuse_color);
        shader.set_vec3(&names::light_source(index, "specularColor"), self.specular_color);
        shader.set_float(&names::light_source(index, "focalStrength"), self.focal_strength);
        shader.set_float(&names::light_source(index, "specularIntensity"), self.specular_intensity);
    }
}

/// Write `lights` to the shader and switch lighting on
///
/// Lights past [`MAX_LIGHT_SOURCES`] are dropped with a warning. Returns the
/// number of lights written.
pub fn apply_lights<S: ShaderUniforms + ?Sized>(lights: &[LightSource], shader: &mut S) -> usize {
    if lights.len() > MAX_LIGHT_SOURCES {
        log::warn!(
            "{} light sources configured, only the first {} are used",
            lights.len(),
            MAX_LIGHT_SOURCES
        );
    }

    let used = lights.len().min(MAX_LIGHT_SOURCES);
    for (index, light) in lights.iter().take(used).enumerate() {
        light.apply(index, shader);
    }

    shader.set_bool(names::USE_LIGHTING, true);
    used
}

/// Overhead key light plus two side fills used by the desk scene
pub fn desk_lights() -> Vec<LightSource> {
    vec![
        LightSource::point(Vec3::new(0.0, 15.0, -5.0), 0.05, 0.7, 0.3).with_focus(10.0, 0.1),
        LightSource::point(Vec3::new(-10.0, 15.0, -5.0), 0.05, 0.6, 0.2).with_focus(30.0, 0.1),
        LightSource::point(Vec3::new(10.0, 15.0, -5.0), 0.02, 0.8, 0.6).with_focus(30.0, 0.6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::headless::{RecordingShader, UniformValue};

    #[test]
    fn test_apply_lights_writes_array_entries() {
        let mut shader = RecordingShader::new();
        let used = apply_lights(&desk_lights(), &mut shader);

        assert_eq!(used, 3);
        assert_eq!(
            shader.value("lightSources[2].position"),
            Some(&UniformValue::Vec3(Vec3::new(10.0, 15.0, -5.0)))
        );
        assert_eq!(
            shader.value("lightSources[1].focalStrength"),
            Some(&UniformValue::Float(30.0))
        );
        assert_eq!(shader.value("lightSources[3].position"), None);
        assert_eq!(shader.value(names::USE_LIGHTING), Some(&UniformValue::Bool(true)));
    }

    #[test]
    fn test_extra_lights_are_dropped() {
        let lights = vec![LightSource::point(Vec3::zeros(), 0.1, 0.1, 0.1); 6];
        let mut shader = RecordingShader::new();

        assert_eq!(apply_lights(&lights, &mut shader), MAX_LIGHT_SOURCES);
        assert!(shader.value("lightSources[4].position").is_none());
    }
}
