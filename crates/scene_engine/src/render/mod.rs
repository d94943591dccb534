//! Rendering seams and scene-side render state
//!
//! The scene composer sits on top of three host collaborators, each behind
//! a trait:
//!
//! - [`ShaderUniforms`]: named uniform writes into the active program
//! - [`ShapeMeshes`]: primitive mesh load and draw
//! - [`TextureBackend`]: texture upload, binding and release
//!
//! Alongside them live the two lookup tables the scene fills during setup
//! ([`TextureRegistry`], [`MaterialRegistry`]) and the light definitions.
//! [`headless`] provides recording implementations of all three traits.

pub mod headless;
pub mod lighting;
pub mod material;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use lighting::{apply_lights, LightSource, MAX_LIGHT_SOURCES};
pub use material::{MaterialRegistry, ObjectMaterial};
pub use mesh::{CylinderParts, MeshParams, Shape, ShapeKind, ShapeMeshes};
pub use shader::ShaderUniforms;
pub use texture::{
    PixelFormat, TextureBackend, TextureEntry, TextureId, TextureParams, TextureRegistry,
    MISSING_TEXTURE_SLOT,
};

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Resource creation or management failed
    ///
    /// Occurs when the backend cannot create a texture or mesh, typically
    /// because of invalid data or exhausted GPU memory.
    #[error("Resource creation failed: {0}")]
    ResourceCreationFailed(String),

    /// A draw was requested for a primitive that was never loaded
    #[error("Mesh not loaded: {0}")]
    MeshNotLoaded(ShapeKind),

    /// Every texture slot is already taken
    #[error("All {capacity} texture slots are in use")]
    TextureSlotsExhausted {
        /// Number of slots in the registry
        capacity: usize,
    },

    /// Backend-specific error occurred
    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
