//! # Scene Engine
//!
//! A fixed-layout 3D scene composer. It loads textures and material
//! presets, places primitive meshes at hand-authored transforms and sets
//! the per-object shader state before each draw call.
//!
//! ## Features
//!
//! - **Backend seams**: shader uniforms, primitive meshes and texture upload
//!   sit behind traits the host implements
//! - **Tag registries**: textures and materials looked up by string tag
//! - **Configurable content**: textures, materials and lights load from TOML or RON
//! - **Headless backends**: record every call for tests and dry runs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::load_from_file("desk.toml")?;
//!     logging::init_with_level(&config.engine.log_level);
//!
//!     let mut scene = HeadlessScene::headless(config.scene);
//!     scene.prepare_scene()?;
//!     for _ in 0..config.engine.frames {
//!         scene.render_scene();
//!     }
//!     scene.destroy_textures();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod core;

pub mod assets;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for scene users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, ImageData},
        core::config::{ApplicationConfig, Config, ConfigError, EngineConfig, SceneConfig},
        foundation::{
            logging,
            math::{Mat4, Vec2, Vec3, Vec4},
        },
        render::{
            CylinderParts, MaterialRegistry, ObjectMaterial, RenderError, Shape, ShapeKind,
            ShapeMeshes, ShaderUniforms, TextureBackend, TextureRegistry,
        },
        scene::{
            DrawInstruction, FrameStats, HeadlessScene, ObjectTransform, PrepareReport,
            SceneError, SceneManager,
        },
    };
}
