//! Scene composition
//!
//! The desk scene is a list of [`DrawInstruction`]s replayed every frame by
//! a [`SceneManager`]. Each instruction places one primitive with an
//! [`ObjectTransform`] and names the texture and material it is shaded with.

pub mod draw;
pub mod layout;
pub mod scene_manager;
pub mod transform;

pub use draw::DrawInstruction;
pub use layout::desk_layout;
pub use scene_manager::{FrameStats, HeadlessScene, PrepareReport, SceneManager};
pub use transform::ObjectTransform;

use crate::assets::AssetError;
use crate::render::RenderError;

/// Scene errors
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Image decoding failed
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// A backend rejected a texture or mesh operation
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// The scene was already prepared
    #[error("Scene is already prepared")]
    AlreadyPrepared,
}
