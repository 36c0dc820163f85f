//! Rendering pipeline components
//!
//! A single instanced pass draws every box in the scene.

pub mod types;
pub mod scene_pipeline;

// Re-export types
pub use types::{BoxVertex, BoxInstance, SceneUniforms, MAX_INSTANCES};

// Re-export pipeline
pub use scene_pipeline::{ScenePipeline, unit_cube, perspective_matrix, look_at_matrix};
