//! Rendering for Aerofire
//!
//! This crate draws a [`RenderSnapshot`] with wgpu. It never touches the
//! simulation directly.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::ChaseCamera`] - Lens settings applied to the snapshot's camera pose
//! - [`pipeline::ScenePipeline`] - Instanced box rendering with lighting
//! - [`renderable::SceneInstances`] - Converts a snapshot into GPU instances

pub mod context;
pub mod camera;
pub mod pipeline;
pub mod renderable;

// Re-export core types for convenience
pub use aerofire_core::{RenderSnapshot, CameraPose, Variant};

// Re-export renderable for easy access
pub use renderable::{SceneInstances, Checkerboard, Palette, RING_SEGMENTS};
