//! GPU-compatible data types for the scene pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use aerofire_math::mat4::{self, Mat4};
use aerofire_math::{Quat, Vec3};
use bytemuck::{Pod, Zeroable};

/// A vertex of the shared unit cube mesh
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BoxVertex {
    /// Position, corners at ±1
    pub position: [f32; 3],
    /// Outward face normal
    pub normal: [f32; 3],
}

/// One drawn box: a model matrix and a colour
///
/// The cube mesh spans ±1, so the scale part of `model` is the box's
/// half-extents.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BoxInstance {
    /// Model matrix, column-major
    pub model: [[f32; 4]; 4],
    /// RGBA colour; alpha below 1 is blended
    pub color: [f32; 4],
}

impl BoxInstance {
    /// Box at `position` with the given rotation and half-extents
    pub fn new(position: Vec3, rotation: Quat, half_extents: Vec3, color: [f32; 4]) -> Self {
        Self {
            model: mat4::from_trs(position, rotation, half_extents),
            color,
        }
    }

    /// Box placed in a parent's frame
    ///
    /// `local` is the box relative to the parent; the result is
    /// `parent * local` in world space.
    pub fn attached(parent: &Mat4, local: &BoxInstance) -> Self {
        Self {
            model: mat4::mul(*parent, local.model),
            color: local.color,
        }
    }

    /// World-space centre of the box
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.model[3][0], self.model[3][1], self.model[3][2])
    }
}

/// Uniforms for the scene pass
/// Layout: 96 bytes total (must match scene.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Projection * view (64 bytes)
    pub view_projection: [[f32; 4]; 4],
    /// Direction towards the light + ambient term (16 bytes)
    pub light_dir: [f32; 3],
    pub ambient_strength: f32,
    /// Diffuse term + padding (16 bytes)
    pub diffuse_strength: f32,
    pub _padding: [f32; 3],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_projection: mat4::IDENTITY,
            light_dir: [0.5, 1.0, 0.3],
            ambient_strength: 0.3,
            diffuse_strength: 0.7,
            _padding: [0.0; 3],
        }
    }
}

/// Upper bound on boxes drawn in one frame
pub const MAX_INSTANCES: usize = 4096;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_box_vertex_size() {
        // 3 floats position + 3 floats normal = 24 bytes
        assert_eq!(size_of::<BoxVertex>(), 24);
    }

    #[test]
    fn test_box_instance_size() {
        // 16 floats model + 4 floats colour = 80 bytes
        assert_eq!(size_of::<BoxInstance>(), 80);
    }

    #[test]
    fn test_scene_uniforms_size() {
        // 16 floats matrix + 3 light + 1 ambient + 1 diffuse + 3 padding = 96 bytes
        assert_eq!(size_of::<SceneUniforms>(), 96);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<BoxVertex>(), 4);
        assert_eq!(std::mem::align_of::<BoxInstance>(), 4);
        assert_eq!(std::mem::align_of::<SceneUniforms>(), 4);
    }

    #[test]
    fn test_instance_center() {
        let b = BoxInstance::new(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY, Vec3::ONE, [1.0; 4]);
        assert_eq!(b.center(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_attached_offsets_by_parent() {
        let parent = mat4::translation(Vec3::new(0.0, 10.0, 0.0));
        let local = BoxInstance::new(Vec3::new(2.0, 0.0, 0.0), Quat::IDENTITY, Vec3::ONE, [1.0; 4]);
        let world = BoxInstance::attached(&parent, &local);
        assert_eq!(world.center(), Vec3::new(2.0, 10.0, 0.0));
    }
}
