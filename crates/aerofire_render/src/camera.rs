//! Chase camera projection
//!
//! The simulation decides where the camera sits (see `CameraPose`); this
//! turns that pose into the matrix the shader needs.

use aerofire_core::CameraPose;
use aerofire_math::mat4::{self, Mat4};

use crate::pipeline::{look_at_matrix, perspective_matrix};

/// Lens settings for the chase camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChaseCamera {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 2000.0,
        }
    }
}

impl ChaseCamera {
    pub fn new(fov: f32, near: f32, far: f32) -> Self {
        Self { fov, near, far }
    }

    pub fn view_matrix(&self, pose: &CameraPose) -> Mat4 {
        look_at_matrix(pose.eye, pose.target, pose.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        perspective_matrix(self.fov.to_radians(), aspect, self.near, self.far)
    }

    /// Combined projection * view for a pose
    pub fn view_projection(&self, pose: &CameraPose, aspect: f32) -> Mat4 {
        mat4::mul(self.projection_matrix(aspect), self.view_matrix(pose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerofire_math::Vec3;

    #[test]
    fn test_target_projects_to_screen_center() {
        let camera = ChaseCamera::default();
        let pose = CameraPose {
            eye: Vec3::new(0.0, 12.0, 10.0),
            target: Vec3::new(0.0, 10.0, 0.0),
            up: Vec3::Y,
        };
        let m = camera.view_projection(&pose, 16.0 / 9.0);

        let p = pose.target;
        let clip = [
            m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0],
            m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1],
            m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2],
            m[0][3] * p.x + m[1][3] * p.y + m[2][3] * p.z + m[3][3],
        ];
        assert!(clip[3] > 0.0);
        assert!((clip[0] / clip[3]).abs() < 1e-4);
        assert!((clip[1] / clip[3]).abs() < 1e-4);
        let depth = clip[2] / clip[3];
        assert!(depth > 0.0 && depth < 1.0);
    }
}
