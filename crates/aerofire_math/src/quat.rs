//! Unit quaternion for representing 3D orientations
//!
//! A quaternion has 4 components:
//! - 1 scalar (`w`)
//! - 3 vector components (`x`, `y`, `z`)
//!
//! For a rotation by angle θ about unit axis `a`:
//! q = cos(θ/2) + sin(θ/2) * a

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use crate::Vec3;

/// Quaternion for representing rotations
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quat {
    /// Vector part, X
    pub x: f32,
    /// Vector part, Y
    pub y: f32,
    /// Vector part, Z
    pub z: f32,
    /// Scalar part
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a quaternion for a rotation of `angle` radians about `axis`
    ///
    /// The axis does not need to be normalized.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let axis = axis.normalized();
        let half = angle * 0.5;
        let sin_h = half.sin();
        Self {
            x: axis.x * sin_h,
            y: axis.y * sin_h,
            z: axis.z * sin_h,
            w: half.cos(),
        }
    }

    /// Rotation about the world up axis (heading)
    pub fn from_yaw(angle: f32) -> Self {
        Self::from_axis_angle(Vec3::Y, angle)
    }

    /// Rotation about the local forward/back axis (banking)
    pub fn from_roll(angle: f32) -> Self {
        Self::from_axis_angle(Vec3::Z, angle)
    }

    /// Build from Euler angles applied in XYZ order
    ///
    /// Equivalent to the matrix product `Rx * Ry * Rz`, so Z is applied
    /// first in object space.
    pub fn from_euler_xyz(euler: Vec3) -> Self {
        let qx = Self::from_axis_angle(Vec3::X, euler.x);
        let qy = Self::from_axis_angle(Vec3::Y, euler.y);
        let qz = Self::from_axis_angle(Vec3::Z, euler.z);
        qx.compose(&qy).compose(&qz)
    }

    /// Rotate a vector: v' = q * v * q⁻¹
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let q = Vec3::new(self.x, self.y, self.z);
        let t = q.cross(v) * 2.0;
        v + t * self.w + q.cross(t)
    }

    /// Compose two rotations: result = self * other
    /// The composed rotation applies `other` first, then `self`
    pub fn compose(&self, other: &Self) -> Self {
        let a = self;
        let b = other;
        Self {
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        }
    }

    /// Convert to a column-major 4x4 rotation matrix
    pub fn to_matrix(&self) -> [[f32; 4]; 4] {
        let x_col = self.rotate(Vec3::X);
        let y_col = self.rotate(Vec3::Y);
        let z_col = self.rotate(Vec3::Z);
        [
            [x_col.x, x_col.y, x_col.z, 0.0],
            [y_col.x, y_col.y, y_col.z, 0.0],
            [z_col.x, z_col.y, z_col.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]
    }
}

impl std::ops::Mul for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.compose(&other)
    }
}
