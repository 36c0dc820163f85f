//! 3D Mathematics Library
//!
//! This crate provides the vector, rotation and matrix types used by the
//! Aerofire flight simulation and renderer.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Quat`] - Unit quaternion for orientations
//! - [`Mat4`] - Column-major 4x4 matrix for GPU transforms

mod vec3;
mod quat;
pub mod mat4;

pub use vec3::Vec3;
pub use quat::Quat;
pub use mat4::Mat4;
