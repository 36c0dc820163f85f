//! Collision shapes for flight physics
//!
//! These are lightweight primitives used for collision detection,
//! separate from any renderable geometry.

use aerofire_math::Vec3;
use serde::{Deserialize, Serialize};

/// A sphere defined by center and radius
#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere at the given center with the given radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if a point is inside or on the sphere
    pub fn contains(&self, point: Vec3) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    /// Smallest AABB enclosing this sphere
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, Vec3::splat(self.radius))
    }
}

/// An axis-aligned bounding box
#[derive(Clone, Copy, Debug)]
pub struct Aabb {
    /// Minimum corner (all components are minimums)
    pub min: Vec3,
    /// Maximum corner (all components are maximums)
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a position with given half-extents
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Check if a point is inside or on the AABB
    pub fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

/// The flyable region of the world
///
/// Stored as plain `[x, y, z]` corners so it can live in config files.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Bounds {
    /// Create bounds from two corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.to_array(),
            max: max.to_array(),
        }
    }

    /// Minimum corner
    pub fn min(&self) -> Vec3 {
        Vec3::from_array(self.min)
    }

    /// Maximum corner
    pub fn max(&self) -> Vec3 {
        Vec3::from_array(self.max)
    }

    /// Check whether a point lies within the bounds (inclusive)
    pub fn contains(&self, point: Vec3) -> bool {
        Aabb::new(self.min(), self.max()).contains(point)
    }

    /// Clamp a point into the bounds
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        point.clamp_components(self.min(), self.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_contains() {
        let s = Sphere::new(Vec3::new(0.0, 10.0, 0.0), 6.0);
        assert!(s.contains(Vec3::new(0.0, 15.0, 0.0)));
        assert!(!s.contains(Vec3::new(0.0, 16.5, 0.0)));
    }

    #[test]
    fn test_sphere_bounding_box() {
        let b = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 2.0).bounding_box();
        assert_eq!(b.min, Vec3::new(-1.0, 0.0, 1.0));
        assert_eq!(b.max, Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_aabb_center() {
        let b = Aabb::from_center_half_extents(Vec3::new(5.0, 0.0, -5.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.center(), Vec3::new(5.0, 0.0, -5.0));
    }

    #[test]
    fn test_bounds_contains_and_clamp() {
        let bounds = Bounds::new(Vec3::new(-500.0, 1.0, -500.0), Vec3::new(500.0, 1000.0, 500.0));
        assert!(bounds.contains(Vec3::new(0.0, 10.0, 0.0)));
        assert!(!bounds.contains(Vec3::new(0.0, 0.5, 0.0)));
        assert_eq!(
            bounds.clamp(Vec3::new(600.0, -3.0, 0.0)),
            Vec3::new(500.0, 1.0, 0.0)
        );
    }
}
