//! Collision detection for flight shapes
//!
//! Provides overlap tests between spheres and AABBs, plus collision
//! filtering via layer masks. There is no broad phase: callers test every
//! pair, which is fine at a few dozen entities.

use bitflags::bitflags;

use crate::shapes::{Aabb, Sphere};
use aerofire_math::Vec3;

bitflags! {
    /// Collision layers for filtering which objects can collide
    ///
    /// Each layer is a bit in a 32-bit mask. Objects can belong to multiple layers
    /// and can define which layers they collide with via a collision mask.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionLayer: u32 {
        /// Default layer for most objects
        const DEFAULT = 1 << 0;
        /// Player craft
        const PLAYER = 1 << 1;
        /// Destructible targets (asteroids)
        const TARGET = 1 << 2;
        /// Collectible targets (rings)
        const PICKUP = 1 << 3;
        /// Player projectiles (lasers)
        const PROJECTILE = 1 << 4;
        /// All layers (collide with everything)
        const ALL = 0xFFFFFFFF;
    }
}

/// Collision filter determining what an object collides with
///
/// Two objects A and B collide if:
/// - (A.layer & B.mask) != 0, AND
/// - (B.layer & A.mask) != 0
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionFilter {
    /// Which layer(s) this object belongs to
    pub layer: CollisionLayer,
    /// Which layer(s) this object can collide with
    pub mask: CollisionLayer,
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self {
            layer: CollisionLayer::DEFAULT,
            mask: CollisionLayer::ALL,
        }
    }
}

impl CollisionFilter {
    /// Create a new collision filter with specified layer and mask
    pub fn new(layer: CollisionLayer, mask: CollisionLayer) -> Self {
        Self { layer, mask }
    }

    /// Check if this filter allows collision with another filter
    ///
    /// Returns true if both objects' layers match each other's masks.
    pub fn collides_with(&self, other: &Self) -> bool {
        self.layer.intersects(other.mask) && other.layer.intersects(self.mask)
    }

    /// Filter for the player craft
    ///
    /// The craft flies through pickups and ignores its own projectiles.
    pub fn player() -> Self {
        Self {
            layer: CollisionLayer::PLAYER,
            mask: CollisionLayer::ALL & !CollisionLayer::PLAYER & !CollisionLayer::PROJECTILE,
        }
    }

    /// Filter for collectible rings
    pub fn pickup() -> Self {
        Self {
            layer: CollisionLayer::PICKUP,
            mask: CollisionLayer::PLAYER,
        }
    }

    /// Filter for destructible asteroids
    pub fn destructible() -> Self {
        Self {
            layer: CollisionLayer::TARGET,
            mask: CollisionLayer::PROJECTILE | CollisionLayer::PLAYER,
        }
    }

    /// Filter for player projectiles
    ///
    /// Lasers hit destructible targets only; rings let them pass.
    pub fn player_projectile() -> Self {
        Self {
            layer: CollisionLayer::PROJECTILE,
            mask: CollisionLayer::TARGET,
        }
    }
}

/// Contact information from a collision
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// Point of contact
    pub point: Vec3,
    /// Normal pointing from the second shape toward the first
    pub normal: Vec3,
    /// Penetration depth (positive means overlapping)
    pub penetration: f32,
}

impl Contact {
    /// Create a new contact
    pub fn new(point: Vec3, normal: Vec3, penetration: f32) -> Self {
        Self {
            point,
            normal,
            penetration,
        }
    }
}

/// Test sphere vs sphere overlap
///
/// Returns a contact when the centers are closer than the sum of the radii.
/// The normal points from `b` toward `a`.
pub fn sphere_vs_sphere(a: &Sphere, b: &Sphere) -> Option<Contact> {
    let delta = a.center - b.center;
    let dist_sq = delta.length_squared();
    let min_dist = a.radius + b.radius;

    if dist_sq < min_dist * min_dist {
        let dist = dist_sq.sqrt();
        let normal = if dist > 0.0001 { delta / dist } else { Vec3::Y };
        let point = b.center + normal * b.radius;
        Some(Contact::new(point, normal, min_dist - dist))
    } else {
        None
    }
}

/// Test AABB vs AABB collision
///
/// Returns a contact if the AABBs are intersecting. Touching faces count.
pub fn aabb_vs_aabb(a: &Aabb, b: &Aabb) -> Option<Contact> {
    if a.max.x < b.min.x || a.min.x > b.max.x {
        return None;
    }
    if a.max.y < b.min.y || a.min.y > b.max.y {
        return None;
    }
    if a.max.z < b.min.z || a.min.z > b.max.z {
        return None;
    }

    let overlap_x = (a.max.x.min(b.max.x) - a.min.x.max(b.min.x)).max(0.0);
    let overlap_y = (a.max.y.min(b.max.y) - a.min.y.max(b.min.y)).max(0.0);
    let overlap_z = (a.max.z.min(b.max.z) - a.min.z.max(b.min.z)).max(0.0);

    let (ca, cb) = (a.center(), b.center());
    let axis_normal = |a_c: f32, b_c: f32, axis: Vec3| if a_c < b_c { -axis } else { axis };

    let mut min_overlap = overlap_x;
    let mut normal = axis_normal(ca.x, cb.x, Vec3::X);
    if overlap_y < min_overlap {
        min_overlap = overlap_y;
        normal = axis_normal(ca.y, cb.y, Vec3::Y);
    }
    if overlap_z < min_overlap {
        min_overlap = overlap_z;
        normal = axis_normal(ca.z, cb.z, Vec3::Z);
    }

    // Contact point is at the center of the overlap region
    let overlap_min = a.min.max_components(b.min);
    let overlap_max = a.max.min_components(b.max);
    let point = (overlap_min + overlap_max) * 0.5;

    Some(Contact::new(point, normal, min_overlap))
}
