//! Simulated entities: targets, projectiles and explosion effects
//!
//! Each kind lives in its own `SlotMap` inside the session, keyed by a
//! generational key so collaborators can match spawn and removal events to
//! whatever they created for the entity.

use crate::config::{EffectConfig, TargetKind};
use aerofire_math::Vec3;
use aerofire_physics::{Aabb, CollisionFilter, KinematicBody, Sphere};
use slotmap::new_key_type;

new_key_type! {
    /// Key to a live target
    pub struct TargetKey;
    /// Key to a live projectile
    pub struct ProjectileKey;
    /// Key to a live explosion
    pub struct EffectKey;
}

/// A ring to fly through or an asteroid to shoot
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub kind: TargetKind,
    pub position: Vec3,
    /// Euler angles (XYZ), cosmetic only
    pub rotation: Vec3,
    /// Rotation added every tick
    pub spin: Vec3,
    pub radius: f32,
}

impl Target {
    /// Whether projectiles can destroy this target
    pub fn destructible(&self) -> bool {
        self.kind == TargetKind::Asteroid
    }

    pub fn sphere(&self) -> Sphere {
        Sphere::new(self.position, self.radius)
    }

    pub fn bounding_box(&self) -> Aabb {
        self.sphere().bounding_box()
    }

    pub fn filter(&self) -> CollisionFilter {
        if self.destructible() {
            CollisionFilter::destructible()
        } else {
            CollisionFilter::pickup()
        }
    }

    /// Advance the cosmetic rotation by one tick of spin
    pub fn advance_spin(&mut self) {
        self.rotation += self.spin;
    }
}

/// Relative slack when comparing an age against its lifetime
const EXPIRY_TOLERANCE: f64 = 1e-5;

/// Time an entity has been alive against how long it may live
///
/// Age is summed in f64 so a lifetime of L expires after exactly
/// ceil(L / dt) steps of a constant dt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lifespan {
    lifetime: f32,
    age: f64,
}

impl Lifespan {
    pub fn new(lifetime: f32) -> Self {
        Self { lifetime, age: 0.0 }
    }

    /// Age by `dt`; returns true once the lifetime is used up
    pub fn advance(&mut self, dt: f32) -> bool {
        self.age += f64::from(dt);
        self.is_spent()
    }

    pub fn is_spent(&self) -> bool {
        let lifetime = f64::from(self.lifetime);
        self.age >= lifetime - lifetime.abs() * EXPIRY_TOLERANCE
    }

    /// Seconds left, never negative
    pub fn remaining(&self) -> f32 {
        (f64::from(self.lifetime) - self.age).max(0.0) as f32
    }

    /// Remaining fraction, 1.0 when fresh
    pub fn ratio(&self) -> f32 {
        if self.lifetime <= 0.0 || self.is_spent() {
            0.0
        } else {
            (self.remaining() / self.lifetime).clamp(0.0, 1.0)
        }
    }
}

/// A laser bolt
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub body: KinematicBody,
    pub life: Lifespan,
    pub half_extents: Vec3,
}

impl Projectile {
    pub fn new(position: Vec3, velocity: Vec3, lifetime: f32, half_extents: Vec3) -> Self {
        Self {
            body: KinematicBody::new(position).with_velocity(velocity),
            life: Lifespan::new(lifetime),
            half_extents,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.body.position, self.half_extents)
    }

    /// Move and age the bolt; returns true once it has expired
    pub fn update(&mut self, dt: f32) -> bool {
        self.body.integrate(dt);
        self.life.advance(dt)
    }
}

/// One chunk of an explosion
#[derive(Clone, Debug, PartialEq)]
pub struct Debris {
    pub body: KinematicBody,
    pub rotation: Vec3,
    /// Radians per second
    pub angular_velocity: Vec3,
    pub opacity: f32,
}

/// A flash with debris flying out of it
#[derive(Clone, Debug, PartialEq)]
pub struct Effect {
    pub origin: Vec3,
    pub life: Lifespan,
    pub flash_opacity: f32,
    pub flash_scale: f32,
    pub debris: Vec<Debris>,
}

impl Effect {
    pub fn new(origin: Vec3, config: &EffectConfig, debris: Vec<Debris>) -> Self {
        Self {
            origin,
            life: Lifespan::new(config.lifetime),
            flash_opacity: 1.0,
            flash_scale: config.flash_scale,
            debris,
        }
    }

    /// Remaining fraction of the effect, 1.0 at detonation
    pub fn ratio(&self) -> f32 {
        self.life.ratio()
    }

    /// Fade and scatter; returns true once the effect is spent
    pub fn update(&mut self, dt: f32, config: &EffectConfig) -> bool {
        let spent = self.life.advance(dt);
        let ratio = self.ratio();

        self.flash_opacity = ratio;
        self.flash_scale = config.flash_scale + (1.0 - ratio) * config.flash_growth;

        for chunk in &mut self.debris {
            chunk.opacity = ratio;
            chunk.body.integrate(dt);
            chunk.body.damp(config.debris_damping);
            chunk.rotation += chunk.angular_velocity * dt;
        }

        spent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_ring_is_not_destructible() {
        let ring = Target {
            kind: TargetKind::Ring,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            spin: Vec3::new(0.0, 0.0, 0.02),
            radius: 5.0,
        };
        assert!(!ring.destructible());
        assert_eq!(ring.filter(), CollisionFilter::pickup());
    }

    #[test]
    fn test_target_spin() {
        let mut ring = Target {
            kind: TargetKind::Ring,
            position: Vec3::ZERO,
            rotation: Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
            spin: Vec3::new(0.0, 0.0, 0.02),
            radius: 5.0,
        };
        ring.advance_spin();
        ring.advance_spin();
        assert!((ring.rotation.z - 0.04).abs() < EPSILON);
        assert!((ring.rotation.x - std::f32::consts::FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_projectile_expires() {
        let mut bolt = Projectile::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -200.0), 0.5, Vec3::splat(0.1));
        assert!(!bolt.update(0.25));
        assert!((bolt.position().z + 50.0).abs() < EPSILON);
        assert!(bolt.update(0.25));
    }

    #[test]
    fn test_lifespan_counts_sixtieths_exactly() {
        let mut life = Lifespan::new(2.0);
        let dt = 1.0 / 60.0;
        for tick in 1..120 {
            assert!(!life.advance(dt), "spent early at tick {tick}");
        }
        assert!(life.advance(dt));
        assert_eq!(life.remaining(), 0.0);
    }

    #[test]
    fn test_lifespan_tenths_and_fifths() {
        // ceil(0.3 / 0.1) = 3, ceil(0.6 / 0.2) = 3
        for (lifetime, dt) in [(0.3, 0.1), (0.6, 0.2)] {
            let mut life = Lifespan::new(lifetime);
            assert!(!life.advance(dt));
            assert!(!life.advance(dt));
            assert!(life.advance(dt), "lifetime {lifetime} dt {dt}");
        }
    }

    #[test]
    fn test_lifespan_partial_step() {
        // ceil(0.5 / 0.3) = 2
        let mut life = Lifespan::new(0.5);
        assert!(!life.advance(0.3));
        assert!((life.ratio() - 0.4).abs() < EPSILON);
        assert!(life.advance(0.3));
        assert_eq!(life.ratio(), 0.0);
    }

    #[test]
    fn test_effect_fades_and_grows() {
        let config = EffectConfig::default();
        let chunk = Debris {
            body: KinematicBody::new(Vec3::ZERO).with_velocity(Vec3::new(10.0, 0.0, 0.0)),
            rotation: Vec3::ZERO,
            angular_velocity: Vec3::new(1.0, 0.0, 0.0),
            opacity: 1.0,
        };
        let mut effect = Effect::new(Vec3::ZERO, &config, vec![chunk]);

        assert!(!effect.update(0.25, &config));
        assert!((effect.flash_opacity - 0.75).abs() < EPSILON);
        assert!((effect.flash_scale - (config.flash_scale + 0.25 * config.flash_growth)).abs() < EPSILON);

        let chunk = &effect.debris[0];
        assert!((chunk.opacity - 0.75).abs() < EPSILON);
        assert!((chunk.body.position.x - 2.5).abs() < EPSILON);
        assert!((chunk.body.velocity.x - 9.8).abs() < EPSILON);
        assert!((chunk.rotation.x - 0.25).abs() < EPSILON);

        assert!(!effect.update(0.5, &config));
        assert!(effect.update(0.25, &config));
        assert_eq!(effect.ratio(), 0.0);
    }
}
