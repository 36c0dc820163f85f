//! Kinematic bodies for projectiles and debris
//!
//! These bodies move along their velocity and never respond to contacts;
//! hits are resolved by the simulation removing the entity.

use aerofire_math::Vec3;

/// A body that moves with constant velocity, optionally damped
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KinematicBody {
    /// Position in world coordinates
    pub position: Vec3,
    /// Velocity in units per second
    pub velocity: Vec3,
}

impl KinematicBody {
    /// Create a body at rest
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advance the position by `velocity * dt`
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Scale the velocity by `factor`
    ///
    /// Applied once per tick, independent of the tick length.
    pub fn damp(&mut self, factor: f32) {
        self.velocity *= factor;
    }

    /// Current speed
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_new_body_at_rest() {
        let body = KinematicBody::new(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(body.velocity, Vec3::ZERO);
        assert_eq!(body.speed(), 0.0);
    }

    #[test]
    fn test_integrate() {
        let mut body = KinematicBody::new(Vec3::ZERO).with_velocity(Vec3::new(0.0, 0.0, -200.0));
        body.integrate(0.5);
        assert!((body.position.z + 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let mut body = KinematicBody::new(Vec3::ONE).with_velocity(Vec3::splat(10.0));
        body.integrate(0.0);
        assert_eq!(body.position, Vec3::ONE);
    }

    #[test]
    fn test_damp_per_tick() {
        let mut body = KinematicBody::new(Vec3::ZERO).with_velocity(Vec3::new(10.0, 0.0, 0.0));
        body.damp(0.98);
        body.damp(0.98);
        assert!((body.velocity.x - 9.604).abs() < 1e-4);
    }
}
