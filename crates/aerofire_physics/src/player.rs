//! Player flight kinematics
//!
//! The craft has no momentum: each step moves it directly from the held
//! controls. Heading is a yaw about world up; bank is a cosmetic roll that
//! eases toward `max_bank` while turning and decays when the stick is centred.

use crate::shapes::{Bounds, Sphere};
use aerofire_math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Default player collision radius
pub const DEFAULT_PLAYER_RADIUS: f32 = 1.0;

/// Tuning for a flight model
///
/// Speeds are in units per second, rates in radians per second.
/// `bank_damping` is a per-step factor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub forward_speed: f32,
    pub backward_speed: f32,
    /// Lateral speed; zero disables strafing
    pub strafe_speed: f32,
    pub vertical_speed: f32,
    pub yaw_rate: f32,
    pub bank_rate: f32,
    pub max_bank: f32,
    pub bank_damping: f32,
    /// Constant downward drift, zero for craft that hover
    pub gravity_sink: f32,
    pub radius: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self::plane()
    }
}

impl FlightConfig {
    /// Light aircraft: no strafing, sinks slowly under gravity
    pub fn plane() -> Self {
        Self {
            forward_speed: 24.0,
            backward_speed: 12.0,
            strafe_speed: 0.0,
            vertical_speed: 24.0,
            yaw_rate: 0.9,
            bank_rate: 1.8,
            max_bank: 0.3,
            bank_damping: 0.95,
            gravity_sink: 3.0,
            radius: DEFAULT_PLAYER_RADIUS,
        }
    }

    /// Starfighter: faster, strafes, no gravity
    pub fn spaceship() -> Self {
        Self {
            forward_speed: 60.0,
            backward_speed: 30.0,
            strafe_speed: 30.0,
            vertical_speed: 30.0,
            yaw_rate: 1.5,
            bank_rate: 2.0,
            max_bank: 0.5,
            bank_damping: 0.95,
            gravity_sink: 0.0,
            radius: 2.0,
        }
    }

    /// Set the constant gravity sink
    pub fn with_gravity_sink(mut self, sink: f32) -> Self {
        self.gravity_sink = sink;
        self
    }
}

/// Held controls for one step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlightInput {
    pub forward: bool,
    pub backward: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub ascend: bool,
    pub descend: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
}

impl FlightInput {
    /// Turn direction: +1 left, -1 right, 0 when centred or both held
    pub fn turn_axis(&self) -> f32 {
        axis(self.yaw_left, self.yaw_right)
    }

    /// Lateral direction: +1 right, -1 left
    pub fn strafe_axis(&self) -> f32 {
        axis(self.strafe_right, self.strafe_left)
    }

    /// Vertical direction: +1 up, -1 down
    pub fn vertical_axis(&self) -> f32 {
        axis(self.ascend, self.descend)
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Result of applying a bounds policy to the craft
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundsCheck {
    /// Unclamped altitude went below the floor of the bounds
    pub ground_strike: bool,
    /// Position was outside the bounds before any clamping
    pub outside: bool,
}

/// Player craft state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightBody {
    /// Position (center of the collision sphere)
    pub position: Vec3,
    /// Heading about world up, radians
    pub yaw: f32,
    /// Roll about the local forward axis, radians
    pub bank: f32,
    /// Collision radius
    pub radius: f32,
}

impl FlightBody {
    /// Create a craft at the given pose, level
    pub fn new(position: Vec3, yaw: f32, radius: f32) -> Self {
        Self {
            position,
            yaw,
            bank: 0.0,
            radius,
        }
    }

    /// Full orientation: heading then bank
    pub fn orientation(&self) -> Quat {
        Quat::from_yaw(self.yaw) * Quat::from_roll(self.bank)
    }

    /// Heading only, without bank
    pub fn heading(&self) -> Quat {
        Quat::from_yaw(self.yaw)
    }

    /// Unit vector the nose points along (local -Z, level)
    pub fn forward(&self) -> Vec3 {
        self.heading().rotate(-Vec3::Z)
    }

    /// Unit vector to the right of the craft, level
    pub fn right(&self) -> Vec3 {
        self.heading().rotate(Vec3::X)
    }

    /// Collision sphere at the current position
    pub fn collider(&self) -> Sphere {
        Sphere::new(self.position, self.radius)
    }

    /// Advance one step from held controls
    ///
    /// Bank damping is applied once per call, whatever `dt` is.
    pub fn integrate(&mut self, input: &FlightInput, config: &FlightConfig, dt: f32) {
        let turn = input.turn_axis();
        if turn != 0.0 {
            self.yaw += turn * config.yaw_rate * dt;
            let target = turn * config.max_bank;
            let step = config.bank_rate * dt;
            self.bank = if turn > 0.0 {
                (self.bank + step).min(target)
            } else {
                (self.bank - step).max(target)
            };
        } else {
            self.bank *= config.bank_damping;
        }

        let forward = self.forward();
        if input.forward {
            self.position += forward * (config.forward_speed * dt);
        }
        if input.backward {
            self.position -= forward * (config.backward_speed * dt);
        }

        if config.strafe_speed > 0.0 {
            self.position += self.right() * (input.strafe_axis() * config.strafe_speed * dt);
        }

        self.position.y += input.vertical_axis() * config.vertical_speed * dt;
        self.position.y -= config.gravity_sink * dt;
    }

    /// Clamp the position into `bounds`
    ///
    /// The ground strike is judged on the altitude before clamping.
    pub fn clamp_to(&mut self, bounds: &Bounds) -> BoundsCheck {
        let check = self.check_bounds(bounds);
        self.position = bounds.clamp(self.position);
        check
    }

    /// Report where the craft sits relative to `bounds` without moving it
    pub fn check_bounds(&self, bounds: &Bounds) -> BoundsCheck {
        BoundsCheck {
            ground_strike: self.position.y < bounds.min[1],
            outside: !bounds.contains(self.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-4;
    const DT: f32 = 1.0 / 60.0;

    fn plane_at(y: f32) -> FlightBody {
        FlightBody::new(Vec3::new(0.0, y, 0.0), 0.0, DEFAULT_PLAYER_RADIUS)
    }

    #[test]
    fn test_forward_moves_along_negative_z() {
        let mut body = plane_at(10.0);
        let config = FlightConfig::plane().with_gravity_sink(0.0);
        let input = FlightInput { forward: true, ..Default::default() };

        body.integrate(&input, &config, DT);
        assert!((body.position.z + 0.4).abs() < EPSILON);
        assert!(body.position.x.abs() < EPSILON);
    }

    #[test]
    fn test_backward_is_slower() {
        let mut body = plane_at(10.0);
        let config = FlightConfig::plane().with_gravity_sink(0.0);
        let input = FlightInput { backward: true, ..Default::default() };

        body.integrate(&input, &config, DT);
        assert!((body.position.z - 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_gravity_sink_per_tick() {
        let mut body = plane_at(10.0);
        body.integrate(&FlightInput::default(), &FlightConfig::plane(), DT);
        assert!((body.position.y - 9.95).abs() < EPSILON);
    }

    #[test]
    fn test_turn_left_banks_and_yaws() {
        let mut body = plane_at(10.0);
        let config = FlightConfig::plane();
        let input = FlightInput { yaw_left: true, ..Default::default() };

        body.integrate(&input, &config, DT);
        assert!((body.bank - 0.03).abs() < EPSILON);
        assert!((body.yaw - 0.015).abs() < EPSILON);

        for _ in 0..100 {
            body.integrate(&input, &config, DT);
        }
        assert!((body.bank - config.max_bank).abs() < EPSILON);
    }

    #[test]
    fn test_turn_right_banks_negative() {
        let mut body = plane_at(10.0);
        let config = FlightConfig::plane();
        let input = FlightInput { yaw_right: true, ..Default::default() };

        for _ in 0..100 {
            body.integrate(&input, &config, DT);
        }
        assert!((body.bank + config.max_bank).abs() < EPSILON);
        assert!(body.yaw < 0.0);
    }

    #[test]
    fn test_bank_decays_without_turn() {
        let mut body = plane_at(10.0);
        body.bank = 0.3;
        body.integrate(&FlightInput::default(), &FlightConfig::plane(), DT);
        assert!((body.bank - 0.285).abs() < EPSILON);
    }

    #[test]
    fn test_both_turn_keys_cancel() {
        let input = FlightInput { yaw_left: true, yaw_right: true, ..Default::default() };
        assert_eq!(input.turn_axis(), 0.0);
    }

    #[test]
    fn test_plane_ignores_strafe() {
        let mut body = plane_at(10.0);
        let config = FlightConfig::plane().with_gravity_sink(0.0);
        let input = FlightInput { strafe_right: true, ..Default::default() };

        body.integrate(&input, &config, DT);
        assert_eq!(body.position, Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn test_spaceship_strafes_along_right() {
        let mut body = FlightBody::new(Vec3::new(0.0, 100.0, 0.0), PI, 2.0);
        let config = FlightConfig::spaceship();
        let input = FlightInput { strafe_right: true, ..Default::default() };

        body.integrate(&input, &config, 1.0);
        // Facing +Z after a half turn, so right is -X
        assert!((body.position.x + config.strafe_speed).abs() < EPSILON);
        assert!((body.position.y - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_orientation_includes_bank() {
        let mut body = plane_at(10.0);
        body.bank = 0.3;
        let up = body.orientation().rotate(Vec3::Y);
        assert!(up.x < 0.0);
        // Bank never tilts the travel direction
        assert!((body.forward() - (-Vec3::Z)).length() < EPSILON);
    }

    #[test]
    fn test_clamp_reports_ground_strike_before_clamping() {
        let bounds = Bounds::new(Vec3::new(-500.0, 1.0, -500.0), Vec3::new(500.0, f32::MAX, 500.0));
        let mut body = plane_at(0.96);

        let check = body.clamp_to(&bounds);
        assert!(check.ground_strike);
        assert!((body.position.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_clamp_horizontal_extent() {
        let bounds = Bounds::new(Vec3::new(-500.0, 1.0, -500.0), Vec3::new(500.0, f32::MAX, 500.0));
        let mut body = FlightBody::new(Vec3::new(520.0, 10.0, -600.0), 0.0, 1.0);

        let check = body.clamp_to(&bounds);
        assert!(!check.ground_strike);
        assert!(check.outside);
        assert_eq!(body.position, Vec3::new(500.0, 10.0, -500.0));
    }

    #[test]
    fn test_check_bounds_does_not_move() {
        let bounds = Bounds::new(Vec3::new(-1000.0, 0.0, -1000.0), Vec3::new(1000.0, 200.0, 1000.0));
        let body = FlightBody::new(Vec3::new(0.0, 250.0, 0.0), PI, 2.0);

        assert!(body.check_bounds(&bounds).outside);
        assert!((body.position.y - 250.0).abs() < EPSILON);
    }
}
