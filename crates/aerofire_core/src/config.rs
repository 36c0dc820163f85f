//! Simulation configuration
//!
//! One loop serves every game mode. The differences between modes (gravity,
//! strafing, weapons, explosions, what happens at the edge of the world) are
//! all expressed here, and [`SimConfig::for_variant`] builds the presets.

use aerofire_math::Vec3;
use aerofire_physics::{Bounds, FlightConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Built-in game modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Plane collecting rings, gravity on, clamped to the map
    #[default]
    RingRun,
    /// Starfighter shooting asteroids, leaving the box ends the run
    AsteroidHunt,
    /// As `AsteroidHunt`, with explosions on every kill
    AsteroidBlast,
}

impl Variant {
    /// All variants, in menu order
    pub const ALL: [Variant; 3] = [Variant::RingRun, Variant::AsteroidHunt, Variant::AsteroidBlast];

    /// Human-readable name for titles and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            Variant::RingRun => "Ring Run",
            Variant::AsteroidHunt => "Asteroid Hunt",
            Variant::AsteroidBlast => "Asteroid Blast",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// What happens when the craft reaches the edge of the world
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BoundsPolicy {
    /// Position is clamped; dropping below the floor ends the game
    Clamp(Bounds),
    /// Position is left alone; being outside ends the game
    Terminal(Bounds),
}

/// How targets are scored
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionRule {
    /// Player sphere touching a target collects it
    Touch,
    /// Projectile box hitting a target box destroys it
    Projectile,
}

/// Laser cannon tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeaponConfig {
    /// Projectile speed, units per second
    pub projectile_speed: f32,
    /// Seconds a projectile lives
    pub lifetime: f32,
    /// Distance from the player past which projectiles are culled
    pub max_range: f32,
    /// Minimum wall-clock seconds between accepted shots
    pub refire_interval: f32,
    /// Half-extents of the projectile's collision box
    pub half_extents: [f32; 3],
    /// Cannon positions relative to the craft, fired in turn
    pub mounts: Vec<[f32; 3]>,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            projectile_speed: 200.0,
            lifetime: 2.0,
            max_range: 500.0,
            refire_interval: 0.150,
            half_extents: [0.1, 0.1, 1.0],
            mounts: vec![
                [-3.5, 1.2, -1.0],
                [3.5, -1.2, -1.0],
                [3.5, 1.2, -1.0],
                [-3.5, -1.2, -1.0],
            ],
        }
    }
}

/// Explosion tuning
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectConfig {
    /// Seconds an explosion lasts
    pub lifetime: f32,
    /// Number of debris chunks per explosion
    pub debris_count: usize,
    /// Initial debris speed range, units per second
    pub debris_speed: [f32; 2],
    /// Per-tick velocity factor applied to debris
    pub debris_damping: f32,
    /// Flash scale at the moment of detonation
    pub flash_scale: f32,
    /// Extra flash scale reached as the explosion fades
    pub flash_growth: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            lifetime: 1.0,
            debris_count: 12,
            debris_speed: [10.0, 30.0],
            debris_damping: 0.98,
            flash_scale: 1.0,
            flash_growth: 4.0,
        }
    }
}

/// Shape of the targets a mode spawns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Ring,
    Asteroid,
}

/// Where and how targets appear
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub kind: TargetKind,
    /// Spawn region minimum corner
    pub min: [f32; 3],
    /// Spawn region maximum corner
    pub max: [f32; 3],
    /// Target radius range; equal ends give a fixed size
    pub radius: [f32; 2],
    /// Initial rotation given to every target
    pub base_rotation: [f32; 3],
    /// Fixed spin per tick; `None` draws a random spin per target
    pub spin: Option<[f32; 3]>,
    /// Bound on each component of a random spin, radians per tick
    pub max_random_spin: f32,
}

impl SpawnConfig {
    /// Rings hanging in the sky above the runway
    pub fn rings() -> Self {
        Self {
            kind: TargetKind::Ring,
            min: [-200.0, 50.0, -200.0],
            max: [200.0, 150.0, 200.0],
            radius: [5.0, 5.0],
            base_rotation: [std::f32::consts::FRAC_PI_2, 0.0, 0.0],
            spin: Some([0.0, 0.0, 0.02]),
            max_random_spin: 0.0,
        }
    }

    /// Tumbling asteroids filling the flight box
    pub fn asteroids() -> Self {
        Self {
            kind: TargetKind::Asteroid,
            min: [-400.0, 20.0, -400.0],
            max: [400.0, 180.0, 400.0],
            radius: [3.0, 8.0],
            base_rotation: [0.0, 0.0, 0.0],
            spin: None,
            max_random_spin: 0.02,
        }
    }

    pub fn region_min(&self) -> Vec3 {
        Vec3::from_array(self.min)
    }

    pub fn region_max(&self) -> Vec3 {
        Vec3::from_array(self.max)
    }
}

/// Everything the frame loop needs to run one game mode
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub variant: Variant,
    pub flight: FlightConfig,
    pub bounds: BoundsPolicy,
    pub collision: CollisionRule,
    pub weapon: Option<WeaponConfig>,
    pub effects: Option<EffectConfig>,
    pub spawn: SpawnConfig,
    /// Player spawn position
    pub spawn_position: Vec3,
    /// Player spawn heading, radians
    pub spawn_yaw: f32,
    /// Chase camera offset in the craft's frame
    pub camera_offset: Vec3,
    /// Live target population
    pub target_count: usize,
    /// Points per collected or destroyed target
    pub score_reward: u32,
    /// Largest delta a single tick will simulate; zero disables the clamp
    pub max_delta: f32,
    /// Seed for target placement; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

impl SimConfig {
    /// Build the preset for a game mode
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::RingRun => Self {
                variant,
                flight: FlightConfig::plane(),
                bounds: BoundsPolicy::Clamp(Bounds::new(
                    Vec3::new(-500.0, 1.0, -500.0),
                    Vec3::new(500.0, f32::MAX, 500.0),
                )),
                collision: CollisionRule::Touch,
                weapon: None,
                effects: None,
                spawn: SpawnConfig::rings(),
                spawn_position: Vec3::new(0.0, 10.0, 0.0),
                spawn_yaw: 0.0,
                camera_offset: Vec3::new(0.0, 2.0, 10.0),
                target_count: 10,
                score_reward: 10,
                max_delta: 0.1,
                seed: None,
            },
            Variant::AsteroidHunt | Variant::AsteroidBlast => Self {
                variant,
                flight: FlightConfig::spaceship(),
                bounds: BoundsPolicy::Terminal(Bounds::new(
                    Vec3::new(-1000.0, 0.0, -1000.0),
                    Vec3::new(1000.0, 200.0, 1000.0),
                )),
                collision: CollisionRule::Projectile,
                weapon: Some(WeaponConfig::default()),
                effects: (variant == Variant::AsteroidBlast).then(EffectConfig::default),
                spawn: SpawnConfig::asteroids(),
                spawn_position: Vec3::new(0.0, 100.0, 0.0),
                spawn_yaw: std::f32::consts::PI,
                camera_offset: Vec3::new(0.0, 3.0, 15.0),
                target_count: 10,
                score_reward: 10,
                max_delta: 0.1,
                seed: None,
            },
        }
    }

    /// Seed target placement for a reproducible session
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the live target population
    pub fn with_target_count(mut self, count: usize) -> Self {
        self.target_count = count;
        self
    }

    /// Set the largest simulated delta (zero disables the clamp)
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Replace the weapon, or remove it with `None`
    pub fn with_weapon(mut self, weapon: Option<WeaponConfig>) -> Self {
        self.weapon = weapon;
        self
    }

    /// Clamp a frame delta to what a single tick may simulate
    ///
    /// Negative and non-finite deltas are treated as zero.
    pub fn clamp_delta(&self, delta: f32) -> f32 {
        if !delta.is_finite() || delta <= 0.0 {
            return 0.0;
        }
        if self.max_delta > 0.0 {
            delta.min(self.max_delta)
        } else {
            delta
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_run_preset() {
        let config = SimConfig::for_variant(Variant::RingRun);
        assert_eq!(config.collision, CollisionRule::Touch);
        assert!(config.weapon.is_none());
        assert!(config.effects.is_none());
        assert!(config.flight.gravity_sink > 0.0);
        assert_eq!(config.flight.strafe_speed, 0.0);
        assert!(matches!(config.bounds, BoundsPolicy::Clamp(_)));
        assert_eq!(config.target_count, 10);
        assert_eq!(config.spawn.kind, TargetKind::Ring);
    }

    #[test]
    fn test_asteroid_presets() {
        let hunt = SimConfig::for_variant(Variant::AsteroidHunt);
        assert_eq!(hunt.collision, CollisionRule::Projectile);
        assert!(hunt.weapon.is_some());
        assert!(hunt.effects.is_none());
        assert_eq!(hunt.flight.gravity_sink, 0.0);
        assert!(hunt.flight.strafe_speed > 0.0);
        assert!(matches!(hunt.bounds, BoundsPolicy::Terminal(_)));

        let blast = SimConfig::for_variant(Variant::AsteroidBlast);
        assert!(blast.effects.is_some());
    }

    #[test]
    fn test_clamp_delta() {
        let config = SimConfig::default();
        assert_eq!(config.clamp_delta(0.016), 0.016);
        assert_eq!(config.clamp_delta(5.0), 0.1);
        assert_eq!(config.clamp_delta(-1.0), 0.0);
        assert_eq!(config.clamp_delta(f32::NAN), 0.0);

        let unclamped = config.with_max_delta(0.0);
        assert_eq!(unclamped.clamp_delta(5.0), 5.0);
    }

    #[test]
    fn test_variant_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            variant: Variant,
        }
        let w: Wrapper = toml::from_str("variant = \"asteroid_blast\"").unwrap();
        assert_eq!(w.variant, Variant::AsteroidBlast);
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(Variant::RingRun.to_string(), "Ring Run");
        assert_eq!(Variant::ALL.len(), 3);
    }
}
