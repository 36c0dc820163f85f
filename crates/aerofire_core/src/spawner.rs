//! Random placement of targets and explosion debris

use crate::config::{EffectConfig, SpawnConfig};
use crate::entity::{Debris, Target};
use aerofire_math::Vec3;
use aerofire_physics::KinematicBody;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owns the session's random number generator
#[derive(Clone, Debug)]
pub struct Spawner {
    rng: StdRng,
}

impl Spawner {
    /// Deterministic spawner for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Spawner seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Use `seed` if given, entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Uniform value in `[min, max]`, tolerating an empty or inverted range
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..=max)
        } else {
            min
        }
    }

    fn point_in(&mut self, min: Vec3, max: Vec3) -> Vec3 {
        Vec3::new(
            self.range(min.x, max.x),
            self.range(min.y, max.y),
            self.range(min.z, max.z),
        )
    }

    /// Random unit vector
    fn direction(&mut self) -> Vec3 {
        loop {
            let v = self.point_in(Vec3::splat(-1.0), Vec3::ONE);
            let len_sq = v.length_squared();
            if len_sq > 1e-4 && len_sq <= 1.0 {
                return v / len_sq.sqrt();
            }
        }
    }

    /// Place one target somewhere in the spawn region
    pub fn spawn_target(&mut self, config: &SpawnConfig) -> Target {
        let position = self.point_in(config.region_min(), config.region_max());
        let radius = self.range(config.radius[0], config.radius[1]);
        let spin = match config.spin {
            Some(spin) => Vec3::from_array(spin),
            None => {
                let s = config.max_random_spin;
                self.point_in(Vec3::splat(-s), Vec3::splat(s))
            }
        };

        Target {
            kind: config.kind,
            position,
            rotation: Vec3::from_array(config.base_rotation),
            spin,
            radius,
        }
    }

    /// Debris chunks flying out from an explosion's origin
    pub fn spawn_debris(&mut self, origin: Vec3, config: &EffectConfig) -> Vec<Debris> {
        (0..config.debris_count)
            .map(|_| {
                let speed = self.range(config.debris_speed[0], config.debris_speed[1]);
                let velocity = self.direction() * speed;
                let angular_velocity = self.point_in(Vec3::splat(-5.0), Vec3::splat(5.0));
                Debris {
                    body: KinematicBody::new(origin).with_velocity(velocity),
                    rotation: Vec3::ZERO,
                    angular_velocity,
                    opacity: 1.0,
                }
            })
            .collect()
    }
}
