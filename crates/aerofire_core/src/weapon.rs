//! Rate-limited cannon with alternating mounts

use crate::config::WeaponConfig;
use aerofire_math::Vec3;
use std::time::Duration;

/// Firing state carried across ticks
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Weapon {
    /// Wall-clock time of the last accepted shot
    last_shot: Option<Duration>,
    /// Index into the mount list for the next shot
    next_cannon: usize,
}

impl Weapon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to fire at wall-clock time `now`
    ///
    /// Returns the mount offset (craft space) the shot leaves from, or `None`
    /// if the refire interval has not elapsed since the last accepted shot.
    pub fn try_fire(&mut self, now: Duration, config: &WeaponConfig) -> Option<Vec3> {
        if let Some(last) = self.last_shot {
            if now.saturating_sub(last).as_secs_f32() < config.refire_interval {
                return None;
            }
        }

        self.last_shot = Some(now);
        let mount = match config.mounts.len() {
            0 => Vec3::ZERO,
            n => {
                let mount = Vec3::from_array(config.mounts[self.next_cannon % n]);
                self.next_cannon = (self.next_cannon + 1) % n;
                mount
            }
        };
        Some(mount)
    }

    /// Index of the mount the next shot will use
    pub fn next_cannon(&self) -> usize {
        self.next_cannon
    }

    /// Forget the last shot and return to the first mount
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_first_shot_always_accepted() {
        let mut weapon = Weapon::new();
        assert!(weapon.try_fire(ms(0), &WeaponConfig::default()).is_some());
    }

    #[test]
    fn test_refire_interval() {
        let config = WeaponConfig::default();
        let mut weapon = Weapon::new();

        assert!(weapon.try_fire(ms(1000), &config).is_some());
        assert!(weapon.try_fire(ms(1050), &config).is_none());
        assert!(weapon.try_fire(ms(1149), &config).is_none());
        assert!(weapon.try_fire(ms(1150), &config).is_some());
    }

    #[test]
    fn test_rejected_shot_does_not_restart_cooldown() {
        let config = WeaponConfig::default();
        let mut weapon = Weapon::new();

        weapon.try_fire(ms(0), &config);
        weapon.try_fire(ms(100), &config);
        assert!(weapon.try_fire(ms(160), &config).is_some());
    }

    #[test]
    fn test_mounts_alternate() {
        let config = WeaponConfig::default();
        let mut weapon = Weapon::new();

        let first = weapon.try_fire(ms(0), &config).unwrap();
        let second = weapon.try_fire(ms(200), &config).unwrap();
        assert_eq!(first, Vec3::from_array(config.mounts[0]));
        assert_eq!(second, Vec3::from_array(config.mounts[1]));
        assert_ne!(first, second);

        weapon.try_fire(ms(400), &config);
        weapon.try_fire(ms(600), &config);
        assert_eq!(weapon.next_cannon(), 0);
    }

    #[test]
    fn test_no_mounts_fires_from_center() {
        let config = WeaponConfig { mounts: Vec::new(), ..Default::default() };
        let mut weapon = Weapon::new();
        assert_eq!(weapon.try_fire(ms(0), &config), Some(Vec3::ZERO));
    }

    #[test]
    fn test_reset() {
        let config = WeaponConfig::default();
        let mut weapon = Weapon::new();
        weapon.try_fire(ms(0), &config);
        weapon.reset();
        assert_eq!(weapon.next_cannon(), 0);
        assert!(weapon.try_fire(ms(10), &config).is_some());
    }
}
