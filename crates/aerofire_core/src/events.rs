//! Events emitted by the frame loop
//!
//! A tick reports what happened through these rather than calling into
//! audio or visuals directly. The host decides what each one sounds or
//! looks like.

use crate::entity::{EffectKey, ProjectileKey, TargetKey};
use aerofire_math::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    /// Session left the title screen
    Started,
    /// Session was reset after a game over
    Restarted,
    TargetSpawned { key: TargetKey, position: Vec3 },
    /// Player flew into a collectible
    TargetCollected { key: TargetKey, score: u32 },
    /// Projectile destroyed a target (explosion cue)
    TargetDestroyed { key: TargetKey, projectile: ProjectileKey, score: u32 },
    /// Cannon fired (laser cue)
    ProjectileFired { key: ProjectileKey, position: Vec3 },
    ProjectileExpired { key: ProjectileKey },
    EffectSpawned { key: EffectKey, position: Vec3 },
    EffectExpired { key: EffectKey },
    GameOver { final_score: u32 },
}

impl GameEvent {
    /// Whether a host with sound should play something for this event
    pub fn is_audio_cue(&self) -> bool {
        matches!(
            self,
            GameEvent::ProjectileFired { .. }
                | GameEvent::TargetDestroyed { .. }
                | GameEvent::TargetCollected { .. }
        )
    }

    /// Whether this event only tracks entity bookkeeping
    pub fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            GameEvent::TargetSpawned { .. }
                | GameEvent::ProjectileExpired { .. }
                | GameEvent::EffectSpawned { .. }
                | GameEvent::EffectExpired { .. }
        )
    }
}
