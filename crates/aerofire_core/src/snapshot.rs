//! Read-only view of the world after a tick
//!
//! The renderer and HUD only ever see a [`RenderSnapshot`]; they never hold
//! a reference into the session.

use crate::config::{TargetKind, Variant};
use crate::entity::{EffectKey, ProjectileKey, TargetKey};
use crate::events::GameEvent;
use crate::session::SessionState;
use aerofire_math::{Quat, Vec3};
use aerofire_physics::FlightBody;

/// Craft pose for drawing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerView {
    pub position: Vec3,
    pub orientation: Quat,
    pub yaw: f32,
    pub bank: f32,
    pub radius: f32,
}

/// Chase camera eye and look-at point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraPose {
    /// Follow `body` from `offset`, expressed in the craft's frame
    pub fn chase(body: &FlightBody, offset: Vec3) -> Self {
        Self {
            eye: body.position + body.orientation().rotate(offset),
            target: body.position,
            up: Vec3::Y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetView {
    pub key: TargetKey,
    pub kind: TargetKind,
    pub position: Vec3,
    pub rotation: Vec3,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileView {
    pub key: ProjectileKey,
    pub position: Vec3,
    pub velocity: Vec3,
    pub half_extents: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebrisView {
    pub position: Vec3,
    pub rotation: Vec3,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectView {
    pub key: EffectKey,
    pub origin: Vec3,
    pub flash_opacity: f32,
    pub flash_scale: f32,
    pub debris: Vec<DebrisView>,
}

/// Everything needed to draw one frame and drive the HUD
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub variant: Variant,
    pub state: SessionState,
    pub score: u32,
    /// Score at the moment of the last game over
    pub final_score: Option<u32>,
    pub player: PlayerView,
    pub camera: CameraPose,
    /// Display-only velocity estimate
    pub velocity: Vec3,
    pub targets: Vec<TargetView>,
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<EffectView>,
    /// Events raised since the previous snapshot
    pub events: Vec<GameEvent>,
}

impl RenderSnapshot {
    /// Speed in units per second, for the HUD
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// One-line status for a title bar
    pub fn status_line(&self) -> String {
        match self.state {
            SessionState::NotStarted => format!("{} - Press Enter to start", self.variant),
            SessionState::Playing => format!(
                "{} - Score: {} | Speed: {:.1}",
                self.variant,
                self.score,
                self.speed()
            ),
            SessionState::GameOver => format!(
                "{} - GAME OVER - Final score: {} | Press R to restart",
                self.variant,
                self.final_score.unwrap_or(self.score)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_chase_behind_level_plane() {
        let body = FlightBody::new(Vec3::new(0.0, 10.0, 0.0), 0.0, 1.0);
        let pose = CameraPose::chase(&body, Vec3::new(0.0, 2.0, 10.0));
        assert!((pose.eye - Vec3::new(0.0, 12.0, 10.0)).length() < EPSILON);
        assert_eq!(pose.target, body.position);
    }

    #[test]
    fn test_chase_follows_heading() {
        // Facing +Z after a half turn, so "behind" is -Z
        let body = FlightBody::new(Vec3::new(0.0, 100.0, 0.0), PI, 2.0);
        let pose = CameraPose::chase(&body, Vec3::new(0.0, 3.0, 15.0));
        assert!((pose.eye - Vec3::new(0.0, 103.0, -15.0)).length() < EPSILON);
    }
}
