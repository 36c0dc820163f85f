//! Renderable scene - bridges a RenderSnapshot to GPU instances
//!
//! Each snapshot entity becomes one or more coloured boxes. Opaque boxes are
//! pushed first and fading effects last so alpha blending looks right.

use std::f32::consts::TAU;

use aerofire_core::{
    EffectView, PlayerView, ProjectileView, RenderSnapshot, TargetKind, TargetView, Variant,
};
use aerofire_math::mat4::{self, Mat4};
use aerofire_math::{Quat, Vec3};

use crate::pipeline::BoxInstance;

/// Colours used for every kind of box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub plane: [f32; 4],
    pub spaceship: [f32; 4],
    pub wing_stripe: [f32; 4],
    pub ring: [f32; 4],
    pub asteroid: [f32; 4],
    pub laser: [f32; 4],
    pub flash: [f32; 3],
    pub debris: [f32; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            plane: [0.9, 0.9, 0.9, 1.0],
            spaceship: [0.8, 0.8, 0.8, 1.0],
            wing_stripe: [1.0, 0.27, 0.27, 1.0],
            ring: [1.0, 0.84, 0.0, 1.0],
            asteroid: [0.45, 0.4, 0.35, 1.0],
            laser: [1.0, 0.1, 0.1, 1.0],
            flash: [1.0, 0.6, 0.1],
            debris: [0.5, 0.3, 0.2],
        }
    }
}

/// Utility struct for building a checkerboard ground out of tiles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkerboard {
    /// Colors for the checkerboard pattern
    pub color_a: [f32; 4],
    pub color_b: [f32; 4],
    /// Size of each checker cell
    pub cell_size: f32,
    /// Half the width of the whole board
    pub half_extent: f32,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            color_a: [0.2, 0.55, 0.2, 1.0],
            color_b: [0.16, 0.45, 0.16, 1.0],
            cell_size: 50.0,
            half_extent: 500.0,
        }
    }
}

impl Checkerboard {
    /// Get the color for a cell based on its XZ position
    pub fn color_for_position(&self, x: f32, z: f32) -> [f32; 4] {
        let cell_x = (x / self.cell_size).floor() as i32;
        let cell_z = (z / self.cell_size).floor() as i32;

        if (cell_x + cell_z).rem_euclid(2) == 0 {
            self.color_a
        } else {
            self.color_b
        }
    }

    /// One flat box per cell, top face at y = 0
    pub fn tiles(&self) -> Vec<BoxInstance> {
        let cells = (2.0 * self.half_extent / self.cell_size).ceil().max(0.0) as usize;
        let half = self.cell_size * 0.5;
        let mut tiles = Vec::with_capacity(cells * cells);
        for i in 0..cells {
            for j in 0..cells {
                let x = -self.half_extent + half + i as f32 * self.cell_size;
                let z = -self.half_extent + half + j as f32 * self.cell_size;
                tiles.push(BoxInstance::new(
                    Vec3::new(x, -0.05, z),
                    Quat::IDENTITY,
                    Vec3::new(half, 0.05, half),
                    self.color_for_position(x, z),
                ));
            }
        }
        tiles
    }
}

/// Number of boxes that make up one ring
pub const RING_SEGMENTS: usize = 16;

/// GPU-ready boxes collected from a snapshot
#[derive(Clone, Debug, Default)]
pub struct SceneInstances {
    pub instances: Vec<BoxInstance>,
}

impl SceneInstances {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every box for a frame
    ///
    /// `ground` is drawn under the ring course only.
    pub fn from_snapshot(snapshot: &RenderSnapshot, palette: &Palette, ground: Option<&Checkerboard>) -> Self {
        let mut scene = Self::new();
        if let (Variant::RingRun, Some(board)) = (snapshot.variant, ground) {
            scene.instances.extend(board.tiles());
        }
        for target in &snapshot.targets {
            scene.add_target(target, palette);
        }
        scene.add_player(&snapshot.player, snapshot.variant, palette);
        for projectile in &snapshot.projectiles {
            scene.add_projectile(projectile, palette);
        }
        for effect in &snapshot.effects {
            scene.add_effect(effect, palette);
        }
        scene
    }

    fn attach(&mut self, parent: &Mat4, position: Vec3, rotation: Quat, half_extents: Vec3, color: [f32; 4]) {
        let local = BoxInstance::new(position, rotation, half_extents, color);
        self.instances.push(BoxInstance::attached(parent, &local));
    }

    /// Add the player's craft
    pub fn add_player(&mut self, player: &PlayerView, variant: Variant, palette: &Palette) {
        let parent = mat4::from_trs(player.position, player.orientation, Vec3::ONE);
        match variant {
            Variant::RingRun => {
                let body = palette.plane;
                // Fuselage, wings, tail fin
                self.attach(&parent, Vec3::ZERO, Quat::IDENTITY, Vec3::new(0.4, 0.4, 2.0), body);
                self.attach(&parent, Vec3::new(0.0, 0.1, 0.0), Quat::IDENTITY, Vec3::new(3.0, 0.05, 0.6), body);
                self.attach(&parent, Vec3::new(0.0, 0.6, 1.7), Quat::IDENTITY, Vec3::new(0.05, 0.5, 0.3), body);
            }
            Variant::AsteroidHunt | Variant::AsteroidBlast => {
                let body = palette.spaceship;
                self.attach(&parent, Vec3::ZERO, Quat::IDENTITY, Vec3::new(0.5, 0.5, 3.0), body);
                // Four wings in an X
                for (sx, sy) in [(-1.0, 1.0), (1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)] {
                    let tilt = Quat::from_roll(0.3 * sx * sy);
                    let center = Vec3::new(2.0 * sx, 0.6 * sy, 1.0);
                    self.attach(&parent, center, tilt, Vec3::new(2.0, 0.1, 0.7), body);
                    let stripe = Vec3::new(2.0 * sx, 0.6 * sy + 0.12 * sy, 1.0);
                    self.attach(&parent, stripe, tilt, Vec3::new(1.6, 0.02, 0.2), palette.wing_stripe);
                }
            }
        }
    }

    /// Add a ring or an asteroid
    pub fn add_target(&mut self, target: &TargetView, palette: &Palette) {
        let rotation = Quat::from_euler_xyz(target.rotation);
        match target.kind {
            TargetKind::Ring => {
                let parent = mat4::from_trs(target.position, rotation, Vec3::ONE);
                let arc = TAU * target.radius / RING_SEGMENTS as f32;
                for i in 0..RING_SEGMENTS {
                    let angle = i as f32 / RING_SEGMENTS as f32 * TAU;
                    let center = Vec3::new(angle.cos(), angle.sin(), 0.0) * target.radius;
                    self.attach(
                        &parent,
                        center,
                        Quat::from_roll(angle),
                        Vec3::new(0.4, arc * 0.5, 0.4),
                        palette.ring,
                    );
                }
            }
            TargetKind::Asteroid => {
                self.instances.push(BoxInstance::new(
                    target.position,
                    rotation,
                    Vec3::splat(target.radius * 0.8),
                    palette.asteroid,
                ));
            }
        }
    }

    /// Add a laser bolt, stretched along its direction of travel
    pub fn add_projectile(&mut self, projectile: &ProjectileView, palette: &Palette) {
        let v = projectile.velocity;
        let heading = if v.x == 0.0 && v.z == 0.0 {
            0.0
        } else {
            (-v.x).atan2(-v.z)
        };
        self.instances.push(BoxInstance::new(
            projectile.position,
            Quat::from_yaw(heading),
            projectile.half_extents,
            palette.laser,
        ));
    }

    /// Add an explosion flash and its debris
    pub fn add_effect(&mut self, effect: &EffectView, palette: &Palette) {
        let [r, g, b] = palette.flash;
        self.instances.push(BoxInstance::new(
            effect.origin,
            Quat::IDENTITY,
            Vec3::splat(effect.flash_scale),
            [r, g, b, effect.flash_opacity],
        ));

        let [r, g, b] = palette.debris;
        for chunk in &effect.debris {
            self.instances.push(BoxInstance::new(
                chunk.position,
                Quat::from_euler_xyz(chunk.rotation),
                Vec3::splat(0.5),
                [r, g, b, chunk.opacity],
            ));
        }
    }

    /// Get the number of boxes
    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
