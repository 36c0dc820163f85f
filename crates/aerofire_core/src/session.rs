//! The frame simulation loop
//!
//! A [`Session`] owns every piece of transient game state: the craft, the
//! target/projectile/effect collections, score, held controls and the
//! pending fire request. [`Session::tick`] advances it by one frame and
//! returns a [`RenderSnapshot`]; nothing here knows about windows or GPUs.

use std::time::Duration;

use aerofire_math::Vec3;
use aerofire_physics::{aabb_vs_aabb, sphere_vs_sphere, CollisionFilter, FlightBody, FlightInput};
use slotmap::SlotMap;

use crate::config::{BoundsPolicy, CollisionRule, SimConfig, Variant};
use crate::entity::{Effect, EffectKey, Projectile, ProjectileKey, Target, TargetKey};
use crate::events::GameEvent;
use crate::snapshot::{
    CameraPose, DebrisView, EffectView, PlayerView, ProjectileView, RenderSnapshot, TargetView,
};
use crate::spawner::Spawner;
use crate::weapon::Weapon;

/// Where the session is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Title screen: rendering only
    #[default]
    NotStarted,
    Playing,
    /// Run ended: rendering only until restart
    GameOver,
}

/// Timing for one tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick
    pub delta: f32,
    /// Monotonic time since the host started, used for rate limits
    pub wall_clock: Duration,
}

impl FrameTime {
    pub fn new(delta: f32, wall_clock: Duration) -> Self {
        Self { delta, wall_clock }
    }
}

/// One play-through of a game mode
pub struct Session {
    config: SimConfig,
    state: SessionState,
    score: u32,
    final_score: Option<u32>,
    player: FlightBody,
    /// Display-only velocity from the last playing tick
    velocity: Vec3,
    controls: FlightInput,
    fire_requested: bool,
    weapon: Weapon,
    spawner: Spawner,
    targets: SlotMap<TargetKey, Target>,
    projectiles: SlotMap<ProjectileKey, Projectile>,
    effects: SlotMap<EffectKey, Effect>,
    /// Events raised outside a tick, delivered with the next snapshot
    pending_events: Vec<GameEvent>,
}

impl Session {
    /// Create a session on the title screen
    pub fn new(config: SimConfig) -> Self {
        let player = Self::spawn_player(&config);
        let spawner = Spawner::new(config.seed);
        Self {
            state: SessionState::NotStarted,
            score: 0,
            final_score: None,
            player,
            velocity: Vec3::ZERO,
            controls: FlightInput::default(),
            fire_requested: false,
            weapon: Weapon::new(),
            spawner,
            targets: SlotMap::with_capacity_and_key(config.target_count),
            projectiles: SlotMap::with_key(),
            effects: SlotMap::with_key(),
            pending_events: Vec::new(),
            config,
        }
    }

    /// Create a session with the preset for `variant`
    pub fn for_variant(variant: Variant) -> Self {
        Self::new(SimConfig::for_variant(variant))
    }

    fn spawn_player(config: &SimConfig) -> FlightBody {
        FlightBody::new(config.spawn_position, config.spawn_yaw, config.flight.radius)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score recorded at the last game over
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn player(&self) -> &FlightBody {
        &self.player
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    pub fn targets(&self) -> impl Iterator<Item = (TargetKey, &Target)> {
        self.targets.iter()
    }

    pub fn projectiles(&self) -> impl Iterator<Item = (ProjectileKey, &Projectile)> {
        self.projectiles.iter()
    }

    pub fn effects(&self) -> impl Iterator<Item = (EffectKey, &Effect)> {
        self.effects.iter()
    }

    /// Mutable access to a target, for scripted setups
    pub fn target_mut(&mut self, key: TargetKey) -> Option<&mut Target> {
        self.targets.get_mut(key)
    }

    /// Move the craft directly, for scripted setups
    pub fn player_mut(&mut self) -> &mut FlightBody {
        &mut self.player
    }

    /// Replace the held controls used by the next playing tick
    pub fn set_controls(&mut self, controls: FlightInput) {
        self.controls = controls;
    }

    pub fn controls(&self) -> FlightInput {
        self.controls
    }

    /// Queue one shot for the next tick
    ///
    /// Ignored outside `Playing` and for modes without a weapon.
    pub fn request_fire(&mut self) {
        if self.state != SessionState::Playing || self.config.weapon.is_none() {
            log::trace!("Fire request ignored in state {:?}", self.state);
            return;
        }
        self.fire_requested = true;
    }

    /// Whether a shot is queued for the next tick
    pub fn fire_requested(&self) -> bool {
        self.fire_requested
    }

    /// Leave the title screen and spawn the initial targets
    ///
    /// Returns false (and changes nothing) unless the session is `NotStarted`.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::NotStarted {
            log::debug!("Ignoring start in state {:?}", self.state);
            return false;
        }

        self.score = 0;
        self.state = SessionState::Playing;
        let mut events = vec![GameEvent::Started];
        self.spawn_population(&mut events);
        self.pending_events.extend(events);

        log::info!("{} started with {} targets", self.config.variant, self.targets.len());
        true
    }

    /// Reset everything after a game over and play again
    ///
    /// Returns false (and changes nothing) unless the session is `GameOver`.
    /// Held movement controls are kept; a queued shot is discarded.
    pub fn restart(&mut self) -> bool {
        if self.state != SessionState::GameOver {
            log::debug!("Ignoring restart in state {:?}", self.state);
            return false;
        }

        self.targets.clear();
        self.projectiles.clear();
        self.effects.clear();
        self.player = Self::spawn_player(&self.config);
        self.velocity = Vec3::ZERO;
        self.weapon.reset();
        self.fire_requested = false;
        self.score = 0;
        self.state = SessionState::Playing;

        let mut events = vec![GameEvent::Restarted];
        self.spawn_population(&mut events);
        self.pending_events.extend(events);

        log::info!("{} restarted", self.config.variant);
        true
    }

    /// Advance the session by one frame
    pub fn tick(&mut self, frame: FrameTime) -> RenderSnapshot {
        let dt = self.config.clamp_delta(frame.delta);
        let mut events = std::mem::take(&mut self.pending_events);
        let fire = std::mem::take(&mut self.fire_requested);

        if self.state == SessionState::Playing {
            self.step(dt, frame.wall_clock, fire, &mut events);
        }

        for event in &events {
            if !event.is_lifecycle() {
                log::debug!("{:?}", event);
            }
        }

        self.snapshot(events)
    }

    fn step(&mut self, dt: f32, now: Duration, fire: bool, events: &mut Vec<GameEvent>) {
        let previous = self.player.position;
        self.player.integrate(&self.controls, &self.config.flight, dt);

        let violation = match self.config.bounds {
            BoundsPolicy::Clamp(bounds) => self.player.clamp_to(&bounds).ground_strike,
            BoundsPolicy::Terminal(bounds) => self.player.check_bounds(&bounds).outside,
        };

        self.update_projectiles(dt, events);
        if fire {
            self.fire(now, events);
        }
        self.update_effects(dt, events);

        match self.config.collision {
            CollisionRule::Touch => self.collect_touched(events),
            CollisionRule::Projectile => self.resolve_projectile_hits(events),
        }

        self.velocity = if dt > 0.0 {
            (self.player.position - previous) / dt
        } else {
            Vec3::ZERO
        };

        if violation {
            self.game_over(events);
            return;
        }

        for target in self.targets.values_mut() {
            target.advance_spin();
        }
    }

    fn update_projectiles(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        let origin = self.player.position;
        let max_range = self
            .config
            .weapon
            .as_ref()
            .map_or(f32::INFINITY, |w| w.max_range);

        self.projectiles.retain(|key, bolt| {
            let expired = bolt.update(dt);
            let out_of_range = bolt.position().distance(origin) > max_range;
            if expired || out_of_range {
                events.push(GameEvent::ProjectileExpired { key });
                false
            } else {
                true
            }
        });
    }

    fn fire(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        let Some(weapon) = self.config.weapon.as_ref() else {
            return;
        };

        let Some(mount) = self.weapon.try_fire(now, weapon) else {
            log::trace!("Fire request dropped: cannon cooling down");
            return;
        };

        let position = self.player.position + self.player.orientation().rotate(mount);
        let velocity = self.player.forward() * weapon.projectile_speed;
        let bolt = Projectile::new(
            position,
            velocity,
            weapon.lifetime,
            Vec3::from_array(weapon.half_extents),
        );
        let key = self.projectiles.insert(bolt);
        events.push(GameEvent::ProjectileFired { key, position });
    }

    fn update_effects(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        let Some(config) = self.config.effects else {
            return;
        };

        self.effects.retain(|key, effect| {
            if effect.update(dt, &config) {
                events.push(GameEvent::EffectExpired { key });
                false
            } else {
                true
            }
        });
    }

    fn collect_touched(&mut self, events: &mut Vec<GameEvent>) {
        let player = self.player.collider();
        let player_filter = CollisionFilter::player();

        let touched: Vec<TargetKey> = self
            .targets
            .iter()
            .filter(|(_, target)| target.filter().collides_with(&player_filter))
            .filter(|(_, target)| sphere_vs_sphere(&player, &target.sphere()).is_some())
            .map(|(key, _)| key)
            .collect();

        for key in touched {
            if self.targets.remove(key).is_none() {
                continue;
            }
            self.score += self.config.score_reward;
            events.push(GameEvent::TargetCollected { key, score: self.score });
            self.spawn_target(events);
        }
    }

    fn resolve_projectile_hits(&mut self, events: &mut Vec<GameEvent>) {
        let laser_filter = CollisionFilter::player_projectile();
        let mut hits: Vec<(ProjectileKey, TargetKey)> = Vec::new();

        for (bolt_key, bolt) in &self.projectiles {
            let bolt_box = bolt.bounding_box();
            let hit = self.targets.iter().find(|(target_key, target)| {
                target.filter().collides_with(&laser_filter)
                    && !hits.iter().any(|(_, claimed)| claimed == target_key)
                    && aabb_vs_aabb(&bolt_box, &target.bounding_box()).is_some()
            });
            if let Some((target_key, _)) = hit {
                hits.push((bolt_key, target_key));
            }
        }

        for (projectile, key) in hits {
            let Some(target) = self.targets.remove(key) else {
                continue;
            };
            self.projectiles.remove(projectile);
            self.score += self.config.score_reward;
            events.push(GameEvent::TargetDestroyed {
                key,
                projectile,
                score: self.score,
            });

            if let Some(config) = self.config.effects {
                let debris = self.spawner.spawn_debris(target.position, &config);
                let effect_key = self.effects.insert(Effect::new(target.position, &config, debris));
                events.push(GameEvent::EffectSpawned {
                    key: effect_key,
                    position: target.position,
                });
            }

            self.spawn_target(events);
        }
    }

    fn game_over(&mut self, events: &mut Vec<GameEvent>) {
        self.state = SessionState::GameOver;
        self.final_score = Some(self.score);
        events.push(GameEvent::GameOver {
            final_score: self.score,
        });
        log::info!("Game over! Final score: {}", self.score);
    }

    fn spawn_population(&mut self, events: &mut Vec<GameEvent>) {
        for _ in 0..self.config.target_count {
            self.spawn_target(events);
        }
    }

    fn spawn_target(&mut self, events: &mut Vec<GameEvent>) {
        let target = self.spawner.spawn_target(&self.config.spawn);
        let position = target.position;
        let key = self.targets.insert(target);
        events.push(GameEvent::TargetSpawned { key, position });
    }

    fn snapshot(&self, events: Vec<GameEvent>) -> RenderSnapshot {
        let player = &self.player;
        RenderSnapshot {
            variant: self.config.variant,
            state: self.state,
            score: self.score,
            final_score: self.final_score,
            player: PlayerView {
                position: player.position,
                orientation: player.orientation(),
                yaw: player.yaw,
                bank: player.bank,
                radius: player.radius,
            },
            camera: CameraPose::chase(player, self.config.camera_offset),
            velocity: self.velocity,
            targets: self
                .targets
                .iter()
                .map(|(key, t)| TargetView {
                    key,
                    kind: t.kind,
                    position: t.position,
                    rotation: t.rotation,
                    radius: t.radius,
                })
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|(key, p)| ProjectileView {
                    key,
                    position: p.position(),
                    velocity: p.body.velocity,
                    half_extents: p.half_extents,
                })
                .collect(),
            effects: self
                .effects
                .iter()
                .map(|(key, e)| EffectView {
                    key,
                    origin: e.origin,
                    flash_opacity: e.flash_opacity,
                    flash_scale: e.flash_scale,
                    debris: e
                        .debris
                        .iter()
                        .map(|d| DebrisView {
                            position: d.body.position,
                            rotation: d.rotation,
                            opacity: d.opacity,
                        })
                        .collect(),
                })
                .collect(),
            events,
        }
    }
}
