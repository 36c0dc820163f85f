//! Core simulation for Aerofire
//!
//! This crate owns the game rules and nothing else:
//!
//! - [`SimConfig`] - Per-mode tuning, built from a [`Variant`] preset
//! - [`Session`] - Lifecycle state machine and the per-frame [`Session::tick`]
//! - [`Target`], [`Projectile`], [`Effect`] - Entities, keyed by generational keys
//! - [`Weapon`] - Rate-limited cannon with alternating mounts
//! - [`Spawner`] - Seedable random placement
//! - [`RenderSnapshot`] - What a tick hands to the renderer and HUD
//! - [`GameEvent`] - What happened during a tick, for audio and logging

mod config;
mod entity;
mod events;
mod session;
mod snapshot;
mod spawner;
mod weapon;

pub use config::{
    BoundsPolicy, CollisionRule, EffectConfig, SimConfig, SpawnConfig, TargetKind, Variant,
    WeaponConfig,
};
pub use entity::{Debris, Effect, EffectKey, Lifespan, Projectile, ProjectileKey, Target, TargetKey};
pub use events::GameEvent;
pub use session::{FrameTime, Session, SessionState};
pub use snapshot::{
    CameraPose, DebrisView, EffectView, PlayerView, ProjectileView, RenderSnapshot, TargetView,
};
pub use spawner::Spawner;
pub use weapon::Weapon;

// Re-export commonly used types for convenience
pub use aerofire_math::{Quat, Vec3};
pub use aerofire_physics::{Bounds, FlightBody, FlightConfig, FlightInput};
