//! Flight physics for Aerofire
//!
//! This crate provides the small amount of physics the flight demos need:
//! - Collision shapes (spheres, AABBs) and world bounds
//! - Brute-force overlap tests with collision layer filtering
//! - Kinematic bodies for projectiles and debris
//! - Player flight kinematics (thrust, strafe, yaw, banking, gravity sink)

pub mod body;
pub mod collision;
pub mod player;
pub mod shapes;

// Re-export commonly used types
pub use body::KinematicBody;
pub use collision::{aabb_vs_aabb, sphere_vs_sphere, CollisionFilter, CollisionLayer, Contact};
pub use player::{BoundsCheck, FlightBody, FlightConfig, FlightInput, DEFAULT_PLAYER_RADIUS};
pub use shapes::{Aabb, Bounds, Sphere};
