//! Aerofire application library
//!
//! Configuration, input mapping and the systems `main.rs` wires together.

pub mod config;
pub mod input;
pub mod systems;
