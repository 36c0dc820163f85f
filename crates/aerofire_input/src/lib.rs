//! Flight input handling
//!
//! This crate turns raw keyboard and mouse events into held flight controls
//! and one-shot fire requests, then hands them to the simulation once per
//! frame.

mod flight_controller;

pub use flight_controller::{FlightControl, FlightController};
