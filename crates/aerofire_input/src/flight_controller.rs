//! Flight controller for keyboard and mouse
//!
//! Controls:
//! - W/S: Thrust forward/backward
//! - A/D: Yaw (and bank) left/right
//! - Space/Shift: Climb/descend
//! - Q/E: Strafe left/right (craft that support it)
//! - F or left mouse button: Fire
//!
//! Presses are ignored while the controller is inactive (title screen);
//! releases always apply so no key gets stuck down.

use aerofire_core::Session;
use aerofire_physics::FlightInput;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Flight controller for handling input
pub struct FlightController {
    // Held controls
    forward: bool,
    backward: bool,
    yaw_left: bool,
    yaw_right: bool,
    ascend: bool,
    descend: bool,
    strafe_left: bool,
    strafe_right: bool,

    // One-shot fire request, cleared by consume_fire
    fire_pressed: bool,

    /// Whether presses are accepted
    active: bool,
}

impl Default for FlightController {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightController {
    pub fn new() -> Self {
        Self {
            forward: false,
            backward: false,
            yaw_left: false,
            yaw_right: false,
            ascend: false,
            descend: false,
            strafe_left: false,
            strafe_right: false,

            fire_pressed: false,

            active: false,
        }
    }

    /// Accept or ignore presses
    ///
    /// Deactivating does not release held keys; their releases still arrive.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is a flight control. Callers should skip
    /// auto-repeat events.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;
        if pressed && !self.active {
            return Self::is_flight_key(key);
        }

        match key {
            KeyCode::KeyW => { self.forward = pressed; true }
            KeyCode::KeyS => { self.backward = pressed; true }
            KeyCode::KeyA => { self.yaw_left = pressed; true }
            KeyCode::KeyD => { self.yaw_right = pressed; true }
            KeyCode::KeyQ => { self.strafe_left = pressed; true }
            KeyCode::KeyE => { self.strafe_right = pressed; true }
            KeyCode::Space => { self.ascend = pressed; true }
            KeyCode::ShiftLeft | KeyCode::ShiftRight => { self.descend = pressed; true }
            KeyCode::KeyF => {
                if pressed {
                    self.fire_pressed = true;
                }
                true
            }
            _ => false,
        }
    }

    fn is_flight_key(key: KeyCode) -> bool {
        matches!(
            key,
            KeyCode::KeyW
                | KeyCode::KeyS
                | KeyCode::KeyA
                | KeyCode::KeyD
                | KeyCode::KeyQ
                | KeyCode::KeyE
                | KeyCode::Space
                | KeyCode::ShiftLeft
                | KeyCode::ShiftRight
                | KeyCode::KeyF
        )
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left && state == ElementState::Pressed && self.active {
            self.fire_pressed = true;
        }
    }

    /// Snapshot of the held controls
    pub fn flight_input(&self) -> FlightInput {
        FlightInput {
            forward: self.forward,
            backward: self.backward,
            yaw_left: self.yaw_left,
            yaw_right: self.yaw_right,
            ascend: self.ascend,
            descend: self.descend,
            strafe_left: self.strafe_left,
            strafe_right: self.strafe_right,
        }
    }

    /// Consume the fire input flag
    ///
    /// Returns true if fire was pressed since last consume, then clears the flag.
    pub fn consume_fire(&mut self) -> bool {
        let was_pressed = self.fire_pressed;
        self.fire_pressed = false;
        was_pressed
    }

    /// Push this frame's controls to the simulation
    pub fn apply<C: FlightControl>(&mut self, target: &mut C) {
        target.set_controls(self.flight_input());
        if self.consume_fire() {
            target.request_fire();
        }
    }
}

/// Trait for anything the controller can fly
pub trait FlightControl {
    fn set_controls(&mut self, controls: FlightInput);
    fn request_fire(&mut self);
}

impl FlightControl for Session {
    fn set_controls(&mut self, controls: FlightInput) {
        Session::set_controls(self, controls);
    }

    fn request_fire(&mut self) {
        Session::request_fire(self);
    }
}
