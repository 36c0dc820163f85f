//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to session and window actions like Start, Restart, Exit.
//! Flight keys (WASD, QE, Space, Shift, F) are NOT mapped here - they go directly to FlightController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not flight)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Begin the run from the title screen (Enter)
    Start,
    /// Play again after a game over (R key)
    Restart,
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F11)
    ToggleFullscreen,
}

/// Maps raw input events to semantic actions
///
/// Flight keys are NOT mapped here - they go directly to the
/// FlightController. This mapper handles "special" keys only.
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for flight keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Enter | KeyCode::NumpadEnter => Some(InputAction::Start),
            KeyCode::KeyR => Some(InputAction::Restart),
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::F11 => Some(InputAction::ToggleFullscreen),
            _ => None, // Flight keys handled by controller
        }
    }
}
