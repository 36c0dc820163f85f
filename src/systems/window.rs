//! Window management system
//!
//! Handles window creation, fullscreen toggle, and the title-bar HUD.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use aerofire_core::RenderSnapshot;
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    last_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
            last_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Show score and state in the title bar
    ///
    /// The title is only pushed to the OS when it changes.
    pub fn update_title(&mut self, snapshot: &RenderSnapshot) {
        let title = hud_title(&self.base_title, snapshot);
        if title != self.last_title {
            self.window.set_title(&title);
            self.last_title = title;
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Title bar text for a frame
pub fn hud_title(base: &str, snapshot: &RenderSnapshot) -> String {
    format!("{} | {}", base, snapshot.status_line())
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;
    use aerofire_core::{FrameTime, Session, SimConfig, Variant};
    use std::time::Duration;

    #[test]
    fn test_title_before_start() {
        let mut session = Session::new(SimConfig::for_variant(Variant::RingRun).with_seed(1));
        let snapshot = session.tick(FrameTime::new(0.016, Duration::ZERO));
        let title = hud_title("Aerofire", &snapshot);
        assert!(title.starts_with("Aerofire | "));
        assert!(title.contains("Press Enter to start"));
    }

    #[test]
    fn test_title_while_playing() {
        let mut session = Session::new(SimConfig::for_variant(Variant::AsteroidBlast).with_seed(1));
        session.start();
        let snapshot = session.tick(FrameTime::new(0.016, Duration::ZERO));
        assert!(hud_title("Aerofire", &snapshot).contains("Score: 0"));
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
