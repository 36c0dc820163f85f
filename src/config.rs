//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`AEROFIRE_SECTION__KEY`)

use aerofire_core::{SimConfig, Variant};
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Game mode and simulation tuning
    #[serde(default)]
    pub game: GameConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`AEROFIRE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // AEROFIRE_GAME__VARIANT=asteroid_blast -> game.variant = "asteroid_blast"
        figment = figment.merge(Env::prefixed("AEROFIRE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title prefix, followed by the HUD line
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Aerofire".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera lens configuration
///
/// Placement comes from the game mode's chase offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 2000.0,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Which game mode to play
    pub variant: Variant,
    /// Fixed RNG seed; random per run when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Longest frame delta the simulation will take, in seconds
    pub max_delta: f32,
    /// Override for the number of live targets
    #[serde(default)]
    pub target_count: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            seed: None,
            max_delta: 0.1,
            target_count: None,
        }
    }
}

impl GameConfig {
    /// Build the simulation settings for the chosen mode
    pub fn to_sim_config(&self) -> SimConfig {
        let mut config = SimConfig::for_variant(self.variant).with_max_delta(self.max_delta);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(count) = self.target_count {
            config = config.with_target_count(count);
        }
        config
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Clear color over the ring course [r, g, b, a]
    pub sky_color: [f32; 4],
    /// Clear color in space [r, g, b, a]
    pub space_color: [f32; 4],
    /// Draw the checkerboard ground under the ring course
    pub show_ground: bool,
    /// Light direction [x, y, z]
    pub light_dir: [f32; 3],
    /// Ambient light strength
    pub ambient_strength: f32,
    /// Diffuse light strength
    pub diffuse_strength: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            sky_color: [0.53, 0.81, 0.92, 1.0],
            space_color: [0.0, 0.0, 0.0, 1.0],
            show_ground: true,
            light_dir: [0.5, 1.0, 0.3],
            ambient_strength: 0.4,
            diffuse_strength: 0.6,
        }
    }
}

impl RenderingConfig {
    /// Clear color for a game mode
    pub fn background_for(&self, variant: Variant) -> [f32; 4] {
        match variant {
            Variant::RingRun => self.sky_color,
            Variant::AsteroidHunt | Variant::AsteroidBlast => self.space_color,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log every game event at info
    pub log_events: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_events: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.game.variant, Variant::RingRun);
        assert_eq!(config.game.max_delta, 0.1);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("variant = \"ring_run\""));
    }

    #[test]
    fn test_to_sim_config_applies_overrides() {
        let game = GameConfig {
            variant: Variant::AsteroidBlast,
            seed: Some(7),
            max_delta: 0.05,
            target_count: Some(3),
        };
        let sim = game.to_sim_config();
        assert_eq!(sim.variant, Variant::AsteroidBlast);
        assert_eq!(sim.seed, Some(7));
        assert_eq!(sim.max_delta, 0.05);
        assert_eq!(sim.target_count, 3);
        assert!(sim.effects.is_some());
    }

    #[test]
    fn test_background_per_variant() {
        let rendering = RenderingConfig::default();
        assert_eq!(rendering.background_for(Variant::RingRun), rendering.sky_color);
        assert_eq!(rendering.background_for(Variant::AsteroidHunt), rendering.space_color);
    }
}
