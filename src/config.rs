//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`BOUNCE_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Physics configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`BOUNCE_*`)
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

        // Environment variables override everything
        // BOUNCE_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("BOUNCE_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: f32,
    /// Window height in logical pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Bouncy Balls".to_string(),
            width: 607.5,
            height: 1080.0,
        }
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravity acceleration [x, y]; y grows downward
    pub gravity: [f32; 2],
    /// Fixed simulation timestep in seconds
    pub timestep: f32,
    /// Physics steps per rendered frame
    pub steps_per_frame: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, 900.0],
            timestep: 1.0 / 60.0,
            steps_per_frame: 1,
        }
    }
}

/// Scene configuration: the boundary box and the ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Elasticity of the boundary segments
    pub wall_elasticity: f32,
    /// Friction of the boundary segments
    pub wall_friction: f32,
    /// Ball mass
    pub ball_mass: f32,
    /// Ball radius
    pub ball_radius: f32,
    /// Ball elasticity
    pub ball_elasticity: f32,
    /// Ball friction
    pub ball_friction: f32,
    /// Inclusive integer range the spawn x coordinate is drawn from
    pub spawn_x_min: i32,
    pub spawn_x_max: i32,
    /// Fixed spawn y coordinate
    pub spawn_y: f32,
    /// Initial ball velocity [x, y]
    pub initial_velocity: [f32; 2],
    /// RNG seed for the spawn position; omit for a wall-clock seed
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            wall_elasticity: 0.9,
            wall_friction: 0.9,
            ball_mass: 10.0,
            ball_radius: 50.0,
            ball_elasticity: 0.975,
            ball_friction: 0.5,
            spawn_x_min: 115,
            spawn_x_max: 350,
            spawn_y: 200.0,
            initial_velocity: [200.0, -100.0],
            seed: None,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Clear color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Triangle fan resolution for circles
    pub circle_segments: u32,
    /// Frame rate cap in frames per second
    pub target_fps: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [1.0, 1.0, 1.0, 1.0],
            circle_segments: 48,
            target_fps: 60,
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
