//! Launcher Configuration
//!
//! Every tunable of the game in one place. `Default` returns the values
//! that give the intended game feel; a JSON file can override any subset
//! of them since each section is `#[serde(default)]`.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics::ballistics::BallisticsConfig;
use crate::physics::collision::Rect;
use crate::render::Color;

/// Integration and settle-detection constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vertical velocity every tick (units/tick²)
    pub gravity: f32,
    /// Per-tick multiplier on horizontal velocity
    pub friction: f32,
    /// Both velocity components below this count as "at rest"
    pub settle_speed: f32,
    /// Below this y the projectile has left the playfield
    pub floor_y: f32,
    /// Below this y a slow projectile counts as resting on the ground
    pub ground_band_y: f32,
    /// Velocity multiplier applied per target smashed
    pub hit_damping: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            friction: 0.99,
            settle_speed: 0.1,
            floor_y: 600.0,
            ground_band_y: 500.0,
            hit_damping: 0.5,
        }
    }
}

impl PhysicsConfig {
    pub fn ballistics(&self) -> BallisticsConfig {
        BallisticsConfig {
            gravity: self.gravity,
            friction: self.friction,
        }
    }
}

/// Slingshot geometry and launch strength.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlingshotConfig {
    /// Fixed launch origin
    pub anchor: Vec2,
    /// Furthest the drag point may be pulled from the anchor
    pub max_drag_distance: f32,
    /// Launch velocity per unit of pull
    pub launch_scale: f32,
    /// Grab distance as a multiple of the projectile radius
    pub grab_radius_factor: f32,
}

impl Default for SlingshotConfig {
    fn default() -> Self {
        Self {
            anchor: Vec2::new(150.0, 400.0),
            max_drag_distance: 100.0,
            launch_scale: 0.2,
            grab_radius_factor: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub radius: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self { radius: 20.0 }
    }
}

/// Per-round rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Umbrellas available after a reset
    pub starting_projectiles: u32,
    /// Points per target destroyed
    pub hit_reward: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            starting_projectiles: 5,
            hit_reward: 100,
        }
    }
}

/// Logical canvas and timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    pub width: f32,
    pub height: f32,
    /// Top edge of the drawn ground strip
    pub ground_top: f32,
    /// Simulation ticks per second
    pub tick_hz: f32,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            ground_top: 540.0,
            tick_hz: 60.0,
        }
    }
}

impl PlayfieldConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// One box in the canonical target layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl TargetConfig {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Five-box pyramid next to the ground on the right side.
pub fn default_target_layout() -> Vec<TargetConfig> {
    vec![
        TargetConfig::new(550.0, 480.0, 60.0, 60.0, Color::rgb(0x8a, 0x2b, 0xe2)),
        TargetConfig::new(610.0, 480.0, 60.0, 60.0, Color::rgb(0x93, 0x70, 0xdb)),
        TargetConfig::new(550.0, 420.0, 60.0, 60.0, Color::rgb(0xba, 0x55, 0xd3)),
        TargetConfig::new(610.0, 420.0, 60.0, 60.0, Color::rgb(0xda, 0x70, 0xd6)),
        TargetConfig::new(580.0, 360.0, 60.0, 60.0, Color::rgb(0xff, 0x00, 0xff)),
    ]
}

/// Central configuration for the whole game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub physics: PhysicsConfig,
    pub slingshot: SlingshotConfig,
    pub projectile: ProjectileConfig,
    pub round: RoundConfig,
    pub playfield: PlayfieldConfig,
    pub targets: Vec<TargetConfig>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            slingshot: SlingshotConfig::default(),
            projectile: ProjectileConfig::default(),
            round: RoundConfig::default(),
            playfield: PlayfieldConfig::default(),
            targets: default_target_layout(),
        }
    }
}

impl LauncherConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject geometry and constants the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        require_finite("physics.gravity", physics.gravity)?;
        require_finite("physics.floor_y", physics.floor_y)?;
        require_finite("physics.ground_band_y", physics.ground_band_y)?;
        if !(physics.friction > 0.0 && physics.friction <= 1.0) {
            return Err(ConfigError::invalid("physics.friction", "must be in (0, 1]"));
        }
        require_positive("physics.settle_speed", physics.settle_speed)?;
        if !(physics.hit_damping >= 0.0 && physics.hit_damping <= 1.0) {
            return Err(ConfigError::invalid("physics.hit_damping", "must be in [0, 1]"));
        }

        let slingshot = &self.slingshot;
        require_finite("slingshot.anchor.x", slingshot.anchor.x)?;
        require_finite("slingshot.anchor.y", slingshot.anchor.y)?;
        require_positive("slingshot.max_drag_distance", slingshot.max_drag_distance)?;
        require_finite("slingshot.launch_scale", slingshot.launch_scale)?;
        require_positive("slingshot.grab_radius_factor", slingshot.grab_radius_factor)?;

        require_positive("projectile.radius", self.projectile.radius)?;

        require_positive("playfield.width", self.playfield.width)?;
        require_positive("playfield.height", self.playfield.height)?;
        require_finite("playfield.ground_top", self.playfield.ground_top)?;
        require_positive("playfield.tick_hz", self.playfield.tick_hz)?;

        for target in &self.targets {
            require_finite("targets[].x", target.x)?;
            require_finite("targets[].y", target.y)?;
            require_positive("targets[].width", target.width)?;
            require_positive("targets[].height", target.height)?;
        }
        Ok(())
    }
}

fn require_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be a finite number"))
    }
}

fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be a positive number"))
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading a launcher config.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON syntax or shape error (includes bad hex colors).
    Json(serde_json::Error),
    /// Parsed fine but a value is out of range.
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        ConfigError::Invalid { field, reason }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
