//! Config Module
//!
//! Centralized configuration for physics, slingshot, round rules and the
//! target layout.

pub mod launcher_config;

pub use launcher_config::{
    ConfigError, LauncherConfig, PhysicsConfig, PlayfieldConfig, ProjectileConfig, RoundConfig,
    SlingshotConfig, TargetConfig, default_target_layout,
};
