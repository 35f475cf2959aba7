//! Physics module for the umbrella launcher
//!
//! Hand-rolled 2D physics: no external physics library, simple explicit
//! Euler integration at a fixed tick.
//!
//! # Unit System
//!
//! - Distances in canvas pixels (y grows down)
//! - Velocities in pixels per tick
//! - Accelerations in pixels per tick²
//!
//! # Submodules
//!
//! - [`types`] - Vector type re-exported from glam
//! - [`ballistics`] - Projectile state and per-tick integration
//! - [`collision`] - Rectangle containment and radial clamping

pub mod ballistics;
pub mod collision;
pub mod types;

pub use ballistics::{BallisticsConfig, Projectile, launch_velocity};
pub use collision::{Rect, clamp_to_radius};
pub use types::Vec2;
