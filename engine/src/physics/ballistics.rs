//! Ballistics for the launched umbrella
//!
//! Tick-based explicit Euler integration: one call to [`Projectile::integrate`]
//! per fixed logical tick, with velocities measured in units per tick.
//!
//! # Example
//!
//! ```ignore
//! use umbrella_launcher_engine::physics::ballistics::{BallisticsConfig, Projectile};
//! use glam::Vec2;
//!
//! let config = BallisticsConfig::default();
//! let mut projectile = Projectile::at_rest(Vec2::new(150.0, 400.0), 20.0);
//! projectile.launch(Vec2::new(0.0, -10.0));
//! projectile.integrate(&config);
//! ```

use glam::Vec2;

/// The launchable object.
///
/// Lives for the whole session; it is repositioned on reset rather than
/// respawned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Center position in playfield units
    pub position: Vec2,
    /// Velocity in units per tick
    pub velocity: Vec2,
    /// Radius used for grabbing and drawing
    pub radius: f32,
    /// Whether the player is currently pulling it back
    pub dragging: bool,
    /// Whether it has been released and is under simulation
    pub launched: bool,
}

impl Default for Projectile {
    fn default() -> Self {
        Self::at_rest(Vec2::ZERO, 20.0)
    }
}

impl Projectile {
    /// Create a projectile sitting still at `position`.
    pub fn at_rest(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
            dragging: false,
            launched: false,
        }
    }

    /// Release the projectile with the given initial velocity.
    pub fn launch(&mut self, velocity: Vec2) {
        self.velocity = velocity;
        self.dragging = false;
        self.launched = true;
    }

    /// Put the projectile back at `position`, motionless and unlaunched.
    pub fn rest_at(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.dragging = false;
        self.launched = false;
    }

    /// Whether `point` is close enough to grab the projectile.
    ///
    /// Uses a strict comparison: a point exactly `grab_radius` away misses.
    pub fn can_grab(&self, point: Vec2, grab_radius: f32) -> bool {
        self.position.distance(point) < grab_radius
    }

    /// Advance one tick.
    ///
    /// Order matters and matches the game feel:
    /// - gravity is added to vertical velocity first
    /// - position moves by the updated velocity
    /// - horizontal velocity is damped by friction (vertical is not)
    pub fn integrate(&mut self, config: &BallisticsConfig) {
        self.velocity.y += config.gravity;
        self.position += self.velocity;
        self.velocity.x *= config.friction;
    }

    /// Scale both velocity components, used when smashing through a target.
    pub fn dampen(&mut self, factor: f32) {
        self.velocity *= factor;
    }

    /// Both velocity components are below `threshold` in magnitude.
    pub fn is_nearly_still(&self, threshold: f32) -> bool {
        self.velocity.x.abs() < threshold && self.velocity.y.abs() < threshold
    }
}

/// Global integration constants shared by every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallisticsConfig {
    /// Downward acceleration in units per tick squared
    pub gravity: f32,
    /// Per-tick multiplier applied to horizontal velocity
    pub friction: f32,
}

impl Default for BallisticsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            friction: 0.99,
        }
    }
}

impl BallisticsConfig {
    /// No gravity and no friction, handy for isolating collision behavior.
    pub fn frictionless_vacuum() -> Self {
        Self {
            gravity: 0.0,
            friction: 1.0,
        }
    }
}

/// Slingshot launch velocity: `scale * (anchor - drag_point)`.
///
/// Pulling down-left launches up-right.
pub fn launch_velocity(anchor: Vec2, drag_point: Vec2, scale: f32) -> Vec2 {
    (anchor - drag_point) * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_at_rest() {
        let p = Projectile::at_rest(Vec2::new(150.0, 400.0), 20.0);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert!(!p.launched);
        assert!(!p.dragging);
    }

    #[test]
    fn test_integrate_order() {
        let config = BallisticsConfig::default();
        let mut p = Projectile::at_rest(Vec2::new(0.0, 0.0), 20.0);
        p.launch(Vec2::new(10.0, -10.0));
        p.integrate(&config);

        // vy gets gravity before the position update
        assert_eq!(p.position, Vec2::new(10.0, -9.5));
        assert_eq!(p.velocity.y, -9.5);
        // only vx is damped
        assert!((p.velocity.x - 9.9).abs() < 1e-5);
    }

    #[test]
    fn test_vertical_velocity_not_damped() {
        let config = BallisticsConfig {
            gravity: 0.0,
            friction: 0.5,
        };
        let mut p = Projectile::at_rest(Vec2::ZERO, 20.0);
        p.launch(Vec2::new(4.0, 4.0));
        p.integrate(&config);
        assert_eq!(p.velocity, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_launch_velocity() {
        let v = launch_velocity(Vec2::new(150.0, 400.0), Vec2::new(150.0, 450.0), 0.2);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y + 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_can_grab_is_strict() {
        let p = Projectile::at_rest(Vec2::new(0.0, 0.0), 20.0);
        assert!(p.can_grab(Vec2::new(39.9, 0.0), 40.0));
        assert!(!p.can_grab(Vec2::new(40.0, 0.0), 40.0));
    }

    #[test]
    fn test_rest_at_clears_motion() {
        let mut p = Projectile::at_rest(Vec2::ZERO, 20.0);
        p.launch(Vec2::new(3.0, 4.0));
        p.rest_at(Vec2::new(150.0, 400.0));
        assert_eq!(p.position, Vec2::new(150.0, 400.0));
        assert_eq!(p.velocity, Vec2::ZERO);
        assert!(!p.launched);
    }

    #[test]
    fn test_nearly_still() {
        let mut p = Projectile::at_rest(Vec2::ZERO, 20.0);
        p.velocity = Vec2::new(0.05, -0.09);
        assert!(p.is_nearly_still(0.1));
        p.velocity.y = 0.1;
        assert!(!p.is_nearly_still(0.1));
    }
}
