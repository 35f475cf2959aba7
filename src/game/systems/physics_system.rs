//! Physics engine for one umbrella, one slingshot and a field of targets.
//!
//! Owns all continuous state. Callers drive it through commands (drag,
//! launch, step, reset) and never touch the projectile directly. A step
//! does not know about game modes: it reports what happened and whether
//! the projectile has settled, and the caller decides what that means.

use glam::Vec2;

use crate::game::config::{LauncherConfig, PhysicsConfig};
use crate::game::slingshot::Slingshot;
use crate::game::systems::collision_system::CollisionSystem;
use crate::game::targets::{Target, TargetField};
use crate::physics::ballistics::{BallisticsConfig, Projectile, launch_velocity};

/// What the caller should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTransition {
    /// Still in flight.
    Continue,
    /// Left the playfield or came to rest on the ground.
    Settle,
}

/// Result of one [`PhysicsEngine::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Indices of targets destroyed this tick.
    pub hits: Vec<usize>,
    pub transition: StepTransition,
}

impl StepReport {
    pub fn hit_count(&self) -> u32 {
        self.hits.len() as u32
    }
}

pub struct PhysicsEngine {
    projectile: Projectile,
    slingshot: Slingshot,
    targets: TargetField,
    ballistics: BallisticsConfig,
    physics: PhysicsConfig,
    launch_scale: f32,
    grab_radius: f32,
}

impl PhysicsEngine {
    pub fn new(config: &LauncherConfig) -> Self {
        let anchor = config.slingshot.anchor;
        let radius = config.projectile.radius;
        Self {
            projectile: Projectile::at_rest(anchor, radius),
            slingshot: Slingshot::new(anchor, config.slingshot.max_drag_distance),
            targets: TargetField::from_layout(&config.targets),
            ballistics: config.physics.ballistics(),
            physics: config.physics.clone(),
            launch_scale: config.slingshot.launch_scale,
            grab_radius: radius * config.slingshot.grab_radius_factor,
        }
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn slingshot(&self) -> &Slingshot {
        &self.slingshot
    }

    pub fn targets(&self) -> &[Target] {
        self.targets.targets()
    }

    pub fn target_field(&self) -> &TargetField {
        &self.targets
    }

    pub fn all_targets_destroyed(&self) -> bool {
        self.targets.all_destroyed()
    }

    /// Whether a pointer at `point` is close enough to pick up the projectile.
    pub fn can_grab(&self, point: Vec2) -> bool {
        self.projectile.can_grab(point, self.grab_radius)
    }

    pub fn begin_drag(&mut self) {
        self.projectile.dragging = true;
    }

    /// Move the pull point and carry the projectile with it.
    pub fn drag_to(&mut self, raw: Vec2) -> Vec2 {
        let point = self.slingshot.pull_to(raw);
        self.projectile.position = point;
        point
    }

    /// Release the band. Returns the launch velocity.
    pub fn launch(&mut self) -> Vec2 {
        let velocity = launch_velocity(
            self.slingshot.anchor(),
            self.slingshot.drag_point(),
            self.launch_scale,
        );
        self.projectile.launch(velocity);
        velocity
    }

    /// Advance the flight by one tick.
    ///
    /// Each target hit halves the velocity again, so two hits in one tick
    /// leave a quarter of it.
    pub fn step(&mut self) -> StepReport {
        self.projectile.integrate(&self.ballistics);

        let hits = CollisionSystem::smash_targets(self.projectile.position, &mut self.targets);
        for _ in &hits {
            self.projectile.dampen(self.physics.hit_damping);
        }

        let transition = if self.has_settled() {
            StepTransition::Settle
        } else {
            StepTransition::Continue
        };

        StepReport { hits, transition }
    }

    fn has_settled(&self) -> bool {
        let y = self.projectile.position.y;
        y > self.physics.floor_y
            || (y > self.physics.ground_band_y
                && self.projectile.is_nearly_still(self.physics.settle_speed))
    }

    /// Put the projectile back in the pouch, motionless.
    pub fn reset_projectile(&mut self) {
        self.projectile.rest_at(self.slingshot.anchor());
        self.slingshot.release();
    }

    /// Full reset: projectile home and every target standing again.
    pub fn reset(&mut self) {
        self.targets.reset();
        self.reset_projectile();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PhysicsEngine {
        PhysicsEngine::new(&LauncherConfig::default())
    }

    #[test]
    fn test_grab_radius_is_twice_projectile_radius() {
        let e = engine();
        assert!(e.can_grab(Vec2::new(189.0, 400.0)));
        assert!(!e.can_grab(Vec2::new(190.0, 400.0)));
    }

    #[test]
    fn test_drag_moves_projectile_with_clamp() {
        let mut e = engine();
        e.begin_drag();
        let p = e.drag_to(Vec2::new(150.0, 700.0));
        assert_eq!(p, Vec2::new(150.0, 500.0));
        assert_eq!(e.projectile().position, p);
        assert!(e.projectile().dragging);
    }

    #[test]
    fn test_launch_velocity_from_pull() {
        let mut e = engine();
        e.begin_drag();
        e.drag_to(Vec2::new(150.0, 450.0));
        let v = e.launch();
        assert!(v.x.abs() < 1e-5);
        assert!((v.y + 10.0).abs() < 1e-5);
        assert!(e.projectile().launched);
        assert!(!e.projectile().dragging);
    }

    #[test]
    fn test_step_falls_off_floor() {
        let mut e = engine();
        e.launch();
        e.projectile.position = Vec2::new(300.0, 599.9);
        e.projectile.velocity = Vec2::new(0.0, 1.0);
        assert_eq!(e.step().transition, StepTransition::Settle);
    }

    #[test]
    fn test_step_rests_in_ground_band() {
        let mut e = engine();
        e.launch();
        // gravity disabled so the body stays put
        e.ballistics = BallisticsConfig::frictionless_vacuum();
        e.projectile.position = Vec2::new(300.0, 510.0);
        e.projectile.velocity = Vec2::new(0.05, 0.0);
        assert_eq!(e.step().transition, StepTransition::Settle);

        e.projectile.position = Vec2::new(300.0, 400.0);
        assert_eq!(e.step().transition, StepTransition::Continue);
    }

    #[test]
    fn test_hit_halves_velocity() {
        let mut e = engine();
        e.launch();
        e.ballistics = BallisticsConfig::frictionless_vacuum();
        e.projectile.position = Vec2::new(570.0, 500.0);
        e.projectile.velocity = Vec2::new(4.0, 2.0);
        let report = e.step();
        assert_eq!(report.hits, vec![0]);
        assert_eq!(e.projectile().velocity, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut e = engine();
        e.begin_drag();
        e.drag_to(Vec2::new(100.0, 430.0));
        e.launch();
        e.projectile.position = Vec2::new(580.0, 510.0);
        e.step();
        e.reset();
        assert_eq!(e.projectile().position, Vec2::new(150.0, 400.0));
        assert_eq!(e.projectile().velocity, Vec2::ZERO);
        assert_eq!(e.slingshot().drag_point(), e.slingshot().anchor());
        assert_eq!(e.target_field().standing_count(), 5);
    }
}
