//! Collision system: projectile against the target field.
//!
//! Pure game logic with no GPU dependencies. The projectile is treated as a
//! point at its center.

use glam::Vec2;

use crate::game::targets::TargetField;

/// Stateless collision system over the rectangle primitives.
pub struct CollisionSystem;

impl CollisionSystem {
    /// Destroy every standing target whose bounds strictly contain `center`.
    ///
    /// All overlapping targets are hit in the same call. Returns the indices
    /// of the targets destroyed, in layout order.
    pub fn smash_targets(center: Vec2, field: &mut TargetField) -> Vec<usize> {
        let mut hits = Vec::new();

        for (i, target) in field.targets_mut().iter_mut().enumerate() {
            if target.destroyed {
                continue;
            }
            if target.bounds.contains_strict(center) {
                target.destroyed = true;
                hits.push(i);
            }
        }

        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::{TargetConfig, default_target_layout};
    use crate::render::Color;

    #[test]
    fn test_smash_inside_target() {
        let mut field = TargetField::from_layout(&default_target_layout());
        let hits = CollisionSystem::smash_targets(Vec2::new(580.0, 510.0), &mut field);
        assert_eq!(hits, vec![0]);
        assert!(field.targets()[0].destroyed);
        assert_eq!(field.standing_count(), 4);
    }

    #[test]
    fn test_destroyed_target_is_inert() {
        let mut field = TargetField::from_layout(&default_target_layout());
        let center = Vec2::new(580.0, 510.0);
        CollisionSystem::smash_targets(center, &mut field);
        assert!(CollisionSystem::smash_targets(center, &mut field).is_empty());
        assert_eq!(field.standing_count(), 4);
    }

    #[test]
    fn test_shared_edge_hits_nothing() {
        let mut field = TargetField::from_layout(&default_target_layout());
        // x = 610 is the seam between the two bottom boxes
        let hits = CollisionSystem::smash_targets(Vec2::new(610.0, 500.0), &mut field);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_overlapping_targets_all_hit() {
        let layout = vec![
            TargetConfig::new(0.0, 0.0, 50.0, 50.0, Color::WHITE),
            TargetConfig::new(10.0, 10.0, 50.0, 50.0, Color::WHITE),
            TargetConfig::new(200.0, 200.0, 50.0, 50.0, Color::WHITE),
        ];
        let mut field = TargetField::from_layout(&layout);
        let hits = CollisionSystem::smash_targets(Vec2::new(25.0, 25.0), &mut field);
        assert_eq!(hits, vec![0, 1]);
    }
}
