//! Collision primitives for the 2D playfield
//!
//! Targets are axis-aligned rectangles and the projectile is treated as a
//! point at its center, so a hit is plain point-in-rectangle containment.

use glam::Vec2;

/// Axis-aligned rectangle in canvas space (y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict containment: a point lying exactly on an edge is outside.
    pub fn contains_strict(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x > self.min.x && point.x < max.x && point.y > self.min.y && point.y < max.y
    }
}

/// Clamp `point` to lie within `max_distance` of `origin`.
///
/// Points already inside the circle are returned unchanged; points outside
/// are pulled back along the same direction onto the circle.
pub fn clamp_to_radius(origin: Vec2, point: Vec2, max_distance: f32) -> Vec2 {
    let offset = point - origin;
    let distance = offset.length();
    if distance > max_distance {
        origin + offset * (max_distance / distance)
    } else {
        point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_interior() {
        let rect = Rect::new(550.0, 480.0, 60.0, 60.0);
        assert!(rect.contains_strict(Vec2::new(580.0, 510.0)));
        assert!(rect.contains_strict(rect.center()));
    }

    #[test]
    fn test_rect_edges_are_outside() {
        let rect = Rect::new(550.0, 480.0, 60.0, 60.0);
        assert!(!rect.contains_strict(Vec2::new(550.0, 500.0)));
        assert!(!rect.contains_strict(Vec2::new(610.0, 500.0)));
        assert!(!rect.contains_strict(Vec2::new(580.0, 480.0)));
        assert!(!rect.contains_strict(Vec2::new(580.0, 540.0)));
    }

    #[test]
    fn test_clamp_inside_unchanged() {
        let origin = Vec2::new(150.0, 400.0);
        let p = Vec2::new(170.0, 430.0);
        assert_eq!(clamp_to_radius(origin, p, 100.0), p);
    }

    #[test]
    fn test_clamp_outside_preserves_direction() {
        let origin = Vec2::new(150.0, 400.0);
        let clamped = clamp_to_radius(origin, Vec2::new(450.0, 800.0), 100.0);
        assert!((clamped.distance(origin) - 100.0).abs() < 1e-3);
        // 3-4-5 direction
        assert!((clamped.x - 210.0).abs() < 1e-3);
        assert!((clamped.y - 480.0).abs() < 1e-3);
    }
}
