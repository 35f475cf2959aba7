//! Slingshot
//!
//! The fixed anchor plus the pull point the player drags around. The pull
//! point never leaves the circle of radius `max_drag_distance` around the
//! anchor.

use glam::Vec2;

use crate::physics::collision::clamp_to_radius;

/// Horizontal distance from the anchor to each post.
pub const POST_OFFSET: f32 = 20.0;
/// Height of the posts above the anchor.
pub const POST_HEIGHT: f32 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Slingshot {
    anchor: Vec2,
    drag_point: Vec2,
    max_drag_distance: f32,
}

impl Slingshot {
    pub fn new(anchor: Vec2, max_drag_distance: f32) -> Self {
        Self {
            anchor,
            drag_point: anchor,
            max_drag_distance,
        }
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn drag_point(&self) -> Vec2 {
        self.drag_point
    }

    /// Move the pull point toward `raw`, clamped to the drag circle.
    ///
    /// Returns the clamped point.
    pub fn pull_to(&mut self, raw: Vec2) -> Vec2 {
        self.drag_point = clamp_to_radius(self.anchor, raw, self.max_drag_distance);
        self.drag_point
    }

    /// Snap the pull point back onto the anchor.
    pub fn release(&mut self) {
        self.drag_point = self.anchor;
    }

    /// Base and tip of the left post.
    pub fn left_post(&self) -> (Vec2, Vec2) {
        let base = self.anchor - Vec2::new(POST_OFFSET, 0.0);
        (base, base - Vec2::new(0.0, POST_HEIGHT))
    }

    /// Base and tip of the right post.
    pub fn right_post(&self) -> (Vec2, Vec2) {
        let base = self.anchor + Vec2::new(POST_OFFSET, 0.0);
        (base, base - Vec2::new(0.0, POST_HEIGHT))
    }

    /// Band polyline: left tip, through `pouch`, to the right tip.
    pub fn band(&self, pouch: Vec2) -> [Vec2; 3] {
        [self.left_post().1, pouch, self.right_post().1]
    }
}
