//! Triangle mesh for the native overlay pipeline.
//!
//! Painter's order: ground, slingshot posts, band, targets, umbrella.
//! The background is the pass clear color, not geometry.

use glam::Vec2;

use crate::game::render::frame::{FrameView, palette};
use crate::render::Mesh;

const GLOW_SEGMENTS: u32 = 32;
const CANOPY_SEGMENTS: u32 = 24;

/// Build the full frame as one mesh in playfield coordinates.
pub fn build_playfield_mesh(frame: &FrameView<'_>) -> Mesh {
    let mut mesh = Mesh::new(frame.playfield.size());

    let (ground_min, ground_size) = frame.ground();
    mesh.fill_rect(ground_min, ground_size, palette::GROUND);

    for (base, tip) in [frame.slingshot.left_post(), frame.slingshot.right_post()] {
        mesh.line(base, tip, palette::POST_WIDTH, palette::SLINGSHOT);
    }

    if frame.shows_band() {
        mesh.polyline(&frame.band(), palette::BAND_WIDTH, palette::BAND);
    }

    for target in frame.standing_targets() {
        mesh.fill_rect(target.bounds.min, target.bounds.size, target.color);
        mesh.stroke_rect(
            target.bounds.min,
            target.bounds.size,
            palette::OUTLINE_WIDTH,
            palette::TARGET_OUTLINE,
        );
    }

    push_umbrella(&mut mesh, frame.projectile.position, frame.projectile.radius);
    mesh
}

fn push_umbrella(mesh: &mut Mesh, center: Vec2, radius: f32) {
    mesh.radial_gradient(
        center,
        radius + palette::GLOW_BLUR,
        GLOW_SEGMENTS,
        palette::GLOW.with_alpha(0xa0),
        palette::GLOW.with_alpha(0x00),
    );
    mesh.disc(center, radius * 0.8, CANOPY_SEGMENTS, palette::CANOPY);
    // handle
    mesh.line(
        center,
        center + Vec2::new(0.0, radius),
        palette::POST_WIDTH * 0.5,
        palette::TARGET_OUTLINE,
    );
}
