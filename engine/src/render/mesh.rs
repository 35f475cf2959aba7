//! 2D triangle mesh for the overlay pipeline
//!
//! Shapes are added in playfield coordinates (origin top-left, y down) and
//! stored directly in NDC, so the shader is a pass-through.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::color::Color;

/// Vertex for flat-colored 2D geometry
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Normalized device coordinates
    pub position: [f32; 2],
    /// Linear RGBA
    pub color: [f32; 4],
}

// Must match the vertex buffer layout in GpuContext (2 + 4 floats)
static_assertions::assert_eq_size!(Vertex, [u8; 24]);

/// Batched triangles for one frame.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Logical size of the playfield the shapes are authored in
    viewport: Vec2,
}

impl Mesh {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            viewport,
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Convert a playfield point to NDC (y flipped).
    pub fn to_ndc(&self, point: Vec2) -> [f32; 2] {
        [
            (point.x / self.viewport.x) * 2.0 - 1.0,
            1.0 - (point.y / self.viewport.y) * 2.0,
        ]
    }

    fn push_vertex(&mut self, point: Vec2, color: [f32; 4]) -> u32 {
        let index = self.vertices.len() as u32;
        let position = self.to_ndc(point);
        self.vertices.push(Vertex { position, color });
        index
    }

    /// Add an arbitrary quad given corners in winding order.
    pub fn add_quad(&mut self, corners: [Vec2; 4], color: Color) {
        let color = color.to_linear();
        let base = self.vertices.len() as u32;
        for corner in corners {
            self.push_vertex(corner, color);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Filled axis-aligned rectangle from its top-left corner and size.
    pub fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        let max = min + size;
        self.add_quad(
            [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)],
            color,
        );
    }

    /// Straight segment with the given thickness.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let dir = (to - from).normalize_or_zero();
        if dir == Vec2::ZERO {
            return;
        }
        let offset = dir.perp() * (width * 0.5);
        self.add_quad([from + offset, to + offset, to - offset, from - offset], color);
    }

    /// Connected segments through `points`.
    pub fn polyline(&mut self, points: &[Vec2], width: f32, color: Color) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], width, color);
        }
    }

    /// Rectangle outline drawn centered on the rectangle's edges.
    pub fn stroke_rect(&mut self, min: Vec2, size: Vec2, width: f32, color: Color) {
        let half = width * 0.5;
        let max = min + size;
        // horizontal edges span the full width including the corners
        self.fill_rect(
            Vec2::new(min.x - half, min.y - half),
            Vec2::new(size.x + width, width),
            color,
        );
        self.fill_rect(
            Vec2::new(min.x - half, max.y - half),
            Vec2::new(size.x + width, width),
            color,
        );
        self.fill_rect(
            Vec2::new(min.x - half, min.y + half),
            Vec2::new(width, size.y - width),
            color,
        );
        self.fill_rect(
            Vec2::new(max.x - half, min.y + half),
            Vec2::new(width, size.y - width),
            color,
        );
    }

    /// Filled circle as a triangle fan.
    pub fn disc(&mut self, center: Vec2, radius: f32, segments: u32, color: Color) {
        self.radial_gradient(center, radius, segments, color, color);
    }

    /// Disc whose color fades from `inner` at the center to `outer` at the rim.
    pub fn radial_gradient(
        &mut self,
        center: Vec2,
        radius: f32,
        segments: u32,
        inner: Color,
        outer: Color,
    ) {
        let segments = segments.max(3);
        let hub = self.push_vertex(center, inner.to_linear());
        let rim_color = outer.to_linear();
        let first = self.vertices.len() as u32;
        for i in 0..segments {
            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
            let rim = center + Vec2::new(angle.cos(), angle.sin()) * radius;
            self.push_vertex(rim, rim_color);
        }
        for i in 0..segments {
            let a = first + i;
            let b = first + (i + 1) % segments;
            self.indices.extend_from_slice(&[hub, a, b]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    #[test]
    fn test_to_ndc_corners() {
        let mesh = Mesh::new(viewport());
        assert_eq!(mesh.to_ndc(Vec2::ZERO), [-1.0, 1.0]);
        assert_eq!(mesh.to_ndc(Vec2::new(800.0, 600.0)), [1.0, -1.0]);
        assert_eq!(mesh.to_ndc(Vec2::new(400.0, 300.0)), [0.0, 0.0]);
    }

    #[test]
    fn test_fill_rect_two_triangles() {
        let mut mesh = Mesh::new(viewport());
        mesh.fill_rect(Vec2::ZERO, Vec2::new(10.0, 10.0), Color::WHITE);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_degenerate_line_skipped() {
        let mut mesh = Mesh::new(viewport());
        mesh.line(Vec2::ONE, Vec2::ONE, 2.0, Color::WHITE);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_disc_fan() {
        let mut mesh = Mesh::new(viewport());
        mesh.disc(Vec2::new(100.0, 100.0), 20.0, 16, Color::WHITE);
        assert_eq!(mesh.vertices.len(), 17);
        assert_eq!(mesh.triangle_count(), 16);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }
}
