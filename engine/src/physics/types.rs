//! Physics type re-exports from glam
//!
//! The playfield is a 2D canvas: x grows right, y grows down,
//! one unit per canvas pixel.

pub use glam::Vec2;
