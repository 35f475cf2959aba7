//! Input Module
//!
//! Platform-agnostic pointer handling. The native shell feeds winit events
//! and the browser shell feeds DOM mouse events; both come out as
//! [`PointerEvent`]s in playfield coordinates.
//!
//! # Example
//!
//! ```rust,ignore
//! use umbrella_launcher_engine::input::{MouseButton, PointerTracker};
//! use glam::Vec2;
//!
//! let mut pointer = PointerTracker::new();
//! pointer.cursor_moved(Vec2::new(150.0, 400.0));
//! if let Some(event) = pointer.button(MouseButton::Left, true) {
//!     session.handle_pointer(event);
//! }
//! ```

pub mod mouse;

pub use mouse::{MouseButton, PointerEvent, PointerTracker, surface_to_playfield};
