//! Mouse Input Module
//!
//! Turns raw windowing events into pointer events in playfield space.
//! Decoupled from winit and web-sys so both frontends share it.

use glam::Vec2;

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` index.
    pub fn from_dom_index(index: i16) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            other => MouseButton::Other(other.max(0) as u16),
        }
    }
}

/// A pointer gesture in playfield coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up,
}

/// Tracks the cursor between events.
///
/// winit reports button presses without a position, so the last cursor
/// position is remembered and attached to the press.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Last known cursor position in playfield coordinates
    position: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor move.
    pub fn cursor_moved(&mut self, position: Vec2) -> PointerEvent {
        self.position = Some(position);
        PointerEvent::Move(position)
    }

    /// Record a button change. Only the left button drives the game.
    ///
    /// A press before any cursor position is known is dropped.
    pub fn button(&mut self, button: MouseButton, pressed: bool) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }
        if pressed {
            self.position.map(PointerEvent::Down)
        } else {
            Some(PointerEvent::Up)
        }
    }

    /// Cursor left the window; forget where it was.
    pub fn cursor_left(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Map a point on a surface of `surface_size` pixels onto the logical
/// playfield of `playfield_size` units, stretching independently per axis.
///
/// Points outside the surface map outside the playfield; they stay valid.
pub fn surface_to_playfield(point: Vec2, surface_size: Vec2, playfield_size: Vec2) -> Vec2 {
    if surface_size.x <= 0.0 || surface_size.y <= 0.0 {
        return point;
    }
    point * playfield_size / surface_size
}
