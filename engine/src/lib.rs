//! Umbrella Launcher Engine
//!
//! A small slingshot game: drag the umbrella away from the anchor, release,
//! and knock down every box before running out of umbrellas.
//!
//! # Modules
//!
//! - [`physics`] - 2D ballistics, rectangle containment, drag clamping
//! - [`input`] - Platform-agnostic pointer tracking
//! - [`render`] - Colors, 2D triangle meshes and the native wgpu context
//! - [`timing`] - Fixed-rate tick clock
//! - [`game`] - Config, state machine, physics engine, session, frontends
//!
//! # Example
//!
//! ```ignore
//! use umbrella_launcher_engine::game::{LauncherConfig, Session};
//!
//! let mut session = Session::new(LauncherConfig::default());
//! session.pointer_down(150.0, 400.0);
//! session.pointer_move(150.0, 450.0);
//! session.pointer_up();
//! session.tick();
//! for event in session.drain_events() {
//!     println!("{event:?}");
//! }
//! ```

pub mod input;
pub mod physics;
pub mod render;
pub mod timing;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use input::{MouseButton, PointerEvent, PointerTracker};
pub use physics::{BallisticsConfig, Projectile, Rect, Vec2};
pub use render::{Color, Mesh, Vertex};
pub use timing::FixedRateClock;
