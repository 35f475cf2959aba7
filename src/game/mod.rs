//! Game Module
//!
//! Game-specific systems built on top of the engine: configuration, the
//! mode state machine, the physics engine, the session that ties them
//! together, and the frontends that draw it.

pub mod config;
pub mod render;
pub mod session;
pub mod slingshot;
pub mod state;
pub mod systems;
pub mod targets;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{ConfigError, LauncherConfig, TargetConfig};
pub use render::{FrameRenderer, FrameView, build_playfield_mesh};
pub use session::{Session, SessionEvent};
pub use slingshot::Slingshot;
pub use state::{GameMode, GameStateMachine, Round};
pub use systems::{CollisionSystem, PhysicsEngine, StepReport, StepTransition};
pub use targets::{Target, TargetField};
pub use ui::StatusMessage;
