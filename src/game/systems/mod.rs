//! Game systems: self-contained modules that own state and logic.

pub mod collision_system;
pub mod physics_system;

pub use collision_system::CollisionSystem;
pub use physics_system::{PhysicsEngine, StepReport, StepTransition};
