//! UI module: player-facing text.

pub mod status;

pub use status::StatusMessage;
