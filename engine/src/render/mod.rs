//! Render Module
//!
//! Backend-neutral 2D drawing primitives plus the native wgpu context.
//! The browser build skips [`gpu_context`] and draws with canvas 2D.

pub mod color;
#[cfg(not(target_arch = "wasm32"))]
pub mod gpu_context;
pub mod mesh;

pub use color::Color;
#[cfg(not(target_arch = "wasm32"))]
pub use gpu_context::{GpuContext, GpuError, PLAYFIELD_SHADER_SOURCE};
pub use mesh::{Mesh, Vertex};
