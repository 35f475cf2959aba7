//! Render adapters. Both backends consume the same [`FrameView`] and never
//! mutate the session.

pub mod frame;
pub mod playfield_mesh;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(not(target_arch = "wasm32"))]
pub mod gpu_renderer;

pub use frame::{FrameRenderer, FrameView, palette};
pub use playfield_mesh::build_playfield_mesh;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
#[cfg(not(target_arch = "wasm32"))]
pub use gpu_renderer::GpuRenderer;
