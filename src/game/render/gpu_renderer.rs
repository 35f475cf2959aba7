//! Native backend: playfield mesh drawn through the wgpu overlay pipeline.

use crate::game::render::frame::{FrameRenderer, FrameView};
use crate::game::render::playfield_mesh::build_playfield_mesh;
use crate::render::GpuContext;

pub struct GpuRenderer {
    gpu: GpuContext,
}

impl GpuRenderer {
    pub fn new(gpu: GpuContext) -> Self {
        Self { gpu }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.gpu.dimensions()
    }
}

impl FrameRenderer for GpuRenderer {
    type Error = wgpu::SurfaceError;

    /// Lost or outdated surfaces are reconfigured and the frame is skipped.
    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error> {
        let mesh = build_playfield_mesh(frame);
        match self.gpu.render_mesh(&mesh, frame.background()) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
                Ok(())
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
