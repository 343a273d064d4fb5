use crate::{compile::frame::FramePlan, foundation::error::SikkuResult};

/// One rasterized frame.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 pixel data, row-major.
    pub data: Vec<u8>,
    /// Whether `data` carries premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// An empty (zero-area) frame.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
            premultiplied: true,
        }
    }
}

/// Renderer configuration shared by all backends.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// Straight RGBA painted under the scene; `None` leaves the frame
    /// transparent.
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            // The site's night backdrop the decorative layer floats over.
            clear_rgba: Some([15, 12, 24, 255]),
        }
    }
}

/// Backend selector.
#[derive(Clone, Copy, Debug)]
pub enum BackendKind {
    /// CPU rasterization via `vello_cpu`.
    Cpu,
}

/// A rasterizer for frame plans.
pub trait RenderBackend {
    /// Rasterize one plan into pixels.
    ///
    /// Rendering a zero-area plan is a no-op returning an empty frame.
    fn render_plan(&mut self, plan: &FramePlan) -> SikkuResult<FrameRGBA>;
}

/// Construct a backend of the requested kind.
pub fn create_backend(kind: BackendKind, settings: &RenderSettings) -> Box<dyn RenderBackend> {
    match kind {
        BackendKind::Cpu => Box::new(crate::render::cpu::CpuBackend::new(settings.clone())),
    }
}
