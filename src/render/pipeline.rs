use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::player::Player,
    compile::frame::compile_frame,
    foundation::error::{SikkuError, SikkuResult},
    render::backend::{FrameRGBA, RenderBackend},
    scene::model::Scene,
};

/// Rasterize one frame of `scene` at animation time `time`.
#[tracing::instrument(skip(scene, backend))]
pub fn render_frame(
    scene: &Scene,
    time: f64,
    backend: &mut dyn RenderBackend,
) -> SikkuResult<FrameRGBA> {
    let plan = compile_frame(scene, time);
    backend.render_plan(&plan)
}

/// Drive a player through `frames` frames, handing each rasterized frame to
/// `sink`.
///
/// The player is started if it is idle, and left running afterwards; the
/// caller owns the stop. Returns the number of frames produced.
pub fn render_sequence(
    player: &mut Player,
    frames: u32,
    backend: &mut dyn RenderBackend,
    mut sink: impl FnMut(u32, FrameRGBA) -> SikkuResult<()>,
) -> SikkuResult<u32> {
    if !player.is_running() {
        player.start();
    }

    let mut produced = 0u32;
    for index in 0..frames {
        let Some(plan) = player.advance() else {
            break;
        };
        let frame = backend.render_plan(&plan)?;
        sink(index, frame)?;
        produced += 1;
    }
    tracing::debug!(produced, "sequence rendered");
    Ok(produced)
}

/// Write a frame as a PNG file.
///
/// # Errors
///
/// Returns [`SikkuError::Render`] for a zero-area frame and propagates
/// encoder/IO failures.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> SikkuResult<()> {
    if frame.width == 0 || frame.height == 0 {
        return Err(SikkuError::render("cannot encode a zero-area frame"));
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
