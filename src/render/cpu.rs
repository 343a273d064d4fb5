use kurbo::Shape;

use crate::{
    compile::frame::{Brush, DashPattern, DrawOp, FramePlan, GradientStop},
    foundation::core::{BezPath, Point, Rgba8},
    foundation::error::{SikkuError, SikkuResult},
    render::backend::{FrameRGBA, RenderBackend, RenderSettings},
};

/// Flattening/stroking accuracy in pixels.
const TOLERANCE: f64 = 0.1;

/// CPU rasterizer backed by `vello_cpu`.
///
/// `vello_cpu` is driven with fills only: stroked ops are expanded to their
/// outline with `kurbo::stroke` (which also applies the dash pattern) and
/// then filled. The backing pixmap is retained between frames of the same
/// size.
pub struct CpuBackend {
    settings: RenderSettings,
    surface: Option<CpuSurface>,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuBackend {
    /// Create a backend with the given settings.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            surface: None,
        }
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip(self, plan), fields(ops = plan.ops.len()))]
    fn render_plan(&mut self, plan: &FramePlan) -> SikkuResult<FrameRGBA> {
        if plan.canvas.is_empty() {
            return Ok(FrameRGBA::empty());
        }

        let width: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| SikkuError::render("surface width exceeds u16"))?;
        let height: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| SikkuError::render("surface height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }

        for op in &plan.ops {
            draw_op(&mut ctx, op);
        }

        let mut surface = match self.surface.take() {
            Some(s) if s.width == width && s.height == height => s,
            _ => CpuSurface {
                width,
                height,
                pixmap: vello_cpu::Pixmap::new(width, height),
            },
        };
        clear_pixmap_to_transparent(&mut surface.pixmap);
        ctx.flush();
        ctx.render_to_pixmap(&mut surface.pixmap);

        let frame = FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: surface.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        };
        self.surface = Some(surface);
        Ok(frame)
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
    match op {
        DrawOp::StrokePath {
            path,
            brush,
            width,
            dash,
        } => {
            let style = stroke_style(*width, dash);
            let outline = kurbo::stroke(
                path.elements().iter().copied(),
                &style,
                &kurbo::StrokeOpts::default(),
                TOLERANCE,
            );
            set_brush(ctx, brush);
            ctx.fill_path(&bezpath_to_cpu(&outline));
        }
        DrawOp::FillCircle {
            center,
            radius,
            brush,
        } => {
            let disc = kurbo::Circle::new(*center, *radius).to_path(TOLERANCE);
            set_brush(ctx, brush);
            ctx.fill_path(&bezpath_to_cpu(&disc));
        }
    }
}

fn stroke_style(width: f64, dash: &Option<DashPattern>) -> kurbo::Stroke {
    let mut style = kurbo::Stroke::new(width)
        .with_caps(kurbo::Cap::Round)
        .with_join(kurbo::Join::Round);
    if let Some(d) = dash {
        let period: f64 = d.lengths.iter().sum();
        if period > 0.0 {
            // Plans carry the raw (possibly negative, unbounded) phase; fold
            // it into one pattern period before handing it to the stroker.
            style = style.with_dashes(d.offset.rem_euclid(period), d.lengths);
        }
    }
    style
}

fn set_brush(ctx: &mut vello_cpu::RenderContext, brush: &Brush) {
    match brush {
        Brush::Solid(c) => ctx.set_paint(color_to_cpu(*c)),
        Brush::Linear { start, end, stops } => {
            let gradient =
                vello_cpu::peniko::Gradient::new_linear(point_to_cpu(*start), point_to_cpu(*end))
                    .with_stops(stops_to_cpu(stops).as_slice());
            ctx.set_paint(gradient);
        }
        Brush::Radial {
            center,
            radius,
            stops,
        } => {
            let gradient =
                vello_cpu::peniko::Gradient::new_radial(point_to_cpu(*center), *radius as f32)
                    .with_stops(stops_to_cpu(stops).as_slice());
            ctx.set_paint(gradient);
        }
    }
}

fn stops_to_cpu(stops: &[GradientStop]) -> Vec<(f32, vello_cpu::peniko::Color)> {
    stops
        .iter()
        .map(|s| (s.offset, color_to_cpu(s.color)))
        .collect()
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}
