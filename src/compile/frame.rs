use crate::{
    foundation::core::{BezPath, Canvas, Point, Rgba8},
    scene::model::Scene,
};

/// Rice-flour white, the dominant stroke color.
pub const WHITE: Rgba8 = Rgba8::opaque(255, 255, 255);
/// Turmeric amber midtone.
pub const AMBER: Rgba8 = Rgba8::opaque(217, 119, 6);
/// Twilight violet accent.
pub const VIOLET: Rgba8 = Rgba8::opaque(139, 92, 246);

/// A color stop inside a gradient brush.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f32,
    /// Straight-alpha stop color.
    pub color: Rgba8,
}

impl GradientStop {
    /// Build a stop.
    pub fn new(offset: f32, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Paint source for a draw op.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Brush {
    /// Uniform color.
    Solid(Rgba8),
    /// Linear gradient between two points.
    Linear {
        /// Gradient start point.
        start: Point,
        /// Gradient end point.
        end: Point,
        /// Color stops ordered by offset.
        stops: Vec<GradientStop>,
    },
    /// Radial gradient around a center.
    Radial {
        /// Gradient center.
        center: Point,
        /// Gradient extent radius.
        radius: f64,
        /// Color stops ordered by offset.
        stops: Vec<GradientStop>,
    },
}

/// Stroke dash description.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DashPattern {
    /// On/off dash lengths in pixels.
    pub lengths: [f64; 2],
    /// Phase offset along the pattern; may be negative and unbounded, the
    /// backend folds it into the pattern period.
    pub offset: f64,
}

/// One backend-agnostic drawing instruction.
///
/// Plans list ops back-to-front; executing them in order yields the correct
/// alpha-blended layering.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DrawOp {
    /// Stroke a path with round caps and joins.
    StrokePath {
        /// Path geometry in canvas coordinates.
        path: BezPath,
        /// Stroke paint.
        brush: Brush,
        /// Stroke width in pixels.
        width: f64,
        /// Optional dash pattern.
        dash: Option<DashPattern>,
    },
    /// Fill a circular disc.
    FillCircle {
        /// Disc center in canvas coordinates.
        center: Point,
        /// Disc radius in pixels.
        radius: f64,
        /// Fill paint.
        brush: Brush,
    },
}

/// All drawing instructions for a single frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FramePlan {
    /// Canvas the ops are laid out for.
    pub canvas: Canvas,
    /// Ops in back-to-front order.
    pub ops: Vec<DrawOp>,
}

/// Compile the drawing instructions for `scene` at animation time `time`.
///
/// Pure: the same `(scene, time)` always yields the same op sequence, and the
/// scene is never mutated. Layer order is a contract: flow paths first, then
/// connections, then dots.
#[tracing::instrument(skip(scene))]
pub fn compile_frame(scene: &Scene, time: f64) -> FramePlan {
    let mut ops = Vec::new();
    if scene.canvas.is_empty() {
        return FramePlan {
            canvas: scene.canvas,
            ops,
        };
    }

    push_flow_ops(scene, time, &mut ops);
    push_connection_ops(scene, time, &mut ops);
    push_dot_ops(scene, time, &mut ops);

    FramePlan {
        canvas: scene.canvas,
        ops,
    }
}

/// Background layer: the flowing loops, stroked with a traveling dash.
fn push_flow_ops(scene: &Scene, time: f64, ops: &mut Vec<DrawOp>) {
    for (index, flow) in scene.flow_paths.iter().enumerate() {
        let wave = 0.6 + 0.4 * (time * 1.5 + flow.stroke_phase).sin();
        let opacity = flow.opacity * wave;

        let brush = Brush::Radial {
            center: flow.center,
            radius: flow.radius * 2.0,
            stops: vec![
                GradientStop::new(0.0, WHITE.with_alpha(opacity * 0.8)),
                GradientStop::new(0.5, AMBER.with_alpha(opacity * 0.6)),
                GradientStop::new(1.0, VIOLET.with_alpha(opacity * 0.4)),
            ],
        };

        ops.push(DrawOp::StrokePath {
            path: flow.path.clone(),
            brush,
            width: 1.5,
            dash: Some(DashPattern {
                lengths: [5.0, 10.0],
                offset: -(time * 50.0 + index as f64 * 10.0),
            }),
        });
    }
}

/// Middle layer: curved dot-to-dot connections with a per-connection wobble.
fn push_connection_ops(scene: &Scene, time: f64, ops: &mut Vec<DrawOp>) {
    for (index, conn) in scene.connections.iter().enumerate() {
        let (Some(from), Some(to)) = (scene.dots.get(conn.from), scene.dots.get(conn.to)) else {
            continue;
        };

        let wave = 0.7 + 0.3 * (time * 2.0 + index as f64 * 0.2).sin();
        let opacity = conn.opacity * wave;

        let mid = from.pos.midpoint(to.pos);
        let sway = conn.curve * 30.0;
        let ctrl = Point::new(
            mid.x + sway * (time + index as f64).sin(),
            mid.y + sway * (time + index as f64).cos(),
        );

        let mut path = BezPath::new();
        path.move_to(from.pos);
        path.quad_to(ctrl, to.pos);

        let brush = Brush::Linear {
            start: from.pos,
            end: to.pos,
            stops: vec![
                GradientStop::new(0.0, WHITE.with_alpha(opacity * 0.4)),
                GradientStop::new(0.5, AMBER.with_alpha(opacity * 0.7)),
                GradientStop::new(1.0, WHITE.with_alpha(opacity * 0.4)),
            ],
        };

        ops.push(DrawOp::StrokePath {
            path,
            brush,
            width: 0.8,
            dash: None,
        });
    }
}

/// Top layer: pulsing gradient discs with a bright core.
fn push_dot_ops(scene: &Scene, time: f64, ops: &mut Vec<DrawOp>) {
    for dot in &scene.dots {
        let pulse = 0.7 + 0.3 * (time * 1.2 + dot.pulse_phase).sin();
        let opacity = dot.opacity * pulse;
        let radius = dot.size * pulse;

        ops.push(DrawOp::FillCircle {
            center: dot.pos,
            radius,
            brush: Brush::Radial {
                center: dot.pos,
                radius: radius * 3.0,
                stops: vec![
                    GradientStop::new(0.0, WHITE.with_alpha(opacity * 0.9)),
                    GradientStop::new(0.3, AMBER.with_alpha(opacity * 0.7)),
                    GradientStop::new(0.7, VIOLET.with_alpha(opacity * 0.4)),
                    GradientStop::new(1.0, Rgba8::TRANSPARENT),
                ],
            },
        });

        ops.push(DrawOp::FillCircle {
            center: dot.pos,
            radius: radius * 0.5,
            brush: Brush::Solid(WHITE.with_alpha(opacity * 0.9)),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/frame.rs"]
mod tests;
