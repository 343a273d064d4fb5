use std::f64::consts::TAU;

use kurbo::Shape;

use crate::{
    animation::ease::Ease,
    compile::frame::{Brush, DashPattern, DrawOp, FramePlan, WHITE},
    foundation::core::{BezPath, Canvas, Point},
    foundation::error::{SikkuError, SikkuResult},
};

/// The continuous figure-eight sikku loop traced by the loader, in its
/// 200x200 design space.
const SIKKU_PATH_D: &str = "M100 50 Q150 75 100 100 Q50 75 100 50 Q100 85 150 100 \
     Q100 115 50 100 Q100 115 100 150 Q50 125 100 100 Q150 125 100 150 \
     Q100 115 50 100 Q100 85 100 50";

/// 3x3 pulli guide grid the loop is anchored on.
const GUIDE_DOTS: [(f64, f64); 9] = [
    (50.0, 75.0),
    (100.0, 50.0),
    (150.0, 75.0),
    (50.0, 100.0),
    (100.0, 100.0),
    (150.0, 100.0),
    (50.0, 125.0),
    (100.0, 150.0),
    (150.0, 125.0),
];

const DRAW_CYCLE_SECS: f64 = 3.0;
const DOT_STAGGER_SECS: f64 = 0.1;
const DOT_REVEAL_SECS: f64 = 0.5;

/// The "drawing kolam" loading overlay.
///
/// A fixed scene: guide dots appear one by one, then a continuous sikku loop
/// is drawn on in a repeating cycle while two concentric rings breathe around
/// the center. Unlike [`crate::Scene`] this is not generated; it plays the
/// same every time.
#[derive(Clone, Debug)]
pub struct LoaderScene {
    canvas: Canvas,
    path: BezPath,
    path_len: f64,
}

impl LoaderScene {
    /// Edge length of the loader design space in pixels.
    pub const SIZE: u32 = 200;

    /// Parse the loop geometry and measure it.
    ///
    /// # Errors
    ///
    /// Returns [`SikkuError::Validation`] if the embedded path data fails to
    /// parse (a build-time defect, surfaced rather than panicking).
    pub fn new() -> SikkuResult<Self> {
        let path = BezPath::from_svg(SIKKU_PATH_D)
            .map_err(|e| SikkuError::validation(format!("invalid loader path data: {e}")))?;
        let path_len = path.perimeter(1e-3);
        Ok(Self {
            canvas: Canvas::new(Self::SIZE, Self::SIZE),
            path,
            path_len,
        })
    }

    /// Compile the loader frame at `time` seconds since the overlay appeared.
    pub fn plan_at(&self, time: f64) -> FramePlan {
        let mut ops = Vec::new();

        self.push_guide_dots(time, &mut ops);
        self.push_loop(time, &mut ops);
        self.push_ring(time, 15.0, 2.0, 0.5, 2.0, 0.6, &mut ops);
        self.push_ring(time, 8.0, 1.5, 1.0, 1.5, 0.4, &mut ops);

        FramePlan {
            canvas: self.canvas,
            ops,
        }
    }

    /// Staggered guide-dot reveal: each dot pops to 1.2x and settles.
    fn push_guide_dots(&self, time: f64, ops: &mut Vec<DrawOp>) {
        for (index, &(x, y)) in GUIDE_DOTS.iter().enumerate() {
            let local = time - index as f64 * DOT_STAGGER_SECS;
            if local <= 0.0 {
                continue;
            }
            let p = Ease::OutCubic.apply(local / DOT_REVEAL_SECS);

            // Keyframes 0 -> 1.2 -> 1.0 for scale, 0 -> 1 -> 0.8 for opacity.
            let (scale, alpha) = if p < 0.6 {
                (2.0 * p, p / 0.6)
            } else {
                (1.2 - 0.5 * (p - 0.6), 1.0 - 0.5 * (p - 0.6))
            };

            ops.push(DrawOp::FillCircle {
                center: Point::new(x, y),
                radius: 2.0 * scale,
                brush: Brush::Solid(WHITE.with_alpha(0.6 * alpha)),
            });
        }
    }

    /// A breathing ring: stroke length sweeps out and back around the center.
    fn push_ring(
        &self,
        time: f64,
        radius: f64,
        duration: f64,
        delay: f64,
        width: f64,
        alpha: f64,
        ops: &mut Vec<DrawOp>,
    ) {
        let local = time - delay;
        if local <= 0.0 {
            return;
        }

        // Out-and-back repeat: even cycles sweep forward, odd cycles reverse.
        let cycle = local / duration;
        let tri = if (cycle as u64) % 2 == 0 {
            cycle.fract()
        } else {
            1.0 - cycle.fract()
        };
        let p = Ease::InOutCubic.apply(tri);
        if p <= 0.0 {
            return;
        }

        let circumference = TAU * radius;
        let center = Point::new(100.0, 100.0);
        let ring = kurbo::Circle::new(center, radius).to_path(1e-3);

        ops.push(DrawOp::StrokePath {
            path: ring,
            brush: Brush::Solid(WHITE.with_alpha(alpha)),
            width,
            dash: Some(DashPattern {
                lengths: [circumference, circumference],
                offset: circumference * (1.0 - p),
            }),
        });
    }

    /// The main loop, drawn on over a repeating cycle via the dash trick:
    /// dash lengths equal to the path length with a receding offset reveal
    /// the first `p` of the stroke.
    fn push_loop(&self, time: f64, ops: &mut Vec<DrawOp>) {
        let cycle = (time / DRAW_CYCLE_SECS).fract();
        let p = Ease::InOutCubic.apply(cycle);
        if p <= 0.0 {
            return;
        }

        ops.push(DrawOp::StrokePath {
            path: self.path.clone(),
            brush: Brush::Solid(WHITE.with_alpha(0.9)),
            width: 3.0,
            dash: Some(DashPattern {
                lengths: [self.path_len, self.path_len],
                offset: self.path_len * (1.0 - p),
            }),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/loader.rs"]
mod tests;
