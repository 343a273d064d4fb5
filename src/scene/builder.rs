use std::f64::consts::{PI, TAU};

use crate::{
    foundation::core::{BezPath, Canvas, Point, Vec2},
    foundation::math::Rng64,
    scene::model::{Connection, Dot, FlowPath, Scene, SceneParams, Variant},
};

/// Generate a scene for the given canvas and variant.
///
/// The builder is a pure function of its inputs: the same `(canvas, variant,
/// params, rng seed)` always produces the same scene. A zero-area canvas
/// produces an empty scene.
#[tracing::instrument(skip(params, rng))]
pub fn build_scene(
    canvas: Canvas,
    variant: Variant,
    params: &SceneParams,
    rng: &mut Rng64,
) -> Scene {
    if canvas.is_empty() {
        return Scene::empty(canvas, variant);
    }

    let mut scene = Scene::empty(canvas, variant);

    if matches!(variant, Variant::Dots | Variant::Combined) {
        scene.dots = place_dots(canvas, params, rng);
        scene.connections = sample_connections(&scene.dots, params, rng);
    }

    if matches!(variant, Variant::Flowing | Variant::Combined) {
        scene.flow_paths = build_flow_paths(canvas, params, rng);
    }

    tracing::debug!(
        dots = scene.dots.len(),
        connections = scene.connections.len(),
        flow_paths = scene.flow_paths.len(),
        "scene built"
    );
    scene
}

/// Lay out the staggered pulli grid.
///
/// Dots sit at whole multiples of the spacing inside the canvas; every other
/// row is shifted by half a spacing. A shifted dot that would land past the
/// right edge is skipped so the whole grid stays inside `[0, width]`.
fn place_dots(canvas: Canvas, params: &SceneParams, rng: &mut Rng64) -> Vec<Dot> {
    let s = params.grid_spacing;
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    let mut dots = Vec::new();
    let mut col = 1u32;
    while (f64::from(col)) * s < w {
        let x = f64::from(col) * s;
        let mut row = 1u32;
        while (f64::from(row)) * s < h {
            let y = f64::from(row) * s;
            let offset_x = if row % 2 == 0 { 0.0 } else { s / 2.0 };
            if x + offset_x <= w {
                dots.push(Dot {
                    pos: Point::new(x + offset_x, y),
                    opacity: rng.next_f64_range(0.2, 0.5),
                    size: rng.next_f64_range(1.0, 2.5),
                    pulse_phase: rng.next_f64_range(0.0, TAU),
                });
            }
            row += 1;
        }
        col += 1;
    }
    dots
}

/// Sample sparse local connections between nearby dots.
///
/// Each dot only considers a bounded window of subsequently created dots, so
/// the candidate count per dot is fixed and the connection total stays linear
/// in the dot count.
fn sample_connections(dots: &[Dot], params: &SceneParams, rng: &mut Rng64) -> Vec<Connection> {
    let max_dist = params.grid_spacing * params.connect_distance_factor;

    let mut connections = Vec::new();
    for i in 0..dots.len() {
        let window_end = (i + params.lookahead).min(dots.len());
        for j in (i + 1)..window_end {
            let d = dots[j].pos - dots[i].pos;
            if d.hypot() < max_dist && rng.next_f64_01() < params.connect_probability {
                connections.push(Connection {
                    from: i,
                    to: j,
                    opacity: rng.next_f64_range(0.08, 0.23),
                    curve: rng.next_f64_range(-0.25, 0.25),
                });
            }
        }
    }
    connections
}

/// Lay out flow-path centers on the coarse grid and build one loop per center.
fn build_flow_paths(canvas: Canvas, params: &SceneParams, rng: &mut Rng64) -> Vec<FlowPath> {
    let s = params.flow_spacing;
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    let mut centers = Vec::new();
    let mut x = s;
    while x < w {
        let mut y = s;
        while y < h {
            centers.push(Point::new(x, y));
            y += s;
        }
        x += s;
    }

    centers
        .into_iter()
        .map(|center| {
            let radius = rng.next_f64_range(30.0, 70.0);
            let petal_count = 4 + 2 * rng.next_u32_below(2);
            let path = petal_loop(center, radius, petal_count);
            FlowPath {
                path,
                center,
                radius,
                petal_count,
                opacity: rng.next_f64_range(0.1, 0.3),
                stroke_phase: rng.next_f64_range(0.0, TAU),
            }
        })
        .collect()
}

/// Sample point of the petal silhouette at `angle`.
fn petal_point(center: Point, radius: f64, petal_count: u32, angle: f64) -> Point {
    let r = radius * (0.7 + 0.3 * (angle * f64::from(petal_count) / 2.0).sin());
    Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
}

/// Unit vector perpendicular to the radial direction at `angle`.
fn petal_tangent(angle: f64) -> Vec2 {
    Vec2::new((angle + PI / 2.0).cos(), (angle + PI / 2.0).sin())
}

/// Build the closed lotus silhouette around `center`.
///
/// The loop samples `2 * petal_count + 1` angular steps across two full turns
/// with the radius modulated at half the petal frequency, then joins
/// successive samples with cubic segments whose control points are offset
/// along the local tangent. The final sample lands back on the first, so the
/// path closes exactly.
fn petal_loop(center: Point, radius: f64, petal_count: u32) -> BezPath {
    let steps = 2 * petal_count;
    let mut path = BezPath::new();

    let mut prev_angle = 0.0;
    path.move_to(petal_point(center, radius, petal_count, prev_angle));

    for i in 1..=steps {
        let angle = (f64::from(i) / f64::from(steps)) * 2.0 * TAU;
        let prev = petal_point(center, radius, petal_count, prev_angle);
        let cur = petal_point(center, radius, petal_count, angle);

        let c1 = prev + petal_tangent(prev_angle) * (radius * 0.2);
        let c2 = cur - petal_tangent(angle) * (radius * 0.2);
        path.curve_to(c1, c2, cur);

        prev_angle = angle;
    }

    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
