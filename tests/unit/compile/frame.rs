use super::*;
use crate::{
    foundation::math::Rng64,
    scene::builder::build_scene,
    scene::model::{SceneParams, Variant},
};

fn scene(variant: Variant) -> Scene {
    build_scene(
        Canvas::new(600, 600),
        variant,
        &SceneParams::default(),
        &mut Rng64::new(17),
    )
}

#[test]
fn zero_area_scene_compiles_to_zero_ops() {
    let empty = Scene::empty(Canvas::new(0, 0), Variant::Combined);
    let plan = compile_frame(&empty, 1.0);
    assert!(plan.ops.is_empty());
}

#[test]
fn compilation_is_pure_and_deterministic() {
    let scene = scene(Variant::Combined);
    let before = scene.clone();

    let a = compile_frame(&scene, 0.4);
    let b = compile_frame(&scene, 0.4);
    assert_eq!(a, b);
    assert_eq!(scene, before, "compiler must not mutate the scene");

    let c = compile_frame(&scene, 0.4 + crate::animation::player::TIME_STEP);
    assert_ne!(a, c, "time must modulate the plan");
}

#[test]
fn layers_are_emitted_back_to_front() {
    let scene = scene(Variant::Combined);
    let plan = compile_frame(&scene, 0.1);

    let flows = scene.flow_paths.len();
    let conns = scene.connections.len();
    let dots = scene.dots.len();
    assert_eq!(plan.ops.len(), flows + conns + 2 * dots);

    // 1. Flow paths: dashed strokes.
    for op in &plan.ops[..flows] {
        assert!(matches!(op, DrawOp::StrokePath { dash: Some(_), .. }));
    }
    // 2. Connections: plain strokes.
    for op in &plan.ops[flows..flows + conns] {
        assert!(matches!(op, DrawOp::StrokePath { dash: None, .. }));
    }
    // 3. Dots: disc + glow core pairs.
    for op in &plan.ops[flows + conns..] {
        assert!(matches!(op, DrawOp::FillCircle { .. }));
    }
}

#[test]
fn flow_dash_offsets_travel_per_index_and_time() {
    let scene = scene(Variant::Flowing);

    let offsets = |time: f64| -> Vec<f64> {
        compile_frame(&scene, time)
            .ops
            .iter()
            .map(|op| match op {
                DrawOp::StrokePath { dash: Some(d), .. } => d.offset,
                _ => panic!("flowing scenes compile to dashed strokes only"),
            })
            .collect()
    };

    let at_zero = offsets(0.0);
    assert_eq!(at_zero, vec![0.0, -10.0, -20.0, -30.0]);

    let later = offsets(1.0);
    for (a, b) in at_zero.iter().zip(&later) {
        assert!((a - b - 50.0).abs() < 1e-9, "offset advances by 50 per second");
    }
}

#[test]
fn dot_discs_follow_the_pulse() {
    let scene = scene(Variant::Dots);
    let time = 0.7;
    let plan = compile_frame(&scene, time);

    let dot = &scene.dots[0];
    let pulse = 0.7 + 0.3 * (time * 1.2 + dot.pulse_phase).sin();

    let DrawOp::FillCircle { center, radius, brush } = &plan.ops[0] else {
        panic!("first dot op must be the disc");
    };
    assert_eq!(*center, dot.pos);
    assert!((radius - dot.size * pulse).abs() < 1e-12);

    let Brush::Radial { radius: extent, stops, .. } = brush else {
        panic!("disc uses a radial gradient");
    };
    assert!((extent - radius * 3.0).abs() < 1e-12);
    assert_eq!(stops.len(), 4);
    assert_eq!(stops[3].color, Rgba8::TRANSPARENT);

    let DrawOp::FillCircle { radius: core, brush: core_brush, .. } = &plan.ops[1] else {
        panic!("second dot op must be the glow core");
    };
    assert!((core - radius * 0.5).abs() < 1e-12);
    assert!(matches!(core_brush, Brush::Solid(_)));
}

#[test]
fn derived_alphas_never_escape_their_range() {
    let scene = scene(Variant::Combined);

    // Sweep a few cycles of every modulation frequency.
    for i in 0..200 {
        let plan = compile_frame(&scene, f64::from(i) * 0.05);
        for op in &plan.ops {
            let brush = match op {
                DrawOp::StrokePath { brush, .. } | DrawOp::FillCircle { brush, .. } => brush,
            };
            match brush {
                Brush::Solid(_) => {}
                Brush::Linear { stops, .. } | Brush::Radial { stops, .. } => {
                    for stop in stops {
                        assert!((0.0..=1.0).contains(&f64::from(stop.offset)));
                    }
                }
            }
        }
    }
}

#[test]
fn connection_wobble_is_bounded_by_curve() {
    let scene = scene(Variant::Dots);
    let plan = compile_frame(&scene, 2.3);

    for (conn, op) in scene.connections.iter().zip(&plan.ops) {
        let DrawOp::StrokePath { path, .. } = op else {
            panic!("connection ops are strokes");
        };
        let els = path.elements();
        let kurbo::PathEl::MoveTo(start) = els[0] else {
            panic!("connection starts with MoveTo");
        };
        let kurbo::PathEl::QuadTo(ctrl, end) = els[1] else {
            panic!("connection is a single quadratic");
        };
        assert_eq!(start, scene.dots[conn.from].pos);
        assert_eq!(end, scene.dots[conn.to].pos);

        let mid = start.midpoint(end);
        assert!((ctrl - mid).hypot() <= conn.curve.abs() * 30.0 + 1e-9);
    }
}
