use super::*;
use crate::compile::frame::DrawOp;

#[test]
fn loader_parses_its_embedded_path() {
    let loader = LoaderScene::new().unwrap();
    let plan = loader.plan_at(5.0);
    assert_eq!(plan.canvas, Canvas::new(200, 200));
    assert!(loader.path_len > 0.0);
}

#[test]
fn nothing_is_visible_before_the_first_reveal() {
    let loader = LoaderScene::new().unwrap();
    assert!(loader.plan_at(0.0).ops.is_empty());
}

#[test]
fn guide_dots_reveal_one_by_one() {
    let loader = LoaderScene::new().unwrap();

    // After the first stagger slot only dot 0 has appeared.
    let early = loader.plan_at(0.05);
    let dots = |plan: &FramePlan| {
        plan.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillCircle { .. }))
            .count()
    };
    assert_eq!(dots(&early), 1);

    // Two stagger slots later, three dots are out.
    let later = loader.plan_at(0.25);
    assert_eq!(dots(&later), 3);

    // Eventually all nine guide dots are visible.
    let full = loader.plan_at(2.0);
    assert_eq!(dots(&full), 9);
}

#[test]
fn main_loop_draws_on_within_a_cycle() {
    let loader = LoaderScene::new().unwrap();

    let offset_at = |time: f64| -> f64 {
        loader
            .plan_at(time)
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::StrokePath {
                    width,
                    dash: Some(d),
                    ..
                } if *width == 3.0 => Some(d.offset),
                _ => None,
            })
            .expect("loop stroke present")
    };

    // The dash offset recedes as the stroke draws on.
    let a = offset_at(0.5);
    let b = offset_at(1.5);
    let c = offset_at(2.9);
    assert!(a > b && b > c);
    assert!(c >= 0.0);
}

#[test]
fn rings_breathe_after_their_delays() {
    let loader = LoaderScene::new().unwrap();

    let ring_count = |time: f64| -> usize {
        loader
            .plan_at(time)
            .ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    DrawOp::StrokePath { width, .. } if *width < 3.0
                )
            })
            .count()
    };

    // Before the first ring delay there are no rings.
    assert_eq!(ring_count(0.3), 0);
    // Between the delays only the outer ring breathes.
    assert_eq!(ring_count(0.9), 1);
    // After both delays both rings are present.
    assert_eq!(ring_count(1.8), 2);
}
