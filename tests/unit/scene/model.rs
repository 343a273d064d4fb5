use super::*;
use crate::foundation::core::Canvas;

fn dot_at(x: f64, y: f64) -> Dot {
    Dot {
        pos: Point::new(x, y),
        opacity: 0.3,
        size: 1.5,
        pulse_phase: 1.0,
    }
}

fn two_dot_scene() -> Scene {
    Scene {
        canvas: Canvas::new(100, 100),
        variant: Variant::Dots,
        dots: vec![dot_at(20.0, 20.0), dot_at(50.0, 20.0)],
        connections: vec![Connection {
            from: 0,
            to: 1,
            opacity: 0.1,
            curve: 0.2,
        }],
        flow_paths: Vec::new(),
    }
}

#[test]
fn empty_scene_validates() {
    let scene = Scene::empty(Canvas::new(0, 0), Variant::Combined);
    scene.validate().unwrap();
}

#[test]
fn well_formed_scene_validates() {
    two_dot_scene().validate().unwrap();
}

#[test]
fn connection_to_missing_dot_is_rejected() {
    let mut scene = two_dot_scene();
    scene.connections[0].to = 9;
    let err = scene.validate().unwrap_err();
    assert!(err.to_string().contains("missing dot"));
}

#[test]
fn connection_endpoint_order_is_enforced() {
    let mut scene = two_dot_scene();
    scene.connections[0] = Connection {
        from: 1,
        to: 1,
        opacity: 0.1,
        curve: 0.0,
    };
    assert!(scene.validate().is_err());
}

#[test]
fn out_of_range_values_are_rejected() {
    let mut scene = two_dot_scene();
    scene.dots[0].opacity = 1.5;
    assert!(scene.validate().is_err());

    let mut scene = two_dot_scene();
    scene.connections[0].curve = 0.3;
    assert!(scene.validate().is_err());

    let mut scene = two_dot_scene();
    scene.dots[0].pos = Point::new(101.0, 20.0);
    assert!(scene.validate().is_err());
}

#[test]
fn odd_or_small_petal_counts_are_rejected() {
    let mut scene = Scene::empty(Canvas::new(300, 300), Variant::Flowing);
    scene.flow_paths.push(FlowPath {
        path: {
            let mut p = BezPath::new();
            p.move_to(Point::new(150.0, 100.0));
            p.line_to(Point::new(150.0, 200.0));
            p.close_path();
            p
        },
        center: Point::new(150.0, 150.0),
        radius: 50.0,
        petal_count: 5,
        opacity: 0.2,
        stroke_phase: 0.5,
    });
    assert!(scene.validate().is_err());

    scene.flow_paths[0].petal_count = 2;
    assert!(scene.validate().is_err());

    scene.flow_paths[0].petal_count = 6;
    scene.validate().unwrap();
}

#[test]
fn params_validation_rejects_degenerate_values() {
    SceneParams::default().validate().unwrap();

    let mut params = SceneParams::default();
    params.grid_spacing = 0.0;
    assert!(params.validate().is_err());

    let mut params = SceneParams::default();
    params.connect_probability = 1.5;
    assert!(params.validate().is_err());

    let mut params = SceneParams::default();
    params.lookahead = 0;
    assert!(params.validate().is_err());
}
