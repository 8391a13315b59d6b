// File: crates/motion-core/tests/scene.rs
// Purpose: Retained scene: keyed shapes, transition sampling, delayed removal, offsets and hover.

use std::time::{Duration, Instant};

use motion_core::surface::Anchor;
use motion_core::{
    Attr, Color, DrawSurface, Geometry, Layer, Point, PointerHandlers, Scene, Shape, ShapeKey, Size, Style,
    Transition,
};

fn circle(cx: f32, cy: f32, r: f32) -> Shape {
    Shape::new(Geometry::Circle { cx, cy, r }, Style::filled(Color::BLACK))
}

fn radius(shape: &Shape) -> f32 {
    match shape.geometry {
        Geometry::Circle { r, .. } => r,
        _ => panic!("not a circle"),
    }
}

fn ms(n: u64) -> Duration { Duration::from_millis(n) }

#[test]
fn update_without_transition_replaces_immediately() {
    let mut scene = Scene::new(Size::new(100.0, 100.0));
    assert!(scene.is_empty());
    let key = ShapeKey::new(Layer::Canvas, "p");
    scene.create(key.clone(), circle(10.0, 10.0, 1.0));
    scene.update(&key, circle(20.0, 20.0, 4.0), None);
    assert_eq!(scene.target(&key), Some(&circle(20.0, 20.0, 4.0)));
    assert_eq!(scene.len(), 1);
}

#[test]
fn update_of_missing_key_creates_it() {
    let mut scene = Scene::default();
    let key = ShapeKey::new(Layer::Background, "bg");
    scene.update(&key, circle(0.0, 0.0, 1.0), Some(Transition::new(ms(100))));
    assert!(scene.contains(&key));
}

#[test]
fn transitions_sample_linearly() {
    let t0 = Instant::now();
    let mut scene = Scene::default();
    scene.begin_frame(t0);
    let key = ShapeKey::new(Layer::Canvas, "p");
    scene.create(key.clone(), circle(0.0, 0.0, 0.0));
    scene.update(&key, circle(100.0, 0.0, 10.0), Some(Transition::new(ms(100))));

    let mid = scene.sample(t0 + ms(50));
    assert_eq!(mid.len(), 1);
    assert!((radius(&mid[0].shape) - 5.0).abs() < 1e-4);
    let end = scene.sample(t0 + ms(250));
    assert_eq!(end[0].shape, circle(100.0, 0.0, 10.0));
}

#[test]
fn set_attr_without_transition_patches_in_flight_animation() {
    let t0 = Instant::now();
    let mut scene = Scene::default();
    scene.begin_frame(t0);
    let key = ShapeKey::new(Layer::Canvas, "p");
    scene.create(key.clone(), circle(0.0, 0.0, 0.0));
    scene.update(&key, circle(10.0, 0.0, 10.0), Some(Transition::new(ms(100))));
    scene.set_attr(&key, Attr::Opacity(0.25), None);
    let mid = scene.sample(t0 + ms(50));
    assert_eq!(mid[0].shape.style.opacity, 0.25);
}

#[test]
fn delayed_removal_keeps_painting_until_it_expires() {
    let t0 = Instant::now();
    let mut scene = Scene::default();
    scene.begin_frame(t0);
    let key = ShapeKey::new(Layer::Canvas, "p");
    scene.create(key.clone(), circle(0.0, 0.0, 5.0));
    scene.remove(&key, Some(Transition::new(ms(100))));
    assert!(scene.is_removing(&key));
    assert_eq!(scene.sample(t0 + ms(50)).len(), 1);
    assert!(scene.sample(t0 + ms(100)).is_empty());

    scene.begin_frame(t0 + ms(150));
    assert!(!scene.contains(&key));
}

#[test]
fn update_cancels_a_pending_removal() {
    let t0 = Instant::now();
    let mut scene = Scene::default();
    scene.begin_frame(t0);
    let key = ShapeKey::new(Layer::Canvas, "p");
    scene.create(key.clone(), circle(0.0, 0.0, 5.0));
    scene.remove(&key, Some(Transition::new(ms(100))));
    scene.update(&key, circle(0.0, 0.0, 6.0), None);
    assert!(!scene.is_removing(&key));
    scene.begin_frame(t0 + ms(500));
    assert!(scene.contains(&key));
}

#[test]
fn layer_offsets_include_the_root() {
    let mut scene = Scene::default();
    scene.translate(Layer::Root, Point::new(20.0, 5.0), None);
    scene.translate(Layer::AxisX, Point::new(0.0, 300.0), None);
    assert_eq!(scene.layer_offset(Layer::AxisX), Point::new(20.0, 305.0));
    assert_eq!(scene.layer_offset(Layer::Canvas), Point::new(20.0, 5.0));

    let key = ShapeKey::new(Layer::AxisX, "t");
    scene.create(key, circle(0.0, 0.0, 1.0));
    assert_eq!(scene.sample(scene.now())[0].offset, Point::new(20.0, 305.0));
}

#[test]
fn sample_follows_layer_paint_order() {
    let mut scene = Scene::default();
    scene.create(ShapeKey::new(Layer::Canvas, "c"), circle(0.0, 0.0, 1.0));
    scene.create(ShapeKey::new(Layer::Background, "bg"), circle(0.0, 0.0, 1.0));
    scene.create(ShapeKey::new(Layer::AxisY, "y"), circle(0.0, 0.0, 1.0));
    let layers: Vec<_> = scene.sample(scene.now()).into_iter().map(|p| p.key.layer).collect();
    assert_eq!(layers, vec![Layer::Background, Layer::AxisY, Layer::Canvas]);
}

#[test]
fn hover_fires_enter_and_leave_and_raises() {
    let mut scene = Scene::default();
    let a = ShapeKey::new(Layer::Canvas, "a");
    let label = ShapeKey::new(Layer::Canvas, "a-label");
    let b = ShapeKey::new(Layer::Canvas, "b");
    scene.create(a.clone(), circle(50.0, 50.0, 10.0));
    scene.create(
        label.clone(),
        Shape::new(
            Geometry::Text { x: 50.0, y: 50.0, dx: 0.0, dy: 0.0, text: "a".into(), anchor: Anchor::Middle, size: 11.0 },
            Style::filled(Color::BLACK).with_opacity(0.0),
        ),
    );
    scene.create(b.clone(), circle(200.0, 200.0, 10.0));
    scene.on_pointer(
        &a,
        PointerHandlers {
            enter: vec![(label.clone(), Attr::Opacity(1.0))],
            leave: vec![(label.clone(), Attr::Opacity(0.0))],
            raise: true,
        },
    );

    scene.pointer_move(Point::new(52.0, 48.0));
    assert_eq!(scene.hovered(), Some(&a));
    assert_eq!(scene.target(&label).map(|s| s.style.opacity), Some(1.0));
    let order: Vec<_> = scene.keys(Layer::Canvas).map(|k| k.id.clone()).collect();
    assert_eq!(order, vec!["b", "a", "a-label"]);

    scene.pointer_move(Point::new(0.0, 0.0));
    assert_eq!(scene.hovered(), None);
    assert_eq!(scene.target(&label).map(|s| s.style.opacity), Some(0.0));
}
