// File: crates/motion-core/tests/chart.rs
// Purpose: Chart engine against the in-memory scene: construction, binding, progress, throttling and render output.

use std::sync::Arc;
use std::time::{Duration, Instant};

use motion_core::axis::axis_ticks;
use motion_core::types::{
    BOXPLOT_DOT_OPACITY, BOXPLOT_DOT_R, BOXPLOT_OUTLIER_OPACITY, BOXPLOT_OUTLIER_R, BOXPLOT_SIZE, DATA_CIRCLE_OPACITY,
};
use motion_core::{
    Chart, ChartError, ChartOptions, ColumnDescriptor, DataTable, Domain, DrawSurface, Extent, FrameOutcome,
    Geometry, Layer, Point, Record, Scene, Shape, ShapeKey, Size, Style, Theme, Value,
};

fn row(name: &str, time: f64, price: f64) -> Record {
    Record::new().with("name", name).with("time", time).with("price", price)
}

fn table() -> Arc<DataTable> {
    let columns = vec![
        ColumnDescriptor::text("name", "Name"),
        ColumnDescriptor::number("time", "Time"),
        ColumnDescriptor::number("price", "Price"),
    ];
    let records = vec![row("A", 10.0, 1000.0), row("A", 30.0, 1500.0), row("B", 10.0, 2000.0), row("B", 20.0, 1800.0)];
    Arc::new(DataTable::new(columns, records).unwrap())
}

/// Eight in-range series, one far outlier and one series without a price.
fn spread_table() -> Arc<DataTable> {
    let columns = vec![
        ColumnDescriptor::text("name", "Name"),
        ColumnDescriptor::number("time", "Time"),
        ColumnDescriptor::number("price", "Price"),
    ];
    let mut records = ["A", "B", "C", "D", "E", "F", "G", "H"]
        .iter()
        .enumerate()
        .map(|(i, n)| row(n, 10.0, 1.0 + i as f64))
        .collect::<Vec<_>>();
    records.push(row("Z", 10.0, 1000.0));
    records.push(Record::new().with("name", "N").with("time", 10.0).with("price", Value::Null));
    Arc::new(DataTable::new(columns, records).unwrap())
}

fn chart_with(options: ChartOptions) -> Chart<Scene> {
    Chart::new(table(), Scene::new(Size::new(400.0, 300.0)), options).unwrap()
}

fn chart() -> Chart<Scene> { chart_with(ChartOptions::default()) }

fn ms(n: u64) -> Duration { Duration::from_millis(n) }

fn circle_of<'a>(chart: &'a Chart<Scene>, id: &str) -> &'a Shape {
    chart.surface().target(&ShapeKey::new(Layer::Canvas, format!("point:{id}"))).unwrap()
}

#[test]
fn refuses_a_surface_that_already_has_shapes() {
    let mut scene = Scene::default();
    scene.create(ShapeKey::new(Layer::Canvas, "foreign"), Shape::new(Geometry::Circle { cx: 0.0, cy: 0.0, r: 1.0 }, Style::default()));
    let err = Chart::new(table(), scene, ChartOptions::default()).err();
    assert_eq!(err, Some(ChartError::SurfaceNotEmpty));
}

#[test]
fn starts_constant_at_the_beginning_of_time() {
    let chart = chart();
    assert_eq!(chart.time_domain(), Some(Extent::new(10.0, 30.0)));
    assert_eq!(chart.current_time(), Some(10.0));
    assert!(chart.x().is_constant() && chart.y().is_constant());
    assert!(chart.r().is_constant() && chart.c().is_constant());
    assert!(chart.scheduler().is_dirty());
    assert!(!chart.scheduler().animate());
    assert_eq!(chart.x().scale().range(), Some([0.0, 400.0]));
    assert_eq!(chart.y().scale().range(), Some([300.0, 0.0]));
    assert_eq!(chart.r().scale().range(), Some([2.0, 17.0]));
}

#[test]
fn first_frame_paints_constant_points_in_the_middle() {
    let mut chart = chart();
    assert_eq!(chart.on_frame(Instant::now()), FrameOutcome::Painted { animate: false });
    let a = circle_of(&chart, "A");
    assert_eq!(a.geometry, Geometry::Circle { cx: 200.0, cy: 150.0, r: 9.5 });
    assert_eq!(a.style.fill, Theme::light().circle_fill);
    assert_eq!(a.style.opacity, DATA_CIRCLE_OPACITY);
    // Two circles plus two hidden labels.
    assert_eq!(chart.surface().keys(Layer::Canvas).count(), 4);
    // Constant axes carry no ticks.
    assert_eq!(chart.surface().keys(Layer::AxisX).count(), 0);
    assert!(chart.surface().contains(&ShapeKey::new(Layer::Background, "canvas-bg")));
}

#[test]
fn binding_validates_before_swapping() {
    let mut chart = chart();
    chart.set_x("price", "linear").unwrap();
    assert_eq!(chart.x().column(), Some("price"));
    assert_eq!(chart.x().scale().domain(), Some(Domain::Continuous([950.0, 2050.0])));

    let err = chart.set_x("name", "linear").unwrap_err();
    assert!(matches!(err, ChartError::Incompatible { .. }));
    assert_eq!(chart.x().column(), Some("price"));

    assert!(matches!(chart.set_c("name", "linear"), Err(ChartError::Incompatible { .. })));
    assert_eq!(chart.set_y("volume", "linear"), Err(ChartError::UnknownColumn("volume".into())));
    assert_eq!(chart.bind("w", "price", "linear"), Err(ChartError::InvalidDimension("w".into())));
    assert_eq!(chart.bind("x", "price", "log"), Err(ChartError::InvalidScale("log".into())));
    assert!(chart.c().is_constant());
}

#[test]
fn constant_binding_ignores_the_column() {
    let mut chart = chart();
    chart.set_r("does-not-exist", "constant").unwrap();
    assert!(chart.r().is_constant());
}

#[test]
fn color_domains_are_reversed() {
    let mut chart = chart();
    chart.set_c("name", "categorical").unwrap();
    assert_eq!(chart.c().scale().domain(), Some(Domain::Discrete(vec!["B".into(), "A".into()])));
    chart.set_c("price", "sequential").unwrap();
    assert_eq!(chart.c().scale().domain(), Some(Domain::Continuous([2050.0, 950.0])));
    chart.unset_c();
    assert!(chart.c().is_constant());
}

#[test]
fn rebinding_marks_dirty_with_animation() {
    let mut chart = chart();
    let t0 = Instant::now();
    chart.on_frame(t0);
    chart.set_x("price", "linear").unwrap();
    assert_eq!(chart.on_frame(t0 + ms(20)), FrameOutcome::Painted { animate: true });
}

#[test]
fn repeated_progress_to_the_same_time_is_a_no_op() {
    let mut chart = chart();
    let t0 = Instant::now();
    assert!(matches!(chart.on_frame(t0), FrameOutcome::Painted { .. }));

    chart.set_progress(0.0, true);
    assert_eq!(chart.on_frame(t0 + ms(100)), FrameOutcome::Idle);

    chart.set_progress(0.25, true);
    assert_eq!(chart.current_time(), Some(15.0));
    assert_eq!(chart.on_frame(t0 + ms(200)), FrameOutcome::Painted { animate: true });

    chart.set_progress(0.25, false);
    assert_eq!(chart.on_frame(t0 + ms(300)), FrameOutcome::Idle);
}

#[test]
fn frames_are_throttled() {
    let mut chart = chart();
    let t0 = Instant::now();
    chart.on_frame(t0);
    chart.set_progress(0.5, false);
    assert_eq!(chart.on_frame(t0 + ms(3)), FrameOutcome::Throttled);
    assert_eq!(chart.on_frame(t0 + ms(12)), FrameOutcome::Painted { animate: false });
}

#[test]
fn bound_axes_draw_ticks_and_a_label() {
    let mut chart = chart();
    chart.set_x("price", "linear").unwrap();
    chart.set_y("price", "linear").unwrap();
    chart.on_frame(Instant::now());

    let scene = chart.surface();
    let label = scene.target(&ShapeKey::new(Layer::AxisX, "label")).unwrap();
    assert!(matches!(&label.geometry, Geometry::Text { text, .. } if text == "Price"));
    assert!(scene.keys(Layer::AxisX).count() > 2);
    assert!(scene.keys(Layer::AxisY).count() > 2);
    assert_eq!(scene.layer_offset(Layer::AxisX), Point::new(0.0, 300.0));

    let a = circle_of(&chart, "A");
    // price 1000 inside [950, 2050] over 400px, rounded.
    assert!(matches!(a.geometry, Geometry::Circle { cx, .. } if cx == 18.0));

    chart.unset_x();
    chart.on_frame(Instant::now() + ms(50));
    let scene = chart.surface();
    assert_eq!(scene.keys(Layer::AxisX).filter(|k| !scene.is_removing(k)).count(), 0);
}

#[test]
fn box_plots_reserve_strips_and_draw() {
    let options = ChartOptions { x_box_plot: true, y_box_plot: true, ..ChartOptions::default() };
    let mut chart = chart_with(options);
    // No strips while the axes are constant.
    assert_eq!(chart.x().scale().range(), Some([0.0, 400.0]));

    chart.set_x("price", "linear").unwrap();
    chart.set_y("price", "linear").unwrap();
    let strip = BOXPLOT_SIZE as f64;
    assert_eq!(chart.x().scale().range(), Some([0.0, 400.0 - strip]));
    assert_eq!(chart.y().scale().range(), Some([300.0 - strip, 0.0]));

    chart.on_frame(Instant::now());
    let scene = chart.surface();
    assert_eq!(scene.layer_offset(Layer::Canvas), Point::new(BOXPLOT_SIZE, 0.0));
    for layer in [Layer::BoxPlotX, Layer::BoxPlotY] {
        for id in ["box", "whisker", "median", "dot:A", "dot:B"] {
            assert!(scene.contains(&ShapeKey::new(layer, id)), "{layer:?} {id}");
        }
    }
}

#[test]
fn axis_labels_sit_on_the_last_tick() {
    let mut chart = chart();
    chart.set_x("price", "linear").unwrap();
    chart.set_y("price", "linear").unwrap();
    chart.on_frame(Instant::now());

    let last_x = axis_ticks(chart.x(), 400.0).last().unwrap().position;
    let last_y = axis_ticks(chart.y(), 300.0).last().unwrap().position;
    let scene = chart.surface();
    let x_label = scene.target(&ShapeKey::new(Layer::AxisX, "label")).unwrap();
    let y_label = scene.target(&ShapeKey::new(Layer::AxisY, "label")).unwrap();
    assert!(matches!(x_label.geometry, Geometry::Text { x, .. } if x == last_x), "{x_label:?}");
    assert!(matches!(y_label.geometry, Geometry::Text { y, .. } if y == last_y), "{y_label:?}");
}

#[test]
fn points_without_a_value_shrink_and_leave() {
    let mut chart = Chart::new(spread_table(), Scene::new(Size::new(400.0, 300.0)), ChartOptions::default()).unwrap();
    let t0 = Instant::now();
    chart.on_frame(t0);
    let key = ShapeKey::new(Layer::Canvas, "point:N");
    assert!(chart.surface().contains(&key));

    chart.set_x("price", "linear").unwrap();
    assert_eq!(chart.on_frame(t0 + ms(20)), FrameOutcome::Painted { animate: true });
    let scene = chart.surface();
    assert!(scene.is_removing(&key));
    let target = scene.target(&key).unwrap();
    assert!(matches!(target.geometry, Geometry::Circle { r, .. } if r == 0.0));
    assert_eq!(target.style.opacity, 0.0);
    assert!(!scene.is_removing(&ShapeKey::new(Layer::Canvas, "point:A")));

    // Gone once the exit transition has run.
    let done = t0 + ms(20) + chart.options().transition;
    chart.surface_mut().begin_frame(done);
    assert!(!chart.surface().contains(&key));
}

#[test]
fn outlier_dots_are_drawn_larger_and_darker() {
    let options = ChartOptions { x_box_plot: true, ..ChartOptions::default() };
    let mut chart = Chart::new(spread_table(), Scene::new(Size::new(400.0, 300.0)), options).unwrap();
    chart.set_x("price", "linear").unwrap();
    chart.on_frame(Instant::now());

    let scene = chart.surface();
    let dot = move |id: &str| scene.target(&ShapeKey::new(Layer::BoxPlotX, format!("dot:{id}"))).unwrap();
    let z = dot("Z");
    assert!(matches!(z.geometry, Geometry::Circle { r, .. } if r == BOXPLOT_OUTLIER_R));
    assert_eq!(z.style.opacity, BOXPLOT_OUTLIER_OPACITY);
    let a = dot("A");
    assert!(matches!(a.geometry, Geometry::Circle { r, .. } if r == BOXPLOT_DOT_R));
    assert_eq!(a.style.opacity, BOXPLOT_DOT_OPACITY);
    // No value, no dot.
    assert!(!scene.contains(&ShapeKey::new(Layer::BoxPlotX, "dot:N")));
}

#[test]
fn hover_reveals_the_label() {
    let mut chart = chart();
    chart.on_frame(Instant::now());
    let scene = chart.surface_mut();
    scene.pointer_move(Point::new(200.0, 150.0));
    let hovered = scene.hovered().cloned().unwrap();
    let id = hovered.id.trim_start_matches("point:").to_string();
    let label = scene.target(&ShapeKey::new(Layer::Canvas, format!("point-label:{id}"))).unwrap();
    assert_eq!(label.style.opacity, 1.0);
}

#[test]
fn resize_rescales_ranges() {
    let mut chart = chart();
    chart.set_x("price", "linear").unwrap();
    chart.surface_mut().resize(Size::new(800.0, 600.0));
    chart.resize();
    assert_eq!(chart.size(), Size::new(800.0, 600.0));
    assert_eq!(chart.x().scale().range(), Some([0.0, 800.0]));
}

#[test]
fn resize_repaints_without_animation() {
    let mut chart = chart();
    let t0 = Instant::now();
    chart.set_x("price", "linear").unwrap();
    assert_eq!(chart.on_frame(t0), FrameOutcome::Painted { animate: true });

    chart.surface_mut().resize(Size::new(500.0, 400.0));
    chart.resize();
    assert!(chart.scheduler().is_dirty());
    assert!(!chart.scheduler().animate());
    assert_eq!(chart.on_frame(t0 + ms(20)), FrameOutcome::Painted { animate: false });
}

#[test]
fn dispose_hands_back_the_surface() {
    let mut chart = chart();
    chart.on_frame(Instant::now());
    let scene = chart.dispose();
    assert!(!scene.is_empty());
}
