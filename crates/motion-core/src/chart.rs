// File: crates/motion-core/src/chart.rs
// Summary: Chart engine: binds dimensions to table columns, keeps scales in sync with data and
// screen size, and repaints a keyed scene through `DrawSurface` at a throttled frame rate.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use crate::axis::{axis_ticks, Tick};
use crate::boxplot::BoxPlotStats;
use crate::data_table::{DataTable, Extent};
use crate::dimension::{Dimension, DimensionName};
use crate::error::{ChartError, Result};
use crate::geometry::{Point, Size};
use crate::join::KeyedLayer;
use crate::record::Record;
use crate::scale::{Domain, ScaleKind};
use crate::scheduler::{FrameOutcome, FrameScheduler};
use crate::surface::{
    Anchor, Attr, DrawSurface, Geometry, Layer, PathCmd, PointerHandlers, Shape, ShapeKey, Style, Transition,
};
use crate::theme::{Color, Theme};
use crate::types::*;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Draw a box-plot strip under the x axis.
    pub x_box_plot: bool,
    /// Draw a box-plot strip left of the y axis.
    pub y_box_plot: bool,
    pub margins: Insets,
    pub theme: Theme,
    pub min_frame_interval: Duration,
    pub transition: Duration,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            x_box_plot: false,
            y_box_plot: false,
            margins: Insets::default(),
            theme: Theme::default(),
            min_frame_interval: MIN_FRAME_INTERVAL,
            transition: TRANSITION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    X,
    Y,
}

impl Side {
    fn axis_layer(self) -> Layer {
        match self {
            Side::X => Layer::AxisX,
            Side::Y => Layer::AxisY,
        }
    }

    fn box_plot_layer(self) -> Layer {
        match self {
            Side::X => Layer::BoxPlotX,
            Side::Y => Layer::BoxPlotY,
        }
    }
}

/// One data point after scaling.
struct Placed {
    key: String,
    cx: f32,
    cy: f32,
    r: f32,
    fill: Color,
}

const BACKGROUND_ID: &str = "canvas-bg";
const AXIS_LABEL_ID: &str = "label";
const BOX_ID: &str = "box";
const WHISKER_ID: &str = "whisker";
const MEDIAN_ID: &str = "median";

/// Animated scatter chart over a shared [`DataTable`].
///
/// The chart never drives its own loop: the host forwards animation-frame
/// callbacks to [`Chart::on_frame`], which paints at most once per
/// `min_frame_interval` and only when something changed.
pub struct Chart<S: DrawSurface> {
    table: Arc<DataTable>,
    surface: S,
    options: ChartOptions,
    size: Size,
    time_domain: Option<Extent>,
    current_time: Option<f64>,
    x: Dimension,
    y: Dimension,
    r: Dimension,
    c: Dimension,
    scheduler: FrameScheduler,
    x_ticks: KeyedLayer,
    y_ticks: KeyedLayer,
    points: KeyedLayer,
    x_dots: KeyedLayer,
    y_dots: KeyedLayer,
}

impl<S: DrawSurface> Chart<S> {
    /// Mount a chart on an empty surface. All dimensions start constant and
    /// the clock is placed at the start of the time domain.
    pub fn new(table: Arc<DataTable>, surface: S, options: ChartOptions) -> Result<Self> {
        if !surface.is_empty() {
            return Err(ChartError::SurfaceNotEmpty);
        }
        let size = surface.size();
        let scheduler = FrameScheduler::new(options.min_frame_interval);
        let mut chart = Self {
            table,
            surface,
            options,
            size,
            time_domain: None,
            current_time: None,
            x: Dimension::constant(),
            y: Dimension::constant(),
            r: Dimension::constant(),
            c: Dimension::constant(),
            scheduler,
            x_ticks: KeyedLayer::new(),
            y_ticks: KeyedLayer::new(),
            points: KeyedLayer::new(),
            x_dots: KeyedLayer::new(),
            y_dots: KeyedLayer::new(),
        };
        chart.data_change();
        chart.screen_change();
        chart.set_progress(0.0, true);
        chart.scheduler.trigger(false);
        chart.scheduler.start();
        debug!("chart mounted at {}x{}", size.width, size.height);
        Ok(chart)
    }

    pub fn table(&self) -> &Arc<DataTable> { &self.table }

    pub fn options(&self) -> &ChartOptions { &self.options }

    pub fn surface(&self) -> &S { &self.surface }

    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }

    pub fn size(&self) -> Size { self.size }

    pub fn x(&self) -> &Dimension { &self.x }

    pub fn y(&self) -> &Dimension { &self.y }

    pub fn r(&self) -> &Dimension { &self.r }

    pub fn c(&self) -> &Dimension { &self.c }

    pub fn dimension(&self, name: DimensionName) -> &Dimension {
        match name {
            DimensionName::X => &self.x,
            DimensionName::Y => &self.y,
            DimensionName::R => &self.r,
            DimensionName::C => &self.c,
        }
    }

    pub fn time_domain(&self) -> Option<Extent> { self.time_domain }

    pub fn current_time(&self) -> Option<f64> { self.current_time }

    pub fn scheduler(&self) -> &FrameScheduler { &self.scheduler }

    /// Move the clock to `min + (max - min) * rate`. Re-setting the same time is a no-op.
    pub fn set_progress(&mut self, rate: f64, animate: bool) {
        let Some(domain) = self.time_domain else { return };
        let time = (domain.max - domain.min) * rate + domain.min;
        if self.current_time == Some(time) {
            return;
        }
        self.current_time = Some(time);
        self.scheduler.trigger(animate);
    }

    pub fn set_x(&mut self, column: &str, scale: &str) -> Result<()> { self.bind("x", column, scale) }

    pub fn set_y(&mut self, column: &str, scale: &str) -> Result<()> { self.bind("y", column, scale) }

    pub fn set_r(&mut self, column: &str, scale: &str) -> Result<()> { self.bind("r", column, scale) }

    pub fn set_c(&mut self, column: &str, scale: &str) -> Result<()> { self.bind("c", column, scale) }

    pub fn unset_x(&mut self) { self.replace(DimensionName::X, Dimension::constant()) }

    pub fn unset_y(&mut self) { self.replace(DimensionName::Y, Dimension::constant()) }

    pub fn unset_r(&mut self) { self.replace(DimensionName::R, Dimension::constant()) }

    pub fn unset_c(&mut self) { self.replace(DimensionName::C, Dimension::constant()) }

    /// Bind `dimension` to `column` through the scale named `scale`.
    /// On error the previous binding stays in place.
    pub fn bind(&mut self, dimension: &str, column: &str, scale: &str) -> Result<()> {
        let name: DimensionName = dimension.parse()?;
        let kind: ScaleKind = scale.parse()?;
        let dim = if kind == ScaleKind::Constant {
            Dimension::constant()
        } else {
            Dimension::bind(name, self.table.column_type(column)?, kind)?
        };
        info!("bind {} -> '{}' ({})", name, column, kind);
        self.replace(name, dim);
        Ok(())
    }

    pub fn unbind(&mut self, dimension: &str) -> Result<()> {
        let name: DimensionName = dimension.parse()?;
        info!("unbind {}", name);
        self.replace(name, Dimension::constant());
        Ok(())
    }

    fn replace(&mut self, name: DimensionName, dim: Dimension) {
        let dim = match name {
            DimensionName::C => dim.with_scale(dim.scale().with_unknown(self.options.theme.unknown_category)),
            _ => dim,
        };
        match name {
            DimensionName::X => self.x = dim,
            DimensionName::Y => self.y = dim,
            DimensionName::R => self.r = dim,
            DimensionName::C => self.c = dim,
        }
        self.data_change();
        self.screen_change();
        self.scheduler.trigger(true);
    }

    /// Re-read the surface size after the host resized it.
    pub fn resize(&mut self) {
        self.size = self.surface.size();
        debug!("resize to {}x{}", self.size.width, self.size.height);
        self.screen_change();
    }

    /// Forward one animation-frame callback.
    pub fn on_frame(&mut self, now: Instant) -> FrameOutcome {
        let outcome = self.scheduler.poll(now);
        if let FrameOutcome::Painted { animate } = outcome {
            self.surface.begin_frame(now);
            self.render(animate);
        }
        outcome
    }

    /// Stop the frame subscription and hand the surface back to the host.
    pub fn dispose(mut self) -> S {
        self.scheduler.stop();
        self.surface
    }

    fn data_change(&mut self) {
        match self.table.time_extent() {
            Ok(extent) => self.time_domain = Some(extent),
            Err(err) => warn!("time domain unchanged: {}", err),
        }
        self.x = self.fitted(&self.x, 0.05, false);
        self.y = self.fitted(&self.y, 0.05, false);
        self.r = self.fitted(&self.r, 0.0, false);
        self.c = self.fitted(&self.c, 0.05, true);
        self.scheduler.trigger(true);
    }

    fn fitted(&self, dim: &Dimension, padding: f64, reverse: bool) -> Dimension {
        let Some(column) = dim.column() else { return dim.clone() };
        let domain = if dim.scale().is_discrete() {
            self.table.distinct_values(column).map(Domain::Discrete)
        } else {
            self.table.extent(column, padding).map(|e| Domain::Continuous(e.as_array()))
        };
        match domain {
            Ok(d) if reverse => dim.with_domain(d.reversed()),
            Ok(d) => dim.with_domain(d),
            Err(err) => {
                warn!("domain of '{}' unchanged: {}", column, err);
                dim.clone()
            }
        }
    }

    fn should_draw_box_plot(&self, side: Side) -> bool {
        match side {
            Side::X => self.options.x_box_plot && !self.x.is_constant(),
            Side::Y => self.options.y_box_plot && !self.y.is_constant(),
        }
    }

    fn screen_change(&mut self) {
        let x_strip = if self.should_draw_box_plot(Side::X) { BOXPLOT_SIZE } else { 0.0 };
        let y_strip = if self.should_draw_box_plot(Side::Y) { BOXPLOT_SIZE } else { 0.0 };
        let m = self.options.margins;

        self.surface.translate(Layer::Root, Point::new(m.left as f32 + y_strip, m.top as f32), None);

        let w = (self.size.width - m.left as f32 - y_strip - m.right as f32).max(0.0) as f64;
        let h = (self.size.height - m.top as f32 - x_strip - m.bottom as f32).max(0.0) as f64;

        self.x = self.x.with_range_round([0.0, w]);
        self.y = self.y.with_range_round([h, 0.0]);
        self.r = self.r.with_range_round([DATA_CIRCLE_MIN_R, DATA_CIRCLE_MIN_R + w.min(h) * DATA_CIRCLE_MAX_R_RATIO]);

        self.scheduler.trigger(false);
    }

    fn transition(&self, animate: bool) -> Option<Transition> {
        animate.then(|| Transition::new(self.options.transition))
    }

    fn render(&mut self, animate: bool) {
        let started = Instant::now();
        let tr = self.transition(animate);
        self.render_axes(tr);
        let count = self.render_data_points(tr);
        debug!(
            "render pass: animate={}, {} points in {:?}",
            animate,
            count,
            started.elapsed()
        );
    }

    /// Pixel width and height of the plot area, read back from the scales.
    fn plot_extent(&self) -> (f32, f32) {
        let width = self.x.scale().range().map_or(0.0, |r| r[1]) as f32;
        let height = self.y.scale().range().map_or(0.0, |r| r[0]) as f32;
        (width, height)
    }

    fn render_axes(&mut self, tr: Option<Transition>) {
        let (width, height) = self.plot_extent();
        let theme = self.options.theme;

        let bg = Shape::new(
            Geometry::Rect { x: 0.0, y: 0.0, width, height },
            Style::filled(theme.canvas_fill).with_stroke(theme.canvas_stroke, 1.0),
        );
        self.surface.update(&ShapeKey::new(Layer::Background, BACKGROUND_ID), bg, tr);

        self.surface.translate(Layer::AxisX, Point::new(0.0, height), tr);
        self.render_axis(Side::X, width, height, tr);
        self.render_axis(Side::Y, width, height, tr);

        self.surface.translate(Layer::BoxPlotX, Point::new(0.0, height + BOXPLOT_PADDING), tr);
        self.surface.translate(Layer::BoxPlotY, Point::new(-BOXPLOT_SIZE, 0.0), tr);
    }

    fn render_axis(&mut self, side: Side, width: f32, height: f32, tr: Option<Transition>) {
        let layer = side.axis_layer();
        let label_key = ShapeKey::new(layer, AXIS_LABEL_ID);
        let (dim, span) = match side {
            Side::X => (&self.x, width),
            Side::Y => (&self.y, height),
        };

        if dim.is_constant() {
            let ticks = match side {
                Side::X => self.x_ticks.clear(),
                Side::Y => self.y_ticks.clear(),
            };
            for id in ticks {
                self.surface.remove(&tick_line_key(layer, &id), None);
                self.surface.remove(&tick_text_key(layer, &id), None);
            }
            self.surface.remove(&label_key, None);
            return;
        }

        let label = dim.label().to_string();
        let ticks = axis_ticks(dim, span as f64);
        let join = match side {
            Side::X => self.x_ticks.join(ticks.iter().map(tick_id)),
            Side::Y => self.y_ticks.join(ticks.iter().map(tick_id)),
        };

        for id in &join.exit {
            for key in [tick_line_key(layer, id), tick_text_key(layer, id)] {
                self.surface.set_attr(&key, Attr::Opacity(0.0), tr);
                self.surface.remove(&key, tr);
            }
        }

        let theme = self.options.theme;
        for tick in &ticks {
            let id = tick_id(tick);
            let entering = join.enter.contains(&id);
            let p = tick.position;
            let (line, text) = match side {
                Side::X => (
                    Geometry::Line { x1: p, y1: 0.0, x2: p, y2: -height },
                    Geometry::Text {
                        x: p,
                        y: 0.0,
                        dx: -2.0,
                        dy: -4.0,
                        text: tick.text.clone(),
                        anchor: Anchor::End,
                        size: AXIS_TEXT_SIZE,
                    },
                ),
                Side::Y => (
                    Geometry::Line { x1: 0.0, y1: p, x2: width, y2: p },
                    Geometry::Text {
                        x: 0.0,
                        y: p,
                        dx: 4.0,
                        dy: -4.0,
                        text: tick.text.clone(),
                        anchor: Anchor::Start,
                        size: AXIS_TEXT_SIZE,
                    },
                ),
            };
            let line = Shape::new(line, Style::stroked(theme.grid, 1.0).with_opacity(GRID_STROKE_OPACITY));
            let text = Shape::new(text, Style::filled(theme.tick_value));
            self.put(tick_line_key(layer, &id), faded(&line), line, entering, tr);
            self.put(tick_text_key(layer, &id), faded(&text), text, entering, tr);
        }

        // The label is re-homed onto the last tick every pass.
        self.surface.remove(&label_key, None);
        if let Some(last) = ticks.last() {
            let p = last.position;
            let geometry = match side {
                Side::X => Geometry::Text {
                    x: p,
                    y: 0.0,
                    dx: -2.0,
                    dy: -24.0,
                    text: label,
                    anchor: Anchor::End,
                    size: AXIS_TEXT_SIZE,
                },
                Side::Y => Geometry::Text {
                    x: 0.0,
                    y: p,
                    dx: 32.0,
                    dy: -4.0,
                    text: label,
                    anchor: Anchor::Start,
                    size: AXIS_TEXT_SIZE,
                },
            };
            self.surface.create(label_key, Shape::new(geometry, Style::filled(theme.axis_label)));
        }
    }

    /// Create-then-transition for entering shapes, plain update otherwise.
    fn put(&mut self, key: ShapeKey, initial: Shape, target: Shape, entering: bool, tr: Option<Transition>) {
        if entering && tr.is_some() {
            self.surface.create(key.clone(), initial);
        }
        self.surface.update(&key, target, tr);
    }

    fn place(&self, records: &[Record]) -> Vec<Placed> {
        let category = self.table.category_column().name.as_str();
        let theme = &self.options.theme;
        records
            .iter()
            .filter_map(|rec| {
                let cx = self.x.scaled(rec).as_number()?;
                let cy = self.y.scaled(rec).as_number()?;
                let r = self.r.scaled(rec).as_number()?;
                if !(cx.is_finite() && cy.is_finite() && r.is_finite()) {
                    return None;
                }
                let fill = if self.c.is_constant() {
                    theme.circle_fill
                } else {
                    self.c.scaled(rec).as_color().unwrap_or(theme.unknown_category)
                };
                Some(Placed { key: rec.get(category).to_string(), cx: cx as f32, cy: cy as f32, r: r as f32, fill })
            })
            .collect()
    }

    fn render_data_points(&mut self, tr: Option<Transition>) -> usize {
        let Some(time) = self.current_time else { return 0 };
        let data = self.table.values_at(time);
        let placed = self.place(&data);
        let join = self.points.join(placed.iter().map(|p| p.key.clone()));

        for id in &join.exit {
            let circle = point_key(id);
            self.surface.set_attr(&circle, Attr::R(0.0), tr);
            self.surface.set_attr(&circle, Attr::Opacity(0.0), tr);
            self.surface.remove(&circle, tr);
            let label = point_label_key(id);
            self.surface.set_attr(&label, Attr::Opacity(0.0), tr);
            self.surface.remove(&label, tr);
        }

        let theme = self.options.theme;
        for p in &placed {
            let circle_key = point_key(&p.key);
            let label_key = point_label_key(&p.key);
            let circle = Shape::new(
                Geometry::Circle { cx: p.cx, cy: p.cy, r: p.r },
                Style::filled(p.fill)
                    .with_stroke(theme.circle_stroke, DATA_CIRCLE_STROKE_WIDTH)
                    .with_opacity(DATA_CIRCLE_OPACITY),
            );

            if join.enter.contains(&p.key) {
                let mut initial = circle.clone();
                initial.apply(&Attr::R(0.0));
                initial.apply(&Attr::Opacity(0.0));
                self.put(circle_key.clone(), initial, circle, true, tr);

                let label = Shape::new(
                    Geometry::Text {
                        x: p.cx,
                        y: p.cy,
                        dx: 0.0,
                        dy: 0.0,
                        text: p.key.clone(),
                        anchor: Anchor::Middle,
                        size: DATA_LABEL_SIZE,
                    },
                    Style::filled(theme.label_text).with_opacity(0.0),
                );
                self.surface.create(label_key.clone(), label);
                self.surface.on_pointer(
                    &circle_key,
                    PointerHandlers {
                        enter: vec![(label_key.clone(), Attr::Opacity(1.0))],
                        leave: vec![(label_key, Attr::Opacity(0.0))],
                        raise: true,
                    },
                );
            } else {
                self.surface.update(&circle_key, circle, tr);
                // Position only, so a hovered label keeps its opacity.
                self.surface.set_attr(&label_key, Attr::X(p.cx), tr);
                self.surface.set_attr(&label_key, Attr::Y(p.cy), tr);
            }
        }

        for side in [Side::X, Side::Y] {
            self.render_box_plot(side, &data, &placed, tr);
        }
        placed.len()
    }

    fn clear_box_plot(&mut self, side: Side) {
        let layer = side.box_plot_layer();
        for id in [BOX_ID, WHISKER_ID, MEDIAN_ID] {
            self.surface.remove(&ShapeKey::new(layer, id), None);
        }
        let dots = match side {
            Side::X => self.x_dots.clear(),
            Side::Y => self.y_dots.clear(),
        };
        for id in dots {
            self.surface.remove(&dot_key(layer, &id), None);
        }
    }

    fn render_box_plot(&mut self, side: Side, data: &[Record], placed: &[Placed], tr: Option<Transition>) {
        if !self.should_draw_box_plot(side) {
            self.clear_box_plot(side);
            return;
        }
        let dim = match side {
            Side::X => &self.x,
            Side::Y => &self.y,
        };
        let Some(stats) = BoxPlotStats::from_values(data.iter().filter_map(|r| dim.raw_number(r))) else {
            self.clear_box_plot(side);
            return;
        };

        let (width, height) = self.plot_extent();
        let limit = match side {
            Side::X => width,
            Side::Y => height,
        };
        let scale = dim.scale().clone();
        // Projected coordinates are clipped to the axis span.
        let px = |v: f64| (scale.apply_f64(v).as_number().unwrap_or(0.0) as f32).clamp(0.0, limit);

        let size = BOXPLOT_SIZE;
        let pad = BOXPLOT_PADDING;
        let mid = size * 0.5;
        let (q1, q3, median) = (px(stats.q1), px(stats.q3), px(stats.median));
        let (lo, hi) = (px(stats.whisker_low), px(stats.whisker_high));

        let box_geometry = match side {
            Side::X => Geometry::Rect { x: q1.min(q3), y: pad, width: (q3 - q1).abs(), height: size - pad * 2.0 },
            Side::Y => Geometry::Rect { x: pad, y: q1.min(q3), width: size - pad * 2.0, height: (q3 - q1).abs() },
        };
        let whisker = match side {
            Side::X => vec![
                PathCmd::MoveTo(Point::new(lo, pad)),
                PathCmd::LineTo(Point::new(lo, size - pad)),
                PathCmd::MoveTo(Point::new(lo, mid)),
                PathCmd::LineTo(Point::new(hi, mid)),
                PathCmd::MoveTo(Point::new(hi, pad)),
                PathCmd::LineTo(Point::new(hi, size - pad)),
            ],
            Side::Y => vec![
                PathCmd::MoveTo(Point::new(pad, lo)),
                PathCmd::LineTo(Point::new(size - pad, lo)),
                PathCmd::MoveTo(Point::new(mid, lo)),
                PathCmd::LineTo(Point::new(mid, hi)),
                PathCmd::MoveTo(Point::new(pad, hi)),
                PathCmd::LineTo(Point::new(size - pad, hi)),
            ],
        };
        let median_geometry = match side {
            Side::X => Geometry::Line { x1: median, y1: pad, x2: median, y2: size - pad },
            Side::Y => Geometry::Line { x1: pad, y1: median, x2: size - pad, y2: median },
        };

        let theme = self.options.theme;
        let layer = side.box_plot_layer();
        let stroke = Style::stroked(theme.boxplot_stroke, BOXPLOT_STROKE_WIDTH);
        self.surface.update(&ShapeKey::new(layer, WHISKER_ID), Shape::new(Geometry::Path(whisker), stroke), tr);
        self.surface.update(
            &ShapeKey::new(layer, BOX_ID),
            Shape::new(box_geometry, stroke.with_fill(theme.boxplot_fill)),
            tr,
        );
        self.surface.update(&ShapeKey::new(layer, MEDIAN_ID), Shape::new(median_geometry, stroke), tr);

        // Dots follow the placed points so keys match the canvas.
        let category = self.table.category_column().name.clone();
        let live = placed.iter().map(|p| p.key.as_str()).collect::<FxHashSet<_>>();
        let dots = data
            .iter()
            .filter_map(|rec| {
                let key = rec.get(&category).to_string();
                if !live.contains(key.as_str()) {
                    return None;
                }
                let raw = dim.raw_number(rec)?;
                let pos = dim.scaled(rec).as_number()? as f32;
                Some((key, raw, pos))
            })
            .collect::<Vec<_>>();
        let join = match side {
            Side::X => self.x_dots.join(dots.iter().map(|d| d.0.clone())),
            Side::Y => self.y_dots.join(dots.iter().map(|d| d.0.clone())),
        };

        for id in &join.exit {
            let key = dot_key(layer, id);
            self.surface.set_attr(&key, Attr::Opacity(0.0), tr);
            self.surface.set_attr(&key, Attr::R(0.0), tr);
            self.surface.remove(&key, tr);
        }
        for (id, raw, pos) in dots {
            let (r, opacity) = if stats.is_outlier(raw) {
                (BOXPLOT_OUTLIER_R, BOXPLOT_OUTLIER_OPACITY)
            } else {
                (BOXPLOT_DOT_R, BOXPLOT_DOT_OPACITY)
            };
            let (cx, cy) = match side {
                Side::X => (pos, mid),
                Side::Y => (mid, pos),
            };
            let dot = Shape::new(Geometry::Circle { cx, cy, r }, Style::filled(theme.boxplot_point).with_opacity(opacity));
            let mut initial = dot.clone();
            initial.apply(&Attr::R(0.0));
            initial.apply(&Attr::Opacity(0.0));
            let entering = join.enter.contains(&id);
            self.put(dot_key(layer, &id), initial, dot, entering, tr);
        }
    }
}

fn tick_id(tick: &Tick) -> String { format!("{}", tick.value) }

fn tick_line_key(layer: Layer, id: &str) -> ShapeKey { ShapeKey::new(layer, format!("tick-line:{id}")) }

fn tick_text_key(layer: Layer, id: &str) -> ShapeKey { ShapeKey::new(layer, format!("tick-text:{id}")) }

fn point_key(id: &str) -> ShapeKey { ShapeKey::new(Layer::Canvas, format!("point:{id}")) }

fn point_label_key(id: &str) -> ShapeKey { ShapeKey::new(Layer::Canvas, format!("point-label:{id}")) }

fn dot_key(layer: Layer, id: &str) -> ShapeKey { ShapeKey::new(layer, format!("dot:{id}")) }

fn faded(shape: &Shape) -> Shape {
    let mut s = shape.clone();
    s.apply(&Attr::Opacity(0.0));
    s
}
