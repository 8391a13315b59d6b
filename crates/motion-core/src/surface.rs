// File: crates/motion-core/src/surface.rs
// Summary: Renderer-agnostic draw surface contract: keyed shapes, attributes, animated transitions,
// layer offsets and pointer handlers. Backends implement `DrawSurface`; the chart engine only talks to it.

use std::time::{Duration, Instant};

use crate::geometry::{lerp, Point, Size};
use crate::theme::Color;

/// Shape groups, painted in declaration order. `Root` holds no shapes; its offset applies to all layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Root,
    Background,
    AxisX,
    AxisY,
    BoxPlotX,
    BoxPlotY,
    Canvas,
}

impl Layer {
    pub const PAINT_ORDER: [Layer; 6] = [
        Layer::Background,
        Layer::AxisX,
        Layer::AxisY,
        Layer::BoxPlotX,
        Layer::BoxPlotY,
        Layer::Canvas,
    ];
}

/// Identity of a shape across render passes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShapeKey {
    pub layer: Layer,
    pub id: String,
}

impl ShapeKey {
    pub fn new(layer: Layer, id: impl Into<String>) -> Self {
        Self { layer, id: id.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Rect { x: f32, y: f32, width: f32, height: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
    /// Text whose anchor point is `(x + dx, y + dy)`.
    Text { x: f32, y: f32, dx: f32, dy: f32, text: String, anchor: Anchor, size: f32 },
    Path(Vec<PathCmd>),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
    pub opacity: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self { fill: Color::TRANSPARENT, stroke: Color::TRANSPARENT, stroke_width: 1.0, opacity: 1.0 }
    }
}

impl Style {
    pub fn filled(fill: Color) -> Self { Self { fill, ..Self::default() } }

    pub fn stroked(stroke: Color, stroke_width: f32) -> Self {
        Self { stroke, stroke_width, ..Self::default() }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Color, width: f32) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    fn lerp(&self, to: &Style, t: f32) -> Style {
        Style {
            fill: self.fill.lerp(to.fill, t),
            stroke: self.stroke.lerp(to.stroke, t),
            stroke_width: lerp(self.stroke_width, to.stroke_width, t),
            opacity: lerp(self.opacity, to.opacity, t),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    pub style: Style,
}

impl Shape {
    pub fn new(geometry: Geometry, style: Style) -> Self { Self { geometry, style } }

    /// Apply one attribute. Attributes that do not exist on the geometry are ignored.
    pub fn apply(&mut self, attr: &Attr) {
        match (attr, &mut self.geometry) {
            (Attr::Fill(c), _) => self.style.fill = *c,
            (Attr::Stroke(c), _) => self.style.stroke = *c,
            (Attr::StrokeWidth(w), _) => self.style.stroke_width = *w,
            (Attr::Opacity(o), _) => self.style.opacity = *o,
            (Attr::X(v), Geometry::Rect { x, .. } | Geometry::Text { x, .. }) => *x = *v,
            (Attr::Y(v), Geometry::Rect { y, .. } | Geometry::Text { y, .. }) => *y = *v,
            (Attr::Width(v), Geometry::Rect { width, .. }) => *width = *v,
            (Attr::Height(v), Geometry::Rect { height, .. }) => *height = *v,
            (Attr::Cx(v), Geometry::Circle { cx, .. }) => *cx = *v,
            (Attr::Cy(v), Geometry::Circle { cy, .. }) => *cy = *v,
            (Attr::R(v), Geometry::Circle { r, .. }) => *r = *v,
            (Attr::Text(s), Geometry::Text { text, .. }) => *text = s.clone(),
            _ => {}
        }
    }

    /// Interpolate from `self` toward `to`. Mismatched geometries jump to `to`.
    pub fn lerp(&self, to: &Shape, t: f32) -> Shape {
        let geometry = match (&self.geometry, &to.geometry) {
            (
                Geometry::Rect { x, y, width, height },
                Geometry::Rect { x: x2, y: y2, width: w2, height: h2 },
            ) => Geometry::Rect {
                x: lerp(*x, *x2, t),
                y: lerp(*y, *y2, t),
                width: lerp(*width, *w2, t),
                height: lerp(*height, *h2, t),
            },
            (
                Geometry::Line { x1, y1, x2, y2 },
                Geometry::Line { x1: bx1, y1: by1, x2: bx2, y2: by2 },
            ) => Geometry::Line {
                x1: lerp(*x1, *bx1, t),
                y1: lerp(*y1, *by1, t),
                x2: lerp(*x2, *bx2, t),
                y2: lerp(*y2, *by2, t),
            },
            (Geometry::Circle { cx, cy, r }, Geometry::Circle { cx: bx, cy: by, r: br }) => Geometry::Circle {
                cx: lerp(*cx, *bx, t),
                cy: lerp(*cy, *by, t),
                r: lerp(*r, *br, t),
            },
            (Geometry::Text { x, y, .. }, Geometry::Text { x: bx, y: by, dx, dy, text, anchor, size }) => {
                Geometry::Text {
                    x: lerp(*x, *bx, t),
                    y: lerp(*y, *by, t),
                    dx: *dx,
                    dy: *dy,
                    text: text.clone(),
                    anchor: *anchor,
                    size: *size,
                }
            }
            (Geometry::Path(a), Geometry::Path(b)) if a.len() == b.len() => Geometry::Path(
                a.iter()
                    .zip(b)
                    .map(|pair| match pair {
                        (PathCmd::MoveTo(p), PathCmd::MoveTo(q)) => PathCmd::MoveTo(lerp_point(*p, *q, t)),
                        (PathCmd::LineTo(p), PathCmd::LineTo(q)) => PathCmd::LineTo(lerp_point(*p, *q, t)),
                        (_, q) => *q,
                    })
                    .collect(),
            ),
            (_, g) => g.clone(),
        };
        Shape { geometry, style: self.style.lerp(&to.style, t) }
    }
}

fn lerp_point(a: Point, b: Point, t: f32) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Single geometric or style attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Attr {
    X(f32),
    Y(f32),
    Width(f32),
    Height(f32),
    Cx(f32),
    Cy(f32),
    R(f32),
    Fill(Color),
    Stroke(Color),
    StrokeWidth(f32),
    Opacity(f32),
    Text(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
}

impl Transition {
    pub const fn new(duration: Duration) -> Self { Self { duration } }

    /// Linear progress in `[0, 1]` of a transition started at `start`.
    pub fn progress(&self, start: Instant, at: Instant) -> f32 {
        if self.duration.is_zero() { return 1.0; }
        let elapsed = at.saturating_duration_since(start).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Attribute changes applied when the pointer enters or leaves a shape.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PointerHandlers {
    pub enter: Vec<(ShapeKey, Attr)>,
    pub leave: Vec<(ShapeKey, Attr)>,
    /// Move the shape (and the `enter` targets) to the top of its layer on enter.
    pub raise: bool,
}

/// Capability the chart engine renders through.
pub trait DrawSurface {
    /// Current pixel size of the mount element.
    fn size(&self) -> Size;
    /// True when no shape has been created yet.
    fn is_empty(&self) -> bool;
    /// Called once per painted frame before any draw call.
    fn begin_frame(&mut self, _now: Instant) {}
    fn create(&mut self, key: ShapeKey, shape: Shape);
    fn update(&mut self, key: &ShapeKey, shape: Shape, transition: Option<Transition>);
    fn set_attr(&mut self, key: &ShapeKey, attr: Attr, transition: Option<Transition>);
    /// Remove a shape, immediately or once `transition` has run.
    fn remove(&mut self, key: &ShapeKey, transition: Option<Transition>);
    fn translate(&mut self, layer: Layer, offset: Point, transition: Option<Transition>);
    fn on_pointer(&mut self, key: &ShapeKey, handlers: PointerHandlers);
}
