// File: crates/motion-core/src/scene.rs
// Summary: Retained, keyed scene graph implementing `DrawSurface`; samples in-flight transitions
// into a flat paint list that raster backends draw.

use std::time::Instant;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::geometry::{lerp, Point, Size};
use crate::surface::{Attr, DrawSurface, Geometry, Layer, PointerHandlers, Shape, ShapeKey, Transition};
use crate::types::{HEIGHT, WIDTH};

#[derive(Clone, Debug)]
struct Animation<T> {
    from: T,
    start: Instant,
    transition: Transition,
}

#[derive(Clone, Debug)]
struct Node {
    target: Shape,
    anim: Option<Animation<Shape>>,
    remove_at: Option<Instant>,
    handlers: Option<PointerHandlers>,
}

impl Node {
    fn sample(&self, at: Instant) -> Shape {
        match &self.anim {
            Some(a) => a.from.lerp(&self.target, a.transition.progress(a.start, at)),
            None => self.target.clone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Offset {
    target: Point,
    anim: Option<Animation<Point>>,
}

impl Offset {
    fn sample(&self, at: Instant) -> Point {
        match &self.anim {
            Some(a) => {
                let t = a.transition.progress(a.start, at);
                Point::new(lerp(a.from.x, self.target.x, t), lerp(a.from.y, self.target.y, t))
            }
            None => self.target,
        }
    }
}

/// One shape ready to draw: sampled geometry plus the accumulated layer offset.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintItem {
    pub key: ShapeKey,
    pub offset: Point,
    pub shape: Shape,
}

#[derive(Debug)]
pub struct Scene {
    size: Size,
    now: Instant,
    nodes: IndexMap<ShapeKey, Node>,
    offsets: FxHashMap<Layer, Offset>,
    hovered: Option<ShapeKey>,
}

impl Scene {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            now: Instant::now(),
            nodes: IndexMap::new(),
            offsets: FxHashMap::default(),
            hovered: None,
        }
    }

    /// Host-side resize; the chart picks it up on its next `resize()`.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    pub fn now(&self) -> Instant { self.now }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn contains(&self, key: &ShapeKey) -> bool { self.nodes.contains_key(key) }

    /// Final (post-transition) state of a shape.
    pub fn target(&self, key: &ShapeKey) -> Option<&Shape> {
        self.nodes.get(key).map(|n| &n.target)
    }

    /// True when the shape is scheduled for removal.
    pub fn is_removing(&self, key: &ShapeKey) -> bool {
        self.nodes.get(key).is_some_and(|n| n.remove_at.is_some())
    }

    pub fn keys(&self, layer: Layer) -> impl Iterator<Item = &ShapeKey> {
        self.nodes.keys().filter(move |k| k.layer == layer)
    }

    /// Target offset of a layer, including the root offset.
    pub fn layer_offset(&self, layer: Layer) -> Point {
        let root = self.offsets.get(&Layer::Root).map(|o| o.target).unwrap_or_default();
        let own = self.offsets.get(&layer).map(|o| o.target).unwrap_or_default();
        root.offset(own)
    }

    fn sampled_offset(&self, layer: Layer, at: Instant) -> Point {
        let root = self.offsets.get(&Layer::Root).map(|o| o.sample(at)).unwrap_or_default();
        let own = self.offsets.get(&layer).map(|o| o.sample(at)).unwrap_or_default();
        root.offset(own)
    }

    /// Flatten the scene at `at` in paint order (layer order, then insertion order).
    pub fn sample(&self, at: Instant) -> Vec<PaintItem> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for layer in Layer::PAINT_ORDER {
            let offset = self.sampled_offset(layer, at);
            for (key, node) in self.nodes.iter().filter(|(k, _)| k.layer == layer) {
                if node.remove_at.is_some_and(|t| t <= at) {
                    continue;
                }
                out.push(PaintItem { key: key.clone(), offset, shape: node.sample(at) });
            }
        }
        out
    }

    /// Hit-test shapes that carry pointer handlers and fire enter/leave changes.
    pub fn pointer_move(&mut self, p: Point) {
        let at = self.now;
        let hit = self
            .nodes
            .iter()
            .rev()
            .filter(|(_, n)| n.handlers.is_some() && n.remove_at.is_none())
            .find(|(k, n)| {
                let local = {
                    let o = self.sampled_offset(k.layer, at);
                    Point::new(p.x - o.x, p.y - o.y)
                };
                hit_test(&n.sample(at).geometry, local)
            })
            .map(|(k, _)| k.clone());

        if hit == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered.take() {
            let leave = self.nodes.get(&prev).and_then(|n| n.handlers.as_ref()).map(|h| h.leave.clone());
            for (key, attr) in leave.unwrap_or_default() {
                self.set_attr(&key, attr, None);
            }
        }
        if let Some(key) = &hit {
            let handlers = self.nodes.get(key).and_then(|n| n.handlers.clone()).unwrap_or_default();
            if handlers.raise {
                self.raise(key);
                for (k, _) in &handlers.enter {
                    self.raise(k);
                }
            }
            for (k, attr) in handlers.enter {
                self.set_attr(&k, attr, None);
            }
        }
        self.hovered = hit;
    }

    pub fn hovered(&self) -> Option<&ShapeKey> { self.hovered.as_ref() }

    fn raise(&mut self, key: &ShapeKey) {
        if let Some(node) = self.nodes.shift_remove(key) {
            self.nodes.insert(key.clone(), node);
        }
    }

    fn purge(&mut self) {
        let now = self.now;
        self.nodes.retain(|_, n| !n.remove_at.is_some_and(|t| t <= now));
        if let Some(h) = &self.hovered {
            if !self.nodes.contains_key(h) {
                self.hovered = None;
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self { Self::new(Size::new(WIDTH, HEIGHT)) }
}

fn hit_test(geometry: &Geometry, p: Point) -> bool {
    match geometry {
        Geometry::Circle { cx, cy, r } => {
            let (dx, dy) = (p.x - cx, p.y - cy);
            dx * dx + dy * dy <= r * r
        }
        Geometry::Rect { x, y, width, height } => {
            p.x >= *x && p.x <= x + width && p.y >= *y && p.y <= y + height
        }
        _ => false,
    }
}

impl DrawSurface for Scene {
    fn size(&self) -> Size { self.size }

    fn is_empty(&self) -> bool { self.nodes.is_empty() }

    fn begin_frame(&mut self, now: Instant) {
        self.now = now;
        self.purge();
    }

    fn create(&mut self, key: ShapeKey, shape: Shape) {
        self.nodes.insert(key, Node { target: shape, anim: None, remove_at: None, handlers: None });
    }

    fn update(&mut self, key: &ShapeKey, shape: Shape, transition: Option<Transition>) {
        let now = self.now;
        if !self.nodes.contains_key(key) {
            self.create(key.clone(), shape);
            return;
        }
        let Some(node) = self.nodes.get_mut(key) else { return };
        node.anim = transition.map(|transition| Animation { from: node.sample(now), start: now, transition });
        node.target = shape;
        node.remove_at = None;
    }

    fn set_attr(&mut self, key: &ShapeKey, attr: Attr, transition: Option<Transition>) {
        let now = self.now;
        let Some(node) = self.nodes.get_mut(key) else { return };
        match transition {
            Some(transition) => {
                node.anim = Some(Animation { from: node.sample(now), start: now, transition });
            }
            None => {
                if let Some(a) = node.anim.as_mut() {
                    a.from.apply(&attr);
                }
            }
        }
        node.target.apply(&attr);
    }

    fn remove(&mut self, key: &ShapeKey, transition: Option<Transition>) {
        match transition {
            Some(t) => {
                let at = self.now + t.duration;
                if let Some(node) = self.nodes.get_mut(key) {
                    node.remove_at = Some(node.remove_at.map_or(at, |prev| prev.min(at)));
                }
            }
            None => {
                self.nodes.shift_remove(key);
            }
        }
    }

    fn translate(&mut self, layer: Layer, offset: Point, transition: Option<Transition>) {
        let now = self.now;
        let entry = self.offsets.entry(layer).or_default();
        entry.anim = transition.map(|transition| Animation { from: entry.sample(now), start: now, transition });
        entry.target = offset;
    }

    fn on_pointer(&mut self, key: &ShapeKey, handlers: PointerHandlers) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.handlers = Some(handlers);
        }
    }
}
