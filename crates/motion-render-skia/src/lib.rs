// File: crates/motion-render-skia/src/lib.rs
// Summary: Skia CPU raster surface for the motion chart. Shapes live in a retained `Scene`;
// frames are sampled at an instant and encoded to PNG.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use motion_core::surface::{Anchor, PathCmd};
use motion_core::{
    Attr, Color, DrawSurface, Geometry, Layer, PaintItem, Point, PointerHandlers, Scene, Shape, ShapeKey, Size,
    Theme, Transition,
};
use skia_safe as skia;
use tracing::debug;

/// `DrawSurface` backed by an in-memory scene and rasterized with Skia on demand.
pub struct SkiaSurface {
    scene: Scene,
    background: Color,
}

impl SkiaSurface {
    pub fn new(size: Size, background: Color) -> Self {
        Self { scene: Scene::new(size), background }
    }

    /// Surface cleared with the theme background.
    pub fn with_theme(size: Size, theme: &Theme) -> Self { Self::new(size, theme.background) }

    pub fn scene(&self) -> &Scene { &self.scene }

    /// Host-side access, e.g. for pointer moves and resizes.
    pub fn scene_mut(&mut self) -> &mut Scene { &mut self.scene }

    pub fn resize(&mut self, size: Size) { self.scene.resize(size); }

    /// Rasterize the scene as sampled at `at` and encode it as PNG.
    pub fn render_png_bytes(&self, at: Instant) -> Result<Vec<u8>> {
        let size = self.scene.size();
        let (w, h) = (size.width.ceil().max(1.0) as i32, size.height.ceil().max(1.0) as i32);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(to_skia(self.background, 1.0));

        let items = self.scene.sample(at);
        for item in &items {
            draw_item(canvas, item);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        debug!("rasterized {} shapes at {}x{}", items.len(), w, h);
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_png(&self, at: Instant, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_png_bytes(at)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

impl DrawSurface for SkiaSurface {
    fn size(&self) -> Size { self.scene.size() }

    fn is_empty(&self) -> bool { self.scene.is_empty() }

    fn begin_frame(&mut self, now: Instant) { self.scene.begin_frame(now) }

    fn create(&mut self, key: ShapeKey, shape: Shape) { self.scene.create(key, shape) }

    fn update(&mut self, key: &ShapeKey, shape: Shape, transition: Option<Transition>) {
        self.scene.update(key, shape, transition)
    }

    fn set_attr(&mut self, key: &ShapeKey, attr: Attr, transition: Option<Transition>) {
        self.scene.set_attr(key, attr, transition)
    }

    fn remove(&mut self, key: &ShapeKey, transition: Option<Transition>) { self.scene.remove(key, transition) }

    fn translate(&mut self, layer: Layer, offset: Point, transition: Option<Transition>) {
        self.scene.translate(layer, offset, transition)
    }

    fn on_pointer(&mut self, key: &ShapeKey, handlers: PointerHandlers) { self.scene.on_pointer(key, handlers) }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Color, opacity: f32) -> skia::Color {
    let a = (c.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn fill_paint(shape: &Shape) -> Option<skia::Paint> {
    let style = &shape.style;
    if style.fill.is_transparent() || style.opacity <= 0.0 {
        return None;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_skia(style.fill, style.opacity));
    Some(paint)
}

fn stroke_paint(shape: &Shape) -> Option<skia::Paint> {
    let style = &shape.style;
    if style.stroke.is_transparent() || style.opacity <= 0.0 || style.stroke_width <= 0.0 {
        return None;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(style.stroke_width);
    paint.set_color(to_skia(style.stroke, style.opacity));
    Some(paint)
}

fn draw_item(canvas: &skia::Canvas, item: &PaintItem) {
    canvas.save();
    canvas.translate((item.offset.x, item.offset.y));
    let shape = &item.shape;
    match &shape.geometry {
        Geometry::Rect { x, y, width, height } => {
            let rect = skia::Rect::from_xywh(*x, *y, *width, *height);
            if let Some(p) = fill_paint(shape) { canvas.draw_rect(rect, &p); }
            if let Some(p) = stroke_paint(shape) { canvas.draw_rect(rect, &p); }
        }
        Geometry::Line { x1, y1, x2, y2 } => {
            if let Some(p) = stroke_paint(shape) {
                canvas.draw_line((*x1, *y1), (*x2, *y2), &p);
            }
        }
        Geometry::Circle { cx, cy, r } => {
            if *r > 0.0 {
                if let Some(p) = fill_paint(shape) { canvas.draw_circle((*cx, *cy), *r, &p); }
                if let Some(p) = stroke_paint(shape) { canvas.draw_circle((*cx, *cy), *r, &p); }
            }
        }
        Geometry::Path(cmds) => {
            let mut path = skia::Path::new();
            for cmd in cmds {
                match cmd {
                    PathCmd::MoveTo(p) => { path.move_to((p.x, p.y)); }
                    PathCmd::LineTo(p) => { path.line_to((p.x, p.y)); }
                }
            }
            if let Some(p) = stroke_paint(shape) { canvas.draw_path(&path, &p); }
        }
        Geometry::Text { x, y, dx, dy, text, anchor, size } => {
            if let Some(paint) = fill_paint(shape) {
                let mut font = skia::Font::default();
                font.set_size(*size);
                let (width, _) = font.measure_str(text, Some(&paint));
                let left = match anchor {
                    Anchor::Start => 0.0,
                    Anchor::Middle => -width * 0.5,
                    Anchor::End => -width,
                };
                canvas.draw_str(text, (x + dx + left, y + dy), &font, &paint);
            }
        }
    }
    canvas.restore();
}
