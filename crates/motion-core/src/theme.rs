// File: crates/motion-core/src/theme.rs
// Summary: Backend-neutral RGBA color and light/dark theming for chart rendering colors.

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a } }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }

    pub fn is_transparent(&self) -> bool { self.a == 0 }

    /// Channel-wise interpolation, used by animated fills.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8 };
        Color { r: mix(self.r, other.r), g: mix(self.g, other.g), b: mix(self.b, other.b), a: mix(self.a, other.a) }
    }
}

impl From<colorous::Color> for Color {
    fn from(c: colorous::Color) -> Self { Color::from_rgb(c.r, c.g, c.b) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub canvas_fill: Color,
    pub canvas_stroke: Color,
    pub grid: Color,
    pub tick_value: Color,
    pub axis_label: Color,
    pub circle_stroke: Color,
    pub circle_fill: Color,
    pub label_text: Color,
    pub boxplot_stroke: Color,
    pub boxplot_fill: Color,
    pub boxplot_point: Color,
    pub unknown_category: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            canvas_fill: Color::TRANSPARENT,
            canvas_stroke: Color::TRANSPARENT,
            grid: Color::from_rgb(0xdd, 0xdd, 0xdd),
            tick_value: Color::from_rgb(0x88, 0x88, 0x88),
            axis_label: Color::BLACK,
            circle_stroke: Color::BLACK,
            circle_fill: Color::from_rgb(0x46, 0x82, 0xb4), // steelblue
            label_text: Color::BLACK,
            boxplot_stroke: Color::from_rgb(0x66, 0x66, 0x66),
            boxplot_fill: Color::WHITE,
            boxplot_point: Color::BLACK,
            unknown_category: Color::from_rgb(0x99, 0x99, 0x99),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            canvas_fill: Color::TRANSPARENT,
            canvas_stroke: Color::TRANSPARENT,
            grid: Color::from_rgb(40, 40, 45),
            tick_value: Color::from_rgb(150, 150, 160),
            axis_label: Color::from_rgb(235, 235, 245),
            circle_stroke: Color::from_rgb(18, 18, 20),
            circle_fill: Color::from_rgb(64, 160, 255),
            label_text: Color::from_rgb(235, 235, 245),
            boxplot_stroke: Color::from_rgb(180, 180, 190),
            boxplot_fill: Color::from_rgb(28, 28, 32),
            boxplot_point: Color::from_rgb(210, 210, 220),
            unknown_category: Color::from_rgb(110, 110, 120),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
