// File: crates/motion-core/src/axis.rs
// Summary: Axis tick model: nice tick values projected through a dimension, SI-formatted labels.

use crate::dimension::Dimension;
use crate::types::GRID_PIXELS_PER_TICK;

const SI_PREFIXES: [&str; 17] = ["y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y"];

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel offset along the axis.
    pub position: f32,
    pub text: String,
}

/// Ticks for a dimension spanning `pixel_span` pixels. Constant dimensions have none.
pub fn axis_ticks(dim: &Dimension, pixel_span: f64) -> Vec<Tick> {
    if dim.is_constant() {
        return Vec::new();
    }
    let scale = dim.scale();
    scale
        .ticks(pixel_span.abs() / GRID_PIXELS_PER_TICK)
        .into_iter()
        .filter_map(|value| {
            let position = scale.apply_f64(value).as_number()?;
            Some(Tick { value, position: position as f32, text: format_si(value) })
        })
        .collect()
}

/// Three significant digits with an SI prefix: 1500 -> "1.50k", 20 -> "20.0", 0.5 -> "500m".
pub fn format_si(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let sign = if v < 0.0 { "-" } else { "" };
    let sci = format!("{:.2e}", v.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else { return sci };
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits = mantissa.replace('.', "");
    let prefix_exp = exp.div_euclid(3).clamp(-8, 8) * 3;
    let i = exp - prefix_exp + 1;
    let n = digits.len() as i32;
    let body = if i == n {
        digits
    } else if i > n {
        format!("{}{}", digits, "0".repeat((i - n) as usize))
    } else if i > 0 {
        let (head, tail) = digits.split_at(i as usize);
        format!("{head}.{tail}")
    } else {
        format!("0.{}{}", "0".repeat((-i) as usize), digits)
    };
    let prefix = SI_PREFIXES[(8 + prefix_exp / 3) as usize];
    format!("{sign}{body}{prefix}")
}
