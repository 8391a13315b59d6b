// File: crates/motion-core/src/scale.rs
// Summary: Tagged scale variants (constant, linear, sqrt, sequential, categorical) with a uniform
// domain/range/apply/invert surface. Scales are values: `with_*` returns a new scale.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;
use crate::grid::nice_ticks;
use crate::record::Value;
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    Constant,
    Linear,
    Sqrt,
    Sequential,
    Categorical,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 5] = [
        ScaleKind::Constant,
        ScaleKind::Linear,
        ScaleKind::Sqrt,
        ScaleKind::Sequential,
        ScaleKind::Categorical,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScaleKind::Constant => "constant",
            ScaleKind::Linear => "linear",
            ScaleKind::Sqrt => "sqrt",
            ScaleKind::Sequential => "sequential",
            ScaleKind::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for ScaleKind {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| ChartError::InvalidScale(s.to_string()))
    }
}

/// Input space of a scale.
#[derive(Clone, Debug, PartialEq)]
pub enum Domain {
    Continuous([f64; 2]),
    Discrete(Vec<String>),
}

impl Domain {
    pub fn reversed(&self) -> Domain {
        match self {
            Domain::Continuous([a, b]) => Domain::Continuous([*b, *a]),
            Domain::Discrete(v) => Domain::Discrete(v.iter().rev().cloned().collect()),
        }
    }
}

/// Output of a scale: a pixel quantity or a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scaled {
    Number(f64),
    Color(Color),
}

impl Scaled {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scaled::Number(n) => Some(*n),
            Scaled::Color(_) => None,
        }
    }
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Scaled::Color(c) => Some(*c),
            Scaled::Number(_) => None,
        }
    }
}

/// Piecewise-linear mapping, optionally through a power transform (sqrt).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousScale {
    domain: [f64; 2],
    range: [f64; 2],
    round: bool,
    exponent: f64,
}

impl ContinuousScale {
    fn new(exponent: f64) -> Self {
        Self { domain: [0.0, 1.0], range: [0.0, 1.0], round: false, exponent }
    }

    #[inline]
    fn transform(&self, x: f64) -> f64 {
        if self.exponent == 1.0 { x } else { x.signum() * x.abs().powf(self.exponent) }
    }

    #[inline]
    fn untransform(&self, x: f64) -> f64 {
        if self.exponent == 1.0 { x } else { x.signum() * x.abs().powf(1.0 / self.exponent) }
    }

    pub fn map(&self, x: f64) -> f64 {
        let d0 = self.transform(self.domain[0]);
        let d1 = self.transform(self.domain[1]);
        // Degenerate domain lands on the middle of the range.
        let u = if d1 != d0 { (self.transform(x) - d0) / (d1 - d0) } else { 0.5 };
        let v = self.range[0] * (1.0 - u) + self.range[1] * u;
        if self.round { v.round() } else { v }
    }

    pub fn invert(&self, px: f64) -> f64 {
        let [r0, r1] = self.range;
        let u = if r1 != r0 { (px - r0) / (r1 - r0) } else { 0.5 };
        let d0 = self.transform(self.domain[0]);
        let d1 = self.transform(self.domain[1]);
        self.untransform(d0 * (1.0 - u) + d1 * u)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequentialScale {
    domain: [f64; 2],
    unknown: Color,
}

impl SequentialScale {
    pub fn map(&self, x: f64) -> Color {
        let [d0, d1] = self.domain;
        // Zero-width domain lands on the middle of the ramp.
        let t = if d1 != d0 { (x - d0) / (d1 - d0) } else { 0.5 };
        if !t.is_finite() {
            return self.unknown;
        }
        colorous::VIRIDIS.eval_continuous(t.clamp(0.0, 1.0)).into()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoricalScale {
    domain: Vec<String>,
    unknown: Color,
}

impl CategoricalScale {
    pub fn map(&self, key: &str) -> Color {
        match self.domain.iter().position(|d| d == key) {
            Some(i) => colorous::PAIRED[i % colorous::PAIRED.len()].into(),
            None => self.unknown,
        }
    }
}

/// Ignores its domain; always yields the midpoint of the last range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantScale {
    range: [f64; 2],
}

#[derive(Clone, Debug, PartialEq)]
pub enum Scale {
    Constant(ConstantScale),
    Linear(ContinuousScale),
    Sqrt(ContinuousScale),
    Sequential(SequentialScale),
    Categorical(CategoricalScale),
}

impl Scale {
    pub fn new(kind: ScaleKind) -> Self {
        let unknown = Color::from_rgb(0x99, 0x99, 0x99);
        match kind {
            ScaleKind::Constant => Scale::Constant(ConstantScale { range: [0.0, 1.0] }),
            ScaleKind::Linear => Scale::Linear(ContinuousScale::new(1.0)),
            ScaleKind::Sqrt => Scale::Sqrt(ContinuousScale::new(0.5)),
            ScaleKind::Sequential => Scale::Sequential(SequentialScale { domain: [0.0, 1.0], unknown }),
            ScaleKind::Categorical => Scale::Categorical(CategoricalScale { domain: Vec::new(), unknown }),
        }
    }

    pub fn constant() -> Self { Scale::new(ScaleKind::Constant) }

    pub fn kind(&self) -> ScaleKind {
        match self {
            Scale::Constant(_) => ScaleKind::Constant,
            Scale::Linear(_) => ScaleKind::Linear,
            Scale::Sqrt(_) => ScaleKind::Sqrt,
            Scale::Sequential(_) => ScaleKind::Sequential,
            Scale::Categorical(_) => ScaleKind::Categorical,
        }
    }

    pub fn is_constant(&self) -> bool { matches!(self, Scale::Constant(_)) }

    /// True when the domain is a list of categories rather than a numeric interval.
    pub fn is_discrete(&self) -> bool { matches!(self, Scale::Categorical(_)) }

    pub fn domain(&self) -> Option<Domain> {
        match self {
            Scale::Constant(_) => None,
            Scale::Linear(s) | Scale::Sqrt(s) => Some(Domain::Continuous(s.domain)),
            Scale::Sequential(s) => Some(Domain::Continuous(s.domain)),
            Scale::Categorical(s) => Some(Domain::Discrete(s.domain.clone())),
        }
    }

    /// Pixel range, when the scale has one.
    pub fn range(&self) -> Option<[f64; 2]> {
        match self {
            Scale::Constant(s) => Some(s.range),
            Scale::Linear(s) | Scale::Sqrt(s) => Some(s.range),
            Scale::Sequential(_) | Scale::Categorical(_) => None,
        }
    }

    /// New scale with `domain`. Mismatched domain shapes and constant scales are no-ops.
    pub fn with_domain(&self, domain: Domain) -> Scale {
        let mut next = self.clone();
        match (&mut next, domain) {
            (Scale::Linear(s) | Scale::Sqrt(s), Domain::Continuous(d)) => s.domain = d,
            (Scale::Sequential(s), Domain::Continuous(d)) => s.domain = d,
            (Scale::Categorical(s), Domain::Discrete(d)) => s.domain = d,
            _ => {}
        }
        next
    }

    /// New scale with pixel `range`; color scales ignore it.
    pub fn with_range(&self, range: [f64; 2]) -> Scale {
        self.with_range_impl(range, false)
    }

    /// Like `with_range`, but outputs are rounded to whole pixels.
    pub fn with_range_round(&self, range: [f64; 2]) -> Scale {
        self.with_range_impl(range, true)
    }

    fn with_range_impl(&self, range: [f64; 2], round: bool) -> Scale {
        let mut next = self.clone();
        match &mut next {
            Scale::Constant(s) => s.range = range,
            Scale::Linear(s) | Scale::Sqrt(s) => {
                s.range = range;
                s.round = round;
            }
            Scale::Sequential(_) | Scale::Categorical(_) => {}
        }
        next
    }

    /// Color used for values outside a color scale's domain.
    pub fn with_unknown(&self, color: Color) -> Scale {
        let mut next = self.clone();
        match &mut next {
            Scale::Sequential(s) => s.unknown = color,
            Scale::Categorical(s) => s.unknown = color,
            _ => {}
        }
        next
    }

    pub fn apply_f64(&self, x: f64) -> Scaled {
        match self {
            Scale::Constant(s) => Scaled::Number((s.range[0] + s.range[1]) * 0.5),
            Scale::Linear(s) | Scale::Sqrt(s) => Scaled::Number(s.map(x)),
            Scale::Sequential(s) => Scaled::Color(s.map(x)),
            Scale::Categorical(s) => Scaled::Color(s.map(&Value::Number(x).to_string())),
        }
    }

    pub fn apply(&self, value: &Value) -> Scaled {
        match self {
            Scale::Categorical(s) => Scaled::Color(s.map(&value.to_string())),
            Scale::Sequential(s) => match value.as_f64() {
                Some(x) => Scaled::Color(s.map(x)),
                None => Scaled::Color(s.unknown),
            },
            _ => self.apply_f64(value.as_f64().unwrap_or(f64::NAN)),
        }
    }

    /// Pixel -> domain, for continuous pixel scales.
    pub fn invert(&self, px: f64) -> Option<f64> {
        match self {
            Scale::Linear(s) | Scale::Sqrt(s) => Some(s.invert(px)),
            _ => None,
        }
    }

    /// Roughly `count` nice tick values inside the domain. Empty for non-continuous scales.
    pub fn ticks(&self, count: f64) -> Vec<f64> {
        match self {
            Scale::Linear(s) | Scale::Sqrt(s) => nice_ticks(s.domain[0], s.domain[1], count),
            _ => Vec::new(),
        }
    }
}
