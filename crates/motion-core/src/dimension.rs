// File: crates/motion-core/src/dimension.rs
// Summary: Visual dimensions (x, y, radius, color): a column binding plus its scale, as an immutable value.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, Result};
use crate::record::{ColumnDescriptor, ColumnType, Record, Value};
use crate::scale::{Domain, Scale, ScaleKind, Scaled};

static NULL: Value = Value::Null;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DimensionName {
    X,
    Y,
    R,
    C,
}

impl DimensionName {
    pub const ALL: [DimensionName; 4] = [DimensionName::X, DimensionName::Y, DimensionName::R, DimensionName::C];

    pub fn name(&self) -> &'static str {
        match self {
            DimensionName::X => "x",
            DimensionName::Y => "y",
            DimensionName::R => "r",
            DimensionName::C => "c",
        }
    }
}

impl fmt::Display for DimensionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for DimensionName {
    type Err = ChartError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DimensionName::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ChartError::InvalidDimension(s.to_string()))
    }
}

/// Which (dimension, scale, column type) triples may be bound.
/// The constant scale is handled separately: it is valid for every dimension.
const VALID_MAPPINGS: [(DimensionName, ScaleKind, ColumnType); 6] = [
    (DimensionName::X, ScaleKind::Linear, ColumnType::Number),
    (DimensionName::Y, ScaleKind::Linear, ColumnType::Number),
    (DimensionName::R, ScaleKind::Linear, ColumnType::Number),
    (DimensionName::R, ScaleKind::Sqrt, ColumnType::Number),
    (DimensionName::C, ScaleKind::Sequential, ColumnType::Number),
    (DimensionName::C, ScaleKind::Categorical, ColumnType::Text),
];

pub fn is_valid_mapping(dim: DimensionName, scale: ScaleKind, column_type: ColumnType) -> bool {
    VALID_MAPPINGS.iter().any(|&(d, s, t)| d == dim && s == scale && t == column_type)
}

/// A column bound to a scale. Never patched in place: every change builds a new value.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    label: String,
    column: Option<String>,
    scale: Scale,
}

impl Dimension {
    /// Unbound dimension; every record maps to the middle of the range.
    pub fn constant() -> Self {
        Self { label: String::new(), column: None, scale: Scale::constant() }
    }

    /// Validate the triple against the allow-list and build the bound dimension.
    pub fn bind(dim: DimensionName, column: &ColumnDescriptor, kind: ScaleKind) -> Result<Self> {
        if kind == ScaleKind::Constant {
            return Ok(Self::constant());
        }
        if !is_valid_mapping(dim, kind, column.kind) {
            return Err(ChartError::Incompatible {
                dimension: dim.to_string(),
                scale: kind.to_string(),
                column_type: column.kind,
            });
        }
        Ok(Self { label: column.label.clone(), column: Some(column.name.clone()), scale: Scale::new(kind) })
    }

    pub fn label(&self) -> &str { &self.label }

    pub fn column(&self) -> Option<&str> { self.column.as_deref() }

    pub fn scale(&self) -> &Scale { &self.scale }

    pub fn is_constant(&self) -> bool { self.scale.is_constant() }

    /// Unscaled column value; `Null` when unbound or missing.
    pub fn raw<'a>(&self, record: &'a Record) -> &'a Value {
        match &self.column {
            Some(c) => record.get(c),
            None => &NULL,
        }
    }

    pub fn raw_number(&self, record: &Record) -> Option<f64> { self.raw(record).as_f64() }

    pub fn scaled(&self, record: &Record) -> Scaled { self.scale.apply(self.raw(record)) }

    pub fn with_domain(&self, domain: Domain) -> Self {
        Self { scale: self.scale.with_domain(domain), ..self.clone() }
    }

    pub fn with_range(&self, range: [f64; 2]) -> Self {
        Self { scale: self.scale.with_range(range), ..self.clone() }
    }

    pub fn with_range_round(&self, range: [f64; 2]) -> Self {
        Self { scale: self.scale.with_range_round(range), ..self.clone() }
    }

    pub fn with_scale(&self, scale: Scale) -> Self {
        Self { scale, ..self.clone() }
    }
}

impl Default for Dimension {
    fn default() -> Self { Self::constant() }
}
