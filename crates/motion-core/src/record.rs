// File: crates/motion-core/src/record.rs
// Summary: Column descriptors, field values and records consumed by the data table.

use indexmap::IndexMap;
use std::fmt;

/// Declared type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Number,
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Number => f.write_str("number"),
            ColumnType::Text => f.write_str("string"),
        }
    }
}

/// Immutable description of one column, supplied at table construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub label: String,
    pub kind: ColumnType,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: ColumnType) -> Self {
        Self { name: name.into(), label: label.into(), kind }
    }
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, ColumnType::Number)
    }
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, ColumnType::Text)
    }
}

/// A single field value. Numbers must already be coerced before records reach the table.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric coercion used for extents: text that parses as a number counts,
    /// null and NaN do not.
    pub fn coerce_f64(&self) -> Option<f64> {
        let v = match self {
            Value::Number(n) => *n,
            Value::Text(s) => s.trim().parse::<f64>().ok()?,
            Value::Null => return None,
        };
        if v.is_nan() { None } else { Some(v) }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self { Value::Number(v) }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self { Value::Number(v as f64) }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self { Value::Text(v.to_string()) }
}

impl From<String> for Value {
    fn from(v: String) -> Self { Value::Text(v) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}

static NULL: Value = Value::Null;

/// Mapping from column name to value. Field order follows insertion.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Field by name; missing fields read as `Value::Null`.
    pub fn get(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&NULL)
    }

    pub fn number(&self, name: &str) -> Option<f64> { self.get(name).as_f64() }

    pub fn text(&self, name: &str) -> Option<&str> { self.get(name).as_str() }

    pub fn contains(&self, name: &str) -> bool { self.fields.contains_key(name) }

    pub fn len(&self) -> usize { self.fields.len() }

    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
