// File: crates/motion-core/src/data_table.rs
// Summary: Data table: column role classification, extents, and per-series snapshots at arbitrary times.

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use crate::error::{ChartError, Result};
use crate::record::{ColumnDescriptor, ColumnType, Record};
use crate::series::Series;

/// `[min, max]` of a numeric column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub const fn new(min: f64, max: f64) -> Self { Self { min, max } }

    /// Expand both ends by `(max - min) * ratio`. A degenerate extent stays degenerate.
    pub fn padded(&self, ratio: f64) -> Self {
        if ratio == 0.0 { return *self; }
        let pad = (self.max - self.min) * ratio;
        Self { min: self.min - pad, max: self.max + pad }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn as_array(&self) -> [f64; 2] { [self.min, self.max] }
}

/// Immutable, multi-series, time-stamped dataset.
///
/// The first `Text` column groups records into series, the first `Number`
/// column is the interpolation variable. Built once; share it with `Arc`.
#[derive(Clone, Debug)]
pub struct DataTable {
    columns: Vec<ColumnDescriptor>,
    column_index: FxHashMap<String, usize>,
    records: Vec<Record>,
    category: usize,
    time: usize,
    series: Vec<Series>,
}

impl DataTable {
    pub fn new(columns: Vec<ColumnDescriptor>, records: Vec<Record>) -> Result<Self> {
        let column_index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect::<FxHashMap<_, _>>();

        let category = columns
            .iter()
            .position(|c| c.kind == ColumnType::Text)
            .ok_or(ChartError::MissingCategoryColumn)?;
        let time = columns
            .iter()
            .position(|c| c.kind == ColumnType::Number)
            .ok_or(ChartError::MissingTimeColumn)?;

        let category_name = columns[category].name.as_str();
        let time_name = columns[time].name.as_str();

        // Group by category value, series in first-seen order.
        let mut slots: FxHashMap<String, usize> = FxHashMap::default();
        let mut groups: Vec<(String, Vec<(f64, Record)>)> = Vec::new();
        let mut skipped = 0usize;
        for rec in &records {
            let Some(t) = rec.get(time_name).as_f64().filter(|t| !t.is_nan()) else {
                skipped += 1;
                continue;
            };
            let key = rec.get(category_name).to_string();
            let slot = *slots.entry(key.clone()).or_insert_with(|| {
                groups.push((key, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push((t, rec.clone()));
        }
        if skipped > 0 {
            warn!("skipped {} records without a numeric '{}' value", skipped, time_name);
        }

        let series = groups
            .into_iter()
            .map(|(key, rows)| Series::from_rows(key, rows))
            .collect::<Vec<_>>();

        info!(
            "data table: {} records, {} series, category='{}', time='{}'",
            records.len(),
            series.len(),
            category_name,
            time_name
        );

        Ok(Self { columns, column_index, records, category, time, series })
    }

    pub fn columns(&self) -> &[ColumnDescriptor] { &self.columns }

    pub fn records(&self) -> &[Record] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn category_column(&self) -> &ColumnDescriptor { &self.columns[self.category] }

    pub fn time_column(&self) -> &ColumnDescriptor { &self.columns[self.time] }

    pub fn series(&self) -> &[Series] { &self.series }

    /// Category keys in series order.
    pub fn series_keys(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.key())
    }

    pub fn column_type(&self, name: &str) -> Result<&ColumnDescriptor> {
        self.column_index
            .get(name)
            .map(|&i| &self.columns[i])
            .ok_or_else(|| ChartError::UnknownColumn(name.to_string()))
    }

    /// `[min, max]` of `name` across all records, optionally padded by `padding_ratio`.
    pub fn extent(&self, name: &str, padding_ratio: f64) -> Result<Extent> {
        self.column_type(name)?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut any = false;
        for v in self.records.iter().filter_map(|r| r.get(name).coerce_f64()) {
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
        if !any {
            return Err(ChartError::EmptyColumn(name.to_string()));
        }
        Ok(Extent::new(min, max).padded(padding_ratio))
    }

    pub fn time_extent(&self) -> Result<Extent> {
        self.extent(&self.time_column().name, 0.0)
    }

    /// Sorted, duplicate-free time values across all records.
    pub fn time_values(&self) -> Vec<f64> {
        let name = &self.time_column().name;
        let mut out = self
            .records
            .iter()
            .filter_map(|r| r.get(name).coerce_f64())
            .collect::<Vec<_>>();
        out.sort_by(f64::total_cmp);
        out.dedup();
        out
    }

    /// Distinct string forms of a column, in first-seen order.
    pub fn distinct_values(&self, name: &str) -> Result<Vec<String>> {
        self.column_type(name)?;
        let mut seen = rustc_hash::FxHashSet::default();
        let mut out = Vec::new();
        for rec in &self.records {
            let v = rec.get(name).to_string();
            if seen.insert(v.clone()) {
                out.push(v);
            }
        }
        Ok(out)
    }

    /// One record per series evaluated at `time`, in series order.
    pub fn values_at(&self, time: f64) -> Vec<Record> {
        let category = self.category_column().name.as_str();
        self.series
            .iter()
            .filter_map(|s| s.value_at(time, category))
            .collect()
    }
}
