// File: crates/motion-core/src/series.rs
// Summary: Per-category series: time-ordered nodes and linear interpolation/extrapolation over them.
// Notes:
// - Nodes are stably sorted by time; duplicate times collapse to the last record seen.
// - Numeric fields lerp as a*(1-u) + b*u so exact nodes reproduce their record bit-for-bit.

use crate::record::{Record, Value};

#[derive(Clone, Debug)]
pub struct Series {
    key: String,
    times: Vec<f64>,
    records: Vec<Record>,
}

impl Series {
    /// Build a series from (time, record) rows in input order.
    pub fn from_rows(key: impl Into<String>, mut rows: Vec<(f64, Record)>) -> Self {
        rows.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut times: Vec<f64> = Vec::with_capacity(rows.len());
        let mut records: Vec<Record> = Vec::with_capacity(rows.len());
        for (t, rec) in rows {
            match (times.last(), records.last_mut()) {
                // last wins
                (Some(&prev), Some(slot)) if prev == t => *slot = rec,
                _ => {
                    times.push(t);
                    records.push(rec);
                }
            }
        }
        Self { key: key.into(), times, records }
    }

    pub fn key(&self) -> &str { &self.key }

    /// Time nodes, ascending and duplicate-free.
    pub fn times(&self) -> &[f64] { &self.times }

    pub fn records(&self) -> &[Record] { &self.records }

    pub fn len(&self) -> usize { self.times.len() }

    pub fn is_empty(&self) -> bool { self.times.is_empty() }

    /// Evaluate the series at `time`. Between nodes numeric fields interpolate;
    /// outside the node range the nearest segment extrapolates without clamping.
    /// A single-node series always yields its only record.
    pub fn value_at(&self, time: f64, category: &str) -> Option<Record> {
        match self.times.len() {
            0 => None,
            1 => Some(self.records[0].clone()),
            n => {
                let i = self.times.partition_point(|&t| t <= time).saturating_sub(1).min(n - 2);
                let (t0, t1) = (self.times[i], self.times[i + 1]);
                let u = (time - t0) / (t1 - t0);
                Some(lerp_record(&self.records[i], &self.records[i + 1], u, category))
            }
        }
    }
}

/// Component-wise interpolation between two records.
/// The category field is carried from `a`; fields that are not numeric on both
/// sides take the value of the nearer node (ties go to `a`).
fn lerp_record(a: &Record, b: &Record, u: f64, category: &str) -> Record {
    let nearer = if u <= 0.5 { a } else { b };
    let mut out = Record::new();
    for (name, va) in a.iter() {
        let v = if name == category {
            va.clone()
        } else {
            match (va, b.get(name)) {
                (Value::Number(x), Value::Number(y)) => Value::Number(x * (1.0 - u) + y * u),
                _ => nearer.get(name).clone(),
            }
        };
        out.set(name, v);
    }
    for (name, _) in b.iter() {
        if !a.contains(name) {
            out.set(name, nearer.get(name).clone());
        }
    }
    out
}
