// File: crates/motion-core/src/boxplot.rs
// Summary: Five-number summary, Tukey fences and outlier classification for marginal box-plots.

/// Quantile of an ascending slice by linear interpolation between order statistics.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || p.is_nan() { return None; }
    if p <= 0.0 || n == 1 { return Some(sorted[0]); }
    if p >= 1.0 { return Some(sorted[n - 1]); }
    let i = (n - 1) as f64 * p;
    let i0 = i.floor() as usize;
    let v0 = sorted[i0];
    let v1 = sorted[i0 + 1];
    Some(v0 + (v1 - v0) * (i - i0 as f64))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxPlotStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value not below `q1 - 1.5 * iqr`.
    pub whisker_low: f64,
    /// Largest value not above `q3 + 1.5 * iqr`.
    pub whisker_high: f64,
}

impl BoxPlotStats {
    /// Summary of the finite values; `None` when there are none.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted = values.into_iter().filter(|v| v.is_finite()).collect::<Vec<_>>();
        if sorted.is_empty() { return None; }
        sorted.sort_by(f64::total_cmp);

        let q = |p: f64| quantile_sorted(&sorted, p);
        let (min, q1, median, q3, max) = (q(0.0)?, q(0.25)?, q(0.5)?, q(0.75)?, q(1.0)?);
        let iqr = q3 - q1;
        let lo_fence = q1 - iqr * 1.5;
        let hi_fence = q3 + iqr * 1.5;
        let whisker_low = sorted.iter().copied().find(|&v| v >= lo_fence).unwrap_or(min);
        let whisker_high = sorted.iter().rev().copied().find(|&v| v <= hi_fence).unwrap_or(max);
        Some(Self { min, q1, median, q3, max, whisker_low, whisker_high })
    }

    pub fn iqr(&self) -> f64 { self.q3 - self.q1 }

    /// Values outside the whisker range are drawn as outliers.
    pub fn is_outlier(&self, v: f64) -> bool {
        !(self.whisker_low <= v && v <= self.whisker_high)
    }
}
