// File: crates/demo/src/main.rs
// Summary: Demo loads a multi-series CSV, binds x/y/r/c to its columns, and plays the motion chart
// through a simulated frame clock, writing each painted frame to a PNG.

use anyhow::{Context, Result};
use motion_core::types::Insets;
use motion_core::{
    theme, Chart, ChartOptions, ColumnDescriptor, ColumnType, DataTable, FrameOutcome, Record, Size, Value,
};
use motion_render_skia::SkiaSurface;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Simulated display refresh.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // motion-demo [csv path] [frames] [theme]
    let mut args = std::env::args().skip(1);
    let raw = args.next().map(PathBuf::from).unwrap_or_else(default_csv);
    let frames = match args.next() {
        Some(s) => s.parse::<usize>().with_context(|| format!("invalid frame count '{s}'"))?,
        None => 120,
    };
    let theme = theme::find(&args.next().unwrap_or_else(|| "light".to_string()));

    let (path, used_alt) = resolve_path(&raw)?;
    info!("using input file: {}", path.display());
    if used_alt {
        info!("  (extension swapped between .csv/.cvs)");
    }

    let table = Arc::new(load_table(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?);
    if table.is_empty() {
        anyhow::bail!("no records loaded; check headers/delimiter.");
    }

    let options = ChartOptions {
        x_box_plot: true,
        y_box_plot: true,
        margins: Insets::new(8, 48, 40, 8),
        theme,
        ..ChartOptions::default()
    };
    let transition = options.transition;
    let surface = SkiaSurface::with_theme(Size::new(960.0, 600.0), &theme);
    let mut chart = Chart::new(table.clone(), surface, options)?;
    bind_columns(&mut chart, &table)?;

    let out_dir = out_dir_for(&path);
    let t0 = Instant::now();
    let mut painted = 0usize;
    let frames = frames.max(1);
    for i in 0..frames {
        let now = t0 + FRAME * i as u32;
        let rate = if frames > 1 { i as f64 / (frames - 1) as f64 } else { 0.0 };
        chart.set_progress(rate, true);
        match chart.on_frame(now) {
            FrameOutcome::Painted { .. } => {
                // Sample just before the next refresh so motion is visible between frames.
                let out = out_dir.join(format!("frame_{i:04}.png"));
                chart.surface().render_png(now + FRAME, &out)?;
                painted += 1;
            }
            FrameOutcome::Idle | FrameOutcome::Throttled => {}
            FrameOutcome::Stopped => break,
        }
    }

    let settled = t0 + FRAME * frames as u32 + transition;
    let final_png = out_dir.join("final.png");
    chart.surface().render_png(settled, &final_png)?;
    info!("painted {} of {} frames into {}", painted, frames, out_dir.display());
    info!("wrote {}", final_png.display());

    chart.dispose();
    Ok(())
}

/// x, y and radius take the numeric columns after the time column in order;
/// color takes the next text column, or falls back to a sequential scale on x.
fn bind_columns(chart: &mut Chart<SkiaSurface>, table: &DataTable) -> Result<()> {
    let time = table.time_column().name.as_str();
    let category = table.category_column().name.as_str();
    let numeric = table
        .columns()
        .iter()
        .filter(|c| c.kind == ColumnType::Number && c.name != time)
        .collect::<Vec<_>>();
    let text = table
        .columns()
        .iter()
        .filter(|c| c.kind == ColumnType::Text && c.name != category)
        .collect::<Vec<_>>();

    if let Some(c) = numeric.first() {
        chart.set_x(&c.name, "linear")?;
    }
    if let Some(c) = numeric.get(1) {
        chart.set_y(&c.name, "linear")?;
    }
    if let Some(c) = numeric.get(2) {
        chart.set_r(&c.name, "sqrt")?;
    }
    match (text.first(), numeric.first()) {
        (Some(c), _) => chart.set_c(&c.name, "categorical")?,
        (None, Some(c)) => chart.set_c(&c.name, "sequential")?,
        (None, None) => warn!("no column left to bind to color"),
    }
    Ok(())
}

fn default_csv() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.csv"))
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(p: &Path) -> Result<(PathBuf, bool)> {
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Output directory like target/out/<stem>/
fn out_dir_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(stem)
}

/// Load a headed CSV into a data table. Column types are inferred: a column whose
/// non-empty cells all parse as numbers is a number column, anything else is text.
fn load_table(path: &Path) -> Result<DataTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let rows = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    let columns = infer_columns(&headers, &rows);
    info!(
        "columns: {}",
        columns.iter().map(|c| format!("{}:{}", c.name, c.kind)).collect::<Vec<_>>().join(", ")
    );

    let records = rows.iter().map(|row| coerce_row(&columns, row)).collect::<Vec<_>>();
    Ok(DataTable::new(columns, records)?)
}

fn infer_columns(headers: &[String], rows: &[csv::StringRecord]) -> Vec<ColumnDescriptor> {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut cells = rows.iter().filter_map(|r| r.get(i)).filter(|s| !s.is_empty()).peekable();
            let any = cells.peek().is_some();
            let numeric = any && cells.all(|s| s.parse::<f64>().is_ok());
            let kind = if numeric { ColumnType::Number } else { ColumnType::Text };
            ColumnDescriptor::new(name.as_str(), label_of(name), kind)
        })
        .collect()
}

fn coerce_row(columns: &[ColumnDescriptor], row: &csv::StringRecord) -> Record {
    columns
        .iter()
        .enumerate()
        .map(|(i, col)| (col.name.clone(), coerce(col.kind, row.get(i).unwrap_or(""))))
        .collect()
}

fn coerce(kind: ColumnType, cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    match kind {
        ColumnType::Number => cell.parse::<f64>().map(Value::Number).unwrap_or(Value::Null),
        ColumnType::Text => Value::Text(cell.to_string()),
    }
}

/// "life_expectancy" -> "Life expectancy"
fn label_of(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
