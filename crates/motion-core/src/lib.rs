// File: crates/motion-core/src/lib.rs
// Summary: Core library entry point; exports the data table, dimensions, scales and the chart engine.

pub mod error;
pub mod record;
pub mod series;
pub mod data_table;
pub mod geometry;
pub mod types;
pub mod theme;
pub mod grid;
pub mod scale;
pub mod dimension;
pub mod axis;
pub mod boxplot;
pub mod surface;
pub mod scene;
pub mod join;
pub mod scheduler;
pub mod chart;

pub use error::{ChartError, Result};
pub use record::{ColumnDescriptor, ColumnType, Record, Value};
pub use series::Series;
pub use data_table::{DataTable, Extent};
pub use geometry::{Point, Size};
pub use theme::{Color, Theme};
pub use scale::{Domain, Scale, ScaleKind, Scaled};
pub use dimension::{Dimension, DimensionName};
pub use boxplot::BoxPlotStats;
pub use surface::{Attr, DrawSurface, Geometry, Layer, PointerHandlers, Shape, ShapeKey, Style, Transition};
pub use scene::{PaintItem, Scene};
pub use scheduler::{FrameOutcome, FrameScheduler};
pub use chart::{Chart, ChartOptions};
