// File: crates/motion-core/src/types.rs
// Summary: Shared layout constants (radii, opacities, box-plot strip sizes) and margins.

use std::time::Duration;

/// Default surface width in pixels.
pub const WIDTH: f32 = 960.0;
/// Default surface height in pixels.
pub const HEIGHT: f32 = 600.0;

pub const DATA_CIRCLE_OPACITY: f32 = 0.9;
pub const DATA_CIRCLE_MIN_R: f64 = 2.0;
pub const DATA_CIRCLE_MAX_R_RATIO: f64 = 0.05;
pub const DATA_CIRCLE_STROKE_WIDTH: f32 = 0.5;
pub const DATA_LABEL_SIZE: f32 = 11.0;

pub const GRID_PIXELS_PER_TICK: f64 = 100.0;
pub const GRID_STROKE_OPACITY: f32 = 0.5;
pub const AXIS_TEXT_SIZE: f32 = 10.0;

pub const BOXPLOT_SIZE: f32 = 20.0;
pub const BOXPLOT_PADDING: f32 = 4.0;
pub const BOXPLOT_STROKE_WIDTH: f32 = 0.5;
pub const BOXPLOT_DOT_R: f32 = 2.0;
pub const BOXPLOT_OUTLIER_R: f32 = 3.5;
pub const BOXPLOT_DOT_OPACITY: f32 = 0.3;
pub const BOXPLOT_OUTLIER_OPACITY: f32 = 0.6;

/// Minimum spacing between two paints.
pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(10);
/// Duration of animated attribute transitions.
pub const TRANSITION: Duration = Duration::from_millis(250);

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}
