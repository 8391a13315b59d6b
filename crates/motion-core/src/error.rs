// File: crates/motion-core/src/error.rs
// Summary: Configuration error taxonomy shared by the data table and chart engine.

use crate::record::ColumnType;

/// Every failure the core can report. All of them are caller misuse
/// (bad column roles, unknown names, incompatible bindings); none is retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("column descriptors should have at least one string column")]
    MissingCategoryColumn,
    #[error("column descriptors should have at least one number column")]
    MissingTimeColumn,
    #[error("unknown column name: {0}")]
    UnknownColumn(String),
    #[error("column {0} has no numeric values")]
    EmptyColumn(String),
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("invalid scale: {0}")]
    InvalidScale(String),
    #[error("incompatible dimension \"{dimension}\", scale \"{scale}\", and type \"{column_type}\"")]
    Incompatible {
        dimension: String,
        scale: String,
        column_type: ColumnType,
    },
    #[error("draw surface is not empty")]
    SurfaceNotEmpty,
}

pub type Result<T> = std::result::Result<T, ChartError>;
