//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, CSV, image, and raster reader errors, and provides
//! semantic variants for table layout violations.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Raster reader error: {0}")]
    Raster(#[from] crate::io::RasterError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Malformed table {path}: {reason}")]
    MalformedTable { path: String, reason: String },

    #[error("Column mismatch: expected {expected:?}, got {got:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        got: Vec<String>,
    },

    #[error("Row count mismatch: expected {expected}, got {got}")]
    RowMismatch { expected: usize, got: usize },

    #[error("Cell count mismatch: expected {expected}, got {got}")]
    CellMismatch { expected: usize, got: usize },

    #[error("No per-year tables found under: {0}")]
    NoYearData(String),

    #[error("Invalid year range: {start}..={end}")]
    InvalidYearRange { start: i32, end: i32 },
}
