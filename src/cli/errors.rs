use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid year range: {start}..={end}. year-start must not exceed year-end")]
    InvalidYearRange { start: i32, end: i32 },
}
