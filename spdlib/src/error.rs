//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpdError {
    /// Номер счёта (или сумма) не подходит для кодирования.
    #[error("Format error: {0}")]
    Format(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, SpdError>;
