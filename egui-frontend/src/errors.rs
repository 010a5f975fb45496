//! Error types for the expense timeline frontend.

use std::path::PathBuf;
use shared::{MonthId, MonthIdError};

#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("Month {id} cannot be charted: {source}")]
    InvalidMonth { id: MonthId, source: MonthIdError },
    #[error("Failed to read config {path}: {source}")]
    ConfigRead { path: PathBuf, source: std::io::Error },
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
    #[error("Failed to read expense data {path}: {source}")]
    DataRead { path: PathBuf, source: std::io::Error },
    #[error("Invalid expense data: {0}")]
    DataParse(#[from] serde_json::Error),
    #[error("Expense data contains no months")]
    NoMonths,
}
