use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for the state, storage and configuration layers.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("No transaction at position {index} (month has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}
