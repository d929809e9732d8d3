//! Error types for parking-fee

use thiserror::Error;

/// Reasons a fee request is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeeError {
    #[error("Invalid duration: {0} (must be a finite number of hours greater than zero)")]
    InvalidDuration(f64),

    #[error("Invalid vehicle category: {0:?} (expected car, motorcycle or bus)")]
    InvalidCategory(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fee rejected: {0}")]
    Fee(#[from] FeeError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
