//! Ошибки построения конфигурации признаков

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatConfigError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{path}: line {line} has {found} fields, expected {expected}")]
    SchemaMismatch {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Column '{column}' has non-numeric value '{value}' at line {line}")]
    InvalidNumber {
        column: String,
        value: String,
        line: u64,
    },

    #[error("Column '{0}' has no numeric values")]
    EmptyColumn(String),

    #[error("Invalid schema: {0}")]
    Config(String),

    #[error("No numeric range computed for column '{0}'")]
    MissingRange(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeatConfigError>;
