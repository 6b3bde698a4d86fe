//! Error types for the vanishing-notes core
//!
//! All errors use thiserror for structured error handling. Most recoverable
//! conditions (corrupt blobs, legacy records, unknown note ids) never surface
//! here: they collapse to empty defaults or silent no-ops instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Record store error: {0}")]
    RecordStore(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
