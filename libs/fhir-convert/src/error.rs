//! Error types for conversion

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("CodeSystem {} has no concepts; nothing to include in the ValueSet", .system.as_deref().unwrap_or("<no url>"))]
    MissingConcepts { system: Option<String> },

    #[error("Code list {} contains no codes", .path.display())]
    EmptyCodeList { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
