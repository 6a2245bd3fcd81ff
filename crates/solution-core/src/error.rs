/// Error types shared by the matching engine and the servers built on it.
///
/// Catalog errors are recoverable: callers decide whether to degrade to an empty
/// catalog or keep a previous one. Application-specific errors should be defined
/// in each server crate and wrap `CoreError` via `#[from]`.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("failed to read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog {path}: {source}")]
    CatalogFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("validation error: {0}")]
    Validation(String),
}
