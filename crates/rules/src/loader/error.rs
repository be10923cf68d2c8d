//! Error types and load result structures for the rule definition loader.

use std::path::PathBuf;

/// Errors that can occur while loading rule definition files.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse/deserialization error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Definition is well-formed but unusable (empty or duplicate name).
    #[error("Invalid definition: {0}")]
    Invalid(String),
}

/// Result alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Outcome of loading a single definition file.
#[derive(Debug)]
pub struct LoadResult {
    /// Path to the file that was loaded.
    pub path: PathBuf,
    /// Status of the load attempt.
    pub status: LoadStatus,
}

/// Status of a single file load attempt.
#[derive(Debug)]
pub enum LoadStatus {
    /// Definition was successfully loaded.
    Loaded { name: String },
    /// File was skipped (dotfile, unsupported extension).
    Skipped { reason: String },
    /// Parse error or invalid definition.
    Failed { error: String },
}
