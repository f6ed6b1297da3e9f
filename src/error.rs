//! Error types for guide export

use std::path::PathBuf;

/// Errors raised while exporting a guide
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Filesystem read or write failed
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration was present but unusable
    #[error("config error: {0}")]
    Config(String),

    /// YAML configuration could not be parsed
    #[error("invalid YAML in {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Manifest could not be serialized
    #[error("failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used by the library modules
pub type Result<T> = std::result::Result<T, ExportError>;

impl ExportError {
    /// Wrap a `std::io::Error` with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
