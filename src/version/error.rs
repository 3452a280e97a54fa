use std::path::PathBuf;

use thiserror::Error;

/// Caller contract violations on [`VersionTree`](crate::version::tree::VersionTree)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionTreeError {
    #[error("Key path must contain at least one key")]
    EmptyKeyPath,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid version tree JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported version file format: {0:?} (expected .json or .properties)")]
    UnsupportedFormat(PathBuf),
}
