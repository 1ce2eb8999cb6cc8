use std::path::PathBuf;
use thiserror::Error;

/// Error type for reading edge list files
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read edge list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON edge list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML edge list: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A line of a text edge list is not of the form `source -> target`.
    #[error("Invalid link on line {line}: {content:?}")]
    InvalidLine { line: usize, content: String },

    /// The file extension does not name a known edge list format.
    #[error("Unsupported edge list format: {0:?} (expected .json, .yml, .yaml or .txt)")]
    UnsupportedFormat(PathBuf),
}
