//! Error types for cswift-emit.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory for {file} must have alphanumeric path components, found '{component}'")]
    InvalidPathComponent { file: String, component: String },

    #[error("Invalid directory pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
