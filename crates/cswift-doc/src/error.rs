//! Doc-comment error types.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DocError {
    #[error("Failed to read comment source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid doc-comment pattern: {0}")]
    Regex(#[from] regex::Error),
}
