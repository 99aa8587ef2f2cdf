//! Parser error types for cswift-parser.

use std::path::PathBuf;

/// Errors raised while reading or lowering a C header.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {}:{line}: unexpected `{snippet}`", .file.display())]
    ParseFailed {
        file: PathBuf,
        line: usize,
        snippet: String,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
