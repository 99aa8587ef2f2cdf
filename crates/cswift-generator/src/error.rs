//! Error types for declaration generation.

use cswift_core::CoreError;
use cswift_doc::DocError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Doc(#[from] DocError),

    #[error("Invalid {category} filter '{pattern}': {source}")]
    InvalidFilter {
        category: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
