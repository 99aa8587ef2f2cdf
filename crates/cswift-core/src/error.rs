//! Structural error types for cswift-core.
//!
//! Every variant here is fatal for a generation run: it signals a configuration
//! ambiguity or a generator defect, never a condition to retry or paper over.
//! Recoverable problems (an unmappable parameter, a missing comment file) are
//! expressed as `Option` at the call site instead.

use thiserror::Error;

use crate::decl::AccessLevel;
use crate::symbol::SymbolCasing;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Two same-named declarations whose kinds cannot be merged.
    #[error(
        "Found two symbols named '{name}' of incompatible kinds: {existing} (originally {existing_original}) and {incoming} (originally {incoming_original})"
    )]
    IncompatibleDeclarations {
        name: String,
        existing: &'static str,
        existing_original: String,
        incoming: &'static str,
        incoming_original: String,
    },

    /// Two extensions of the same type were generated with different access levels.
    #[error("Extensions of '{name}' disagree on access level: {first} and {second}")]
    AccessLevelMismatch {
        name: String,
        first: AccessLevel,
        second: AccessLevel,
    },

    /// Two same-named members disagree on a field that must match.
    #[error("Member '{member}' of '{owner}' has conflicting {field}: {first} and {second}")]
    MemberConflict {
        owner: String,
        member: String,
        field: &'static str,
        first: String,
        second: String,
    },

    /// A split pattern with fewer than two groups recurses forever.
    #[error("Split pattern '{pattern}' must have at least 2 capture groups, found {groups}")]
    InvalidSplitPattern { pattern: String, groups: usize },

    /// A `/regex/` capitalizer must capture exactly the span to uppercase.
    #[error("Capitalizer pattern '{pattern}' must have exactly 1 capture group, found {groups}")]
    InvalidCapitalizer { pattern: String, groups: usize },

    /// The casing names a parsing style, not an output style.
    #[error("Symbol casing '{0}' cannot be used to format names")]
    UnsupportedCasing(SymbolCasing),

    #[error("Invalid regular expression: {0}")]
    Regex(#[from] regex::Error),
}
