//! # cswift-core
//!
//! Core data model for the cswift declaration synthesizer.
//!
//! This crate holds everything the later stages agree on:
//! - [`symbol`]: compound symbol names and their case algebra
//! - [`formatter`]: the configurable name formatting pipeline
//! - [`target_type`]: Swift type model with desugaring and structural equivalence
//! - [`c_ast`]: the read-only C AST arena produced by `cswift-parser`
//! - [`decl`]: declarations, the walker, and the C-name lookup
//! - [`doc_block`]: doc comment blocks attached to declarations
//! - [`merge`]: reconciliation of same-named declarations

pub mod c_ast;
pub mod decl;
pub mod doc_block;
pub mod error;
pub mod formatter;
pub mod merge;
pub mod symbol;
pub mod target_type;

pub use error::CoreError;
