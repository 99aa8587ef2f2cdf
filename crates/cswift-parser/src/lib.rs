//! # cswift-parser
//!
//! C front-end for cswift. Headers are parsed with ast-grep's tree-sitter C
//! grammar and lowered into a [`CAst`] arena:
//!
//! - declarations, typedefs and function definitions become `Decl`/`Typedef`
//!   nodes with their declarator chain (`PtrDecl`, `ArrayDecl`, `FuncDecl`)
//!   wrapping a `TypeDecl`;
//! - struct and enum bodies are kept on the first declarator that introduces
//!   them;
//! - preprocessor conditionals and `extern "C"` blocks are transparent.
//!
//! Input is expected to be preprocessed. Any syntax error fails the parse.

pub mod error;
mod lower;

use std::path::Path;

use ast_grep_language::{LanguageExt, SupportLang};
use cswift_core::c_ast::CAst;

pub use error::ParserError;

/// Parse C `source`, recording `file` in every node's coordinate.
///
/// # Errors
///
/// Returns [`ParserError::ParseFailed`] with the line of the first syntax
/// error.
pub fn parse_source(source: &str, file: impl AsRef<Path>) -> Result<CAst, ParserError> {
    let root = SupportLang::C.ast_grep(source);
    let ast = lower::lower(&root.root(), file.as_ref())?;
    tracing::debug!(file = %file.as_ref().display(), nodes = ast.len(), "parsed C header");
    Ok(ast)
}

/// Read and parse the header at `path`.
///
/// # Errors
///
/// Returns [`ParserError::Io`] if the file cannot be read, or
/// [`ParserError::ParseFailed`] on a syntax error.
pub fn parse_file(path: impl AsRef<Path>) -> Result<CAst, ParserError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&source, path)
}
