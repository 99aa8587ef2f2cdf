//! Comment dialects and their rewriting into Swift markup.

mod doxygen;

pub use doxygen::DoxygenFlavor;

use cswift_core::decl::DeclLookup;
use cswift_core::doc_block::DocCommentBlock;

/// A documentation dialect found in C headers.
pub trait DocFlavor: Send + Sync {
    /// Comment openers that mark a comment as documentation in this dialect.
    fn markers(&self) -> &'static [&'static str];

    /// Rewrite a comment's commands into Swift doc markup.
    fn transform(&self, comment: &DocCommentBlock, lookup: &DeclLookup) -> DocCommentBlock;
}
