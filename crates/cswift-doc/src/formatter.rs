//! Final whitespace cleanup applied after flavor rewriting.

use cswift_core::doc_block::DocCommentBlock;

/// Multi-line comments are re-indented to their shallowest line and trimmed
/// of blank edge lines; single-line comments lose their leading whitespace.
#[must_use]
pub fn format_comment(comment: &DocCommentBlock) -> DocCommentBlock {
    if comment.is_multi_lined() {
        comment.normalize_indentation().trim_blank_lines()
    } else {
        comment.with_text(comment.text().trim_start())
    }
}
