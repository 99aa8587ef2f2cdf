//! Documentation comment text with its source position.

use std::path::PathBuf;

use serde::Serialize;

/// A doc comment as found in (or merged from) source.
///
/// `line_count` always equals the number of `\n` in `text` plus one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DocCommentBlock {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    text: String,
    line_count: usize,
}

impl DocCommentBlock {
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            file: file.into(),
            line,
            column,
            line_count: count_lines(&text),
            text,
        }
    }

    /// A block with no meaningful source position.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(PathBuf::new(), 0, 0, text)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    /// One past the last line this block spans.
    #[must_use]
    pub const fn end_line(&self) -> usize {
        self.line + self.line_count
    }

    #[must_use]
    pub const fn contains_line(&self, line: usize) -> bool {
        line >= self.line && line < self.end_line()
    }

    #[must_use]
    pub const fn is_multi_lined(&self) -> bool {
        self.line_count > 1
    }

    pub fn lines(&self) -> std::str::Split<'_, char> {
        self.text.split('\n')
    }

    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(self.file.clone(), self.line, self.column, text)
    }

    /// Join two blocks with a newline. The position of the block starting
    /// earlier wins.
    #[must_use]
    pub fn merging(&self, other: &Self) -> Self {
        let (first, second) = if other.line < self.line { (other, self) } else { (self, other) };
        first.with_text(format!("{}\n{}", first.text, second.text))
    }

    /// Doc-comment merge rule used when reconciling declarations.
    ///
    /// Identical texts collapse to one, differing texts are joined by a blank
    /// line, and a missing side yields the other.
    #[must_use]
    pub fn merge(first: Option<&Self>, second: Option<&Self>) -> Option<Self> {
        match (first, second) {
            (Some(a), Some(b)) if a.text == b.text => Some(a.clone()),
            (Some(a), Some(b)) => Some(a.with_text(format!("{}\n\n{}", a.text, b.text))),
            (Some(a), None) => Some(a.clone()),
            (None, Some(b)) => Some(b.clone()),
            (None, None) => None,
        }
    }

    /// Fold consecutive source blocks into one, in the order given.
    #[must_use]
    pub fn merge_list(blocks: &[Self]) -> Option<Self> {
        let (first, rest) = blocks.split_first()?;
        Some(rest.iter().fold(first.clone(), |acc, block| acc.merging(block)))
    }

    /// Strip the shallowest leading whitespace shared by non-blank lines.
    ///
    /// Single-line blocks are returned unchanged.
    #[must_use]
    pub fn normalize_indentation(&self) -> Self {
        if !self.is_multi_lined() {
            return self.clone();
        }
        let indent = self
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(leading_whitespace)
            .min()
            .unwrap_or(0);
        let text = self
            .lines()
            .map(|line| strip_leading_whitespace(line, indent))
            .collect::<Vec<_>>()
            .join("\n");
        self.with_text(text)
    }

    /// Drop blank lines at the start and end of the block.
    #[must_use]
    pub fn trim_blank_lines(&self) -> Self {
        let lines: Vec<&str> = self.lines().collect();
        let start = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map_or(start, |i| i + 1);
        self.with_text(lines[start..end.max(start)].join("\n"))
    }
}

fn count_lines(text: &str) -> usize {
    text.matches('\n').count() + 1
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn strip_leading_whitespace(line: &str, max: usize) -> &str {
    let cut = line
        .char_indices()
        .take(max)
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    &line[cut..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(line: usize, text: &str) -> DocCommentBlock {
        DocCommentBlock::new("box2d.h", line, 1, text)
    }

    #[test]
    fn line_count_tracks_newlines() {
        let b = block(10, "a\nb\nc");
        assert_eq!(b.line_count(), 3);
        assert_eq!(b.end_line(), 13);
        assert!(b.contains_line(12));
        assert!(!b.contains_line(13));
        assert_eq!(b.with_text("x").line_count(), 1);
    }

    #[test]
    fn indentation_normalizes_to_shallowest() {
        let b = block(1, "    first\n        nested\n    last");
        assert_eq!(b.normalize_indentation().text(), "first\n    nested\nlast");
    }

    #[test]
    fn indentation_ignores_blank_lines() {
        let b = block(1, "  a\n\n    b");
        assert_eq!(b.normalize_indentation().text(), "a\n\n  b");
    }

    #[test]
    fn single_line_is_not_normalized() {
        let b = block(1, "   lone");
        assert_eq!(b.normalize_indentation().text(), "   lone");
    }

    #[test]
    fn trims_blank_lines_at_both_ends() {
        let b = block(1, "\n  \nbody\nmore\n\n");
        assert_eq!(b.trim_blank_lines().text(), "body\nmore");
        assert_eq!(block(1, "\n \n").trim_blank_lines().text(), "");
    }

    #[test]
    fn merge_rule() {
        let a = block(1, "Gets the gravity.");
        let b = block(5, "Sets the gravity.");

        assert_eq!(
            DocCommentBlock::merge(Some(&a), Some(&a.clone())).unwrap().text(),
            "Gets the gravity."
        );
        assert_eq!(
            DocCommentBlock::merge(Some(&a), Some(&b)).unwrap().text(),
            "Gets the gravity.\n\nSets the gravity."
        );
        assert_eq!(DocCommentBlock::merge(None, Some(&b)), Some(b.clone()));
        assert_eq!(DocCommentBlock::merge(None, None), None);
    }

    #[test]
    fn merge_list_keeps_earliest_position() {
        let merged = DocCommentBlock::merge_list(&[block(3, "one"), block(4, "two")]).unwrap();
        assert_eq!(merged.line, 3);
        assert_eq!(merged.text(), "one\ntwo");
        assert_eq!(merged.line_count(), 2);
        assert!(DocCommentBlock::merge_list(&[]).is_none());
    }
}
