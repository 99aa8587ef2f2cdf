//! Editable selection over a comment buffer.

use regex::Regex;

/// A `[start, end)` byte range over an owned buffer that can be grown and
/// then removed or replaced.
///
/// The range only ever grows forward from `start`; after a replacement the
/// selection collapses to the inserted text.
#[derive(Debug, Clone)]
pub struct Cursor {
    buffer: String,
    start: usize,
    len: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(buffer: impl Into<String>, start: usize) -> Self {
        let buffer = buffer.into();
        let start = start.min(buffer.len());
        Self { buffer, start, len: 0 }
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn selection(&self) -> &str {
        &self.buffer[self.start..self.end()]
    }

    /// Move the end of the selection to `end`. Offsets before `start` are
    /// ignored.
    pub fn extend_to(&mut self, end: usize) {
        if end >= self.start {
            self.len = end.min(self.buffer.len()) - self.start;
        }
    }

    /// Grow over a match of `pattern` that begins exactly at the current end
    /// and return the matched text.
    pub fn extend(&mut self, pattern: &Regex) -> Option<String> {
        let end = self.end();
        let found = pattern.find_at(&self.buffer, end).filter(|m| m.start() == end)?;
        let text = found.as_str().to_string();
        self.extend_to(found.end());
        Some(text)
    }

    /// Grow over horizontal and vertical whitespace.
    pub fn extend_whitespace(&mut self) {
        let end = self.end();
        let skipped = self.buffer[end..]
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(self.buffer.len() - end);
        self.extend_to(end + skipped);
    }

    /// Grow through the next newline, inclusive, or to the end of the buffer
    /// when there is none.
    pub fn extend_line(&mut self) {
        let end = self.end();
        let found = self.buffer[end..].find('\n').map_or(self.buffer.len(), |i| end + i + 1);
        self.extend_to(found);
    }

    /// Delete the selection.
    pub fn remove(&mut self) {
        self.replace(None);
    }

    /// Replace the selection with `text` (or nothing) and select the
    /// inserted text.
    pub fn replace(&mut self, text: Option<&str>) {
        let text = text.unwrap_or_default();
        let end = self.end();
        self.buffer.replace_range(self.start..end, text);
        self.len = text.len();
    }

    #[must_use]
    pub fn into_buffer(self) -> String {
        self.buffer
    }
}
