//! Indentation-aware text writer for Swift source.

const INDENT: &str = "    ";

/// Accumulates Swift source, tracking the current indentation depth.
#[derive(Debug, Default)]
pub struct SyntaxStream {
    out: String,
    depth: usize,
}

impl SyntaxStream {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text, no indentation.
    pub fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Raw text followed by a newline.
    pub fn write_line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Indentation for a line whose content follows through [`write`](Self::write).
    pub fn pre_line(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
    }

    /// An indented line. Empty text gives an empty line with no trailing
    /// whitespace.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            self.pre_line();
        }
        self.write_line(text);
    }

    pub const fn indent(&mut self) {
        self.depth += 1;
    }

    pub const fn unindent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// `header` on its own line, `body` one level deeper, then `}`.
    pub fn block(&mut self, header: &str, body: impl FnOnce(&mut Self)) {
        self.line(header);
        self.nested("}", body);
    }

    /// Like [`block`](Self::block), but `header` continues the current line.
    pub fn inline_block(&mut self, header: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.write_line(header);
        self.nested(close, body);
    }

    fn nested(&mut self, close: &str, body: impl FnOnce(&mut Self)) {
        self.indent();
        body(self);
        self.unindent();
        self.line(close);
    }

    /// Write each item with `writer`, putting `separator` between them.
    pub fn with_separator<T>(
        &mut self,
        separator: &str,
        items: impl IntoIterator<Item = T>,
        mut writer: impl FnMut(&mut Self, T),
    ) {
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.write(separator);
            }
            writer(self, item);
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_blocks_indent_by_four() {
        let mut stream = SyntaxStream::new();
        stream.block("extension B2World {", |s| {
            s.block("func step() {", |s| s.line("b2World_Step(id)"));
        });
        assert_eq!(
            stream.finish(),
            "extension B2World {\n    func step() {\n        b2World_Step(id)\n    }\n}\n"
        );
    }

    #[test]
    fn inline_block_continues_the_line() {
        let mut stream = SyntaxStream::new();
        stream.pre_line();
        stream.write("let list = ");
        stream.inline_block("[", "]", |s| s.line("0, 1, 2"));
        assert_eq!(stream.finish(), "let list = [\n    0, 1, 2\n]\n");
    }

    #[test]
    fn separator_only_between_items() {
        let mut stream = SyntaxStream::new();
        stream.with_separator(" & ", ["A", "B", "C"], |s, item| s.write(item));
        assert_eq!(stream.as_str(), "A & B & C");
    }

    #[test]
    fn empty_lines_carry_no_indentation() {
        let mut stream = SyntaxStream::new();
        stream.indent();
        stream.line("a");
        stream.line("");
        stream.line("b");
        assert_eq!(stream.finish(), "    a\n\n    b\n");
    }
}
