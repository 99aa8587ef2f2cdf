//! Comment stripping for JSON-with-comments files.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Default,
    LineComment,
    BlockComment,
    String,
}

/// Blank out `//` and `/* */` comments so the result parses as plain JSON.
///
/// Every comment character becomes a space and newlines are kept, so parse
/// errors still point at the original line and column.
#[must_use]
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut state = State::Default;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Default => match (c, chars.peek()) {
                ('"', _) => {
                    state = State::String;
                    out.push(c);
                }
                ('/', Some('/')) => {
                    chars.next();
                    state = State::LineComment;
                    out.push_str("  ");
                }
                ('/', Some('*')) => {
                    chars.next();
                    state = State::BlockComment;
                    out.push_str("  ");
                }
                _ => out.push(c),
            },
            State::LineComment => {
                if c == '\n' {
                    state = State::Default;
                    out.push('\n');
                } else {
                    out.push(' ');
                }
            }
            State::BlockComment => match (c, chars.peek()) {
                ('*', Some('/')) => {
                    chars.next();
                    state = State::Default;
                    out.push_str("  ");
                }
                ('\n', _) => out.push('\n'),
                _ => out.push(' '),
            },
            State::String => {
                out.push(c);
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                } else if c == '"' {
                    state = State::Default;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn line_comments_become_spaces() {
        let source = "{\n  \"a\": 1 // one\n}";
        assert_eq!(strip_comments(source), "{\n  \"a\": 1       \n}");
    }

    #[test]
    fn block_comments_keep_newlines() {
        let source = "{/* a\nb */\"x\": true}";
        assert_eq!(strip_comments(source), "{    \n    \"x\": true}");
    }

    #[test]
    fn strings_are_untouched() {
        let source = r#"{"url": "http://example.com/*x*/", "q": "say \"//hi\""}"#;
        assert_eq!(strip_comments(source), source);
    }

    #[test]
    fn stripped_length_matches() {
        let source = "// header\n{ /* inline */ \"k\": [1, 2] }\n";
        assert_eq!(strip_comments(source).len(), source.len());
    }
}
