//! Single-pass scanner that extracts doc comments from C source text.

use std::cmp::Reverse;
use std::path::Path;

use cswift_core::doc_block::DocCommentBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InString(char),
    LineComment,
    BlockComment,
}

#[derive(Debug, Clone, Copy)]
struct OpenComment {
    line: usize,
    column: usize,
    start: usize,
}

/// Return every comment of `text` that starts with one of `markers`, in
/// source order, with the marker stripped.
///
/// Lines are 1-based; the column is the 1-based position of the opening
/// slash plus the marker length. Comments still open at the end of the text
/// are closed there.
#[must_use]
pub fn scan_doc_comments(path: &Path, text: &str, markers: &[&str]) -> Vec<DocCommentBlock> {
    let mut markers = markers.to_vec();
    markers.sort_by_key(|m| Reverse(m.len()));

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut comments = Vec::new();
    let mut state = State::Normal;
    let mut line = 1;
    let mut column = 0;
    let mut open = OpenComment {
        line,
        column,
        start: 0,
    };

    let close = |open: OpenComment, end: usize, comments: &mut Vec<DocCommentBlock>| {
        let contents = &text[open.start..end];
        if let Some(marker) = markers.iter().find(|m| contents.starts_with(**m)) {
            comments.push(DocCommentBlock::new(
                path,
                open.line,
                open.column + marker.chars().count(),
                &contents[marker.len()..],
            ));
        }
    };

    let mut i = 0;
    while i < chars.len() {
        let (offset, c) = chars[i];
        i += 1;
        if c == '\n' {
            column = 0;
            line += 1;
        } else {
            column += 1;
        }
        let next = chars.get(i).map(|&(_, n)| n);

        match state {
            State::Normal => match (c, next) {
                ('"' | '\'', _) => state = State::InString(c),
                ('/', Some(n @ ('/' | '*'))) => {
                    open = OpenComment {
                        line,
                        column,
                        start: offset,
                    };
                    state = if n == '/' {
                        State::LineComment
                    } else {
                        State::BlockComment
                    };
                    // The second opener character is part of the comment.
                    i += 1;
                    column += 1;
                }
                _ => {}
            },
            State::InString(quote) => {
                if c == '\\' && next.is_some() {
                    if next == Some('\n') {
                        column = 0;
                        line += 1;
                    } else {
                        column += 1;
                    }
                    i += 1;
                } else if c == quote || c == '\n' {
                    state = State::Normal;
                }
            }
            State::LineComment => {
                if c == '\n' {
                    close(open, offset, &mut comments);
                    state = State::Normal;
                }
            }
            State::BlockComment => {
                if c == '*' && next == Some('/') {
                    close(open, offset, &mut comments);
                    state = State::Normal;
                    i += 1;
                    column += 1;
                }
            }
        }
    }

    if matches!(state, State::LineComment | State::BlockComment) {
        close(open, text.len(), &mut comments);
    }

    comments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MARKERS: &[&str] = &["///", "//!<", "/**", "//!"];

    fn scan(text: &str) -> Vec<(usize, usize, String)> {
        scan_doc_comments(Path::new("box2d.h"), text, MARKERS)
            .into_iter()
            .map(|b| (b.line, b.column, b.text().to_string()))
            .collect()
    }

    #[test]
    fn line_comments_with_markers() {
        let source = "/// Gets the gravity.\nb2Vec2 b2World_GetGravity(b2WorldId worldId);\n";
        assert_eq!(scan(source), [(1, 4, " Gets the gravity.".to_string())]);
    }

    #[test]
    fn plain_comments_are_ignored() {
        let source = "// not docs\n/* nor this */\nint x;";
        assert!(scan(source).is_empty());
    }

    #[test]
    fn longest_marker_wins() {
        let source = "int x; //!< trailing\n";
        assert_eq!(scan(source), [(1, 12, " trailing".to_string())]);
    }

    #[test]
    fn block_comment_spans_lines() {
        let source = "int a;\n/**\n * Body.\n */\nvoid f(void);";
        let comments = scan_doc_comments(Path::new("a.h"), source, MARKERS);
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].line, 2);
        assert_eq!(comments[0].text(), "\n * Body.\n ");
        assert_eq!(comments[0].line_count(), 3);
    }

    #[test]
    fn strings_hide_comment_openers() {
        let source = "const char* s = \"/// not a comment \\\" still string\";\n/// real\n";
        assert_eq!(scan(source), [(2, 4, " real".to_string())]);
    }

    #[test]
    fn char_literal_quote() {
        let source = "char q = '\"'; /// after\n";
        assert_eq!(scan(source), [(1, 18, " after".to_string())]);
    }

    #[test]
    fn unterminated_comment_closes_at_eof() {
        assert_eq!(scan("/// last"), [(1, 4, " last".to_string())]);
    }

    #[test]
    fn empty_block_is_not_a_doc_comment() {
        assert!(scan("/**/ int x;").is_empty());
    }
}
