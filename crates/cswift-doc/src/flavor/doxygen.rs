use cswift_core::decl::DeclLookup;
use cswift_core::doc_block::DocCommentBlock;
use regex::Regex;

use super::DocFlavor;
use crate::DocError;
use crate::cursor::Cursor;

const MARKERS: &[&str] = &["//!<", "//!", "///", "/**"];

/// Doxygen commands (`\ref`, `@param`, ...) rewritten to Swift doc markup.
#[derive(Debug, Clone)]
pub struct DoxygenFlavor {
    ref_command: Regex,
    brief_command: Regex,
    ingroup_command: Regex,
    param_command: Regex,
    returns_command: Regex,
    note_command: Regex,
    symbol: Regex,
    word: Regex,
}

impl DoxygenFlavor {
    /// # Errors
    ///
    /// Returns [`DocError::Regex`] if a command pattern fails to compile.
    pub fn new() -> Result<Self, DocError> {
        let command = |name: &str| Regex::new(&format!(r"[@\\]{name}"));
        Ok(Self {
            ref_command: command(r"ref\s")?,
            brief_command: command(r"brief\b")?,
            ingroup_command: command(r"ingroup\b")?,
            param_command: command(r"param\b")?,
            returns_command: command(r"returns?\b")?,
            note_command: command(r"note\b")?,
            symbol: Regex::new(r"\w+(::\w+)*(\(\))?")?,
            word: Regex::new(r"\w+")?,
        })
    }

    /// Run `handler` on a cursor selecting each match of `pattern`.
    ///
    /// Scanning resumes one byte past the previous match start, against the
    /// edited buffer.
    fn handle_command(text: &str, pattern: &Regex, mut handler: impl FnMut(&mut Cursor)) -> String {
        let mut buffer = text.to_string();
        let mut from = 0;
        while from <= buffer.len() {
            let Some(found) = pattern.find_at(&buffer, from) else {
                break;
            };
            let (start, end) = (found.start(), found.end());
            from = start + 1;

            let mut cursor = Cursor::new(buffer, start);
            cursor.extend_to(end);
            handler(&mut cursor);
            buffer = cursor.into_buffer();
            while from < buffer.len() && !buffer.is_char_boundary(from) {
                from += 1;
            }
        }
        buffer
    }

    /// `` `Swift.name` `` for a `::`-qualified C reference, segment by segment.
    fn convert_ref(symbol: &str, lookup: &DeclLookup) -> String {
        let (path, call) = symbol
            .strip_suffix("()")
            .map_or((symbol, ""), |path| (path, "()"));
        let resolved: Vec<&str> = path
            .split("::")
            .map(|segment| {
                lookup
                    .lookup_c_symbol(segment)
                    .map_or(segment, |entry| entry.swift_name.as_str())
            })
            .collect();
        format!("`{}{call}`", resolved.join("."))
    }
}

impl DocFlavor for DoxygenFlavor {
    fn markers(&self) -> &'static [&'static str] {
        MARKERS
    }

    fn transform(&self, comment: &DocCommentBlock, lookup: &DeclLookup) -> DocCommentBlock {
        let text = Self::handle_command(comment.text(), &self.ref_command, |cursor| {
            if let Some(symbol) = cursor.extend(&self.symbol) {
                cursor.replace(Some(&Self::convert_ref(&symbol, lookup)));
            }
        });
        let text = Self::handle_command(&text, &self.brief_command, |cursor| {
            cursor.extend_whitespace();
            cursor.remove();
        });
        let text = Self::handle_command(&text, &self.ingroup_command, |cursor| {
            cursor.extend_line();
            cursor.remove();
        });
        let text = Self::handle_command(&text, &self.param_command, |cursor| {
            cursor.extend_whitespace();
            if let Some(name) = cursor.extend(&self.word) {
                cursor.replace(Some(&format!("- param {name}:")));
            }
        });
        let text = Self::handle_command(&text, &self.returns_command, |cursor| {
            cursor.replace(Some("- returns:"));
        });
        let text = Self::handle_command(&text, &self.note_command, |cursor| {
            cursor.replace(Some("- note:"));
        });
        comment.with_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cswift_core::decl::{AccessLevel, CDeclKind, DeclInfo, Declaration, Extension, MemberVariable};
    use cswift_core::symbol::CompoundSymbolName;
    use pretty_assertions::assert_eq;

    fn lookup() -> DeclLookup {
        let mut world = Extension::new(
            DeclInfo::new(CompoundSymbolName::from_pascal_case("B2World")).with_original("b2World", CDeclKind::Struct),
            AccessLevel::Public,
        );
        world.members.push(Declaration::Variable(MemberVariable::new(
            DeclInfo::new(CompoundSymbolName::from_camel_case("gravity")).with_original("b2World_gravity", CDeclKind::EnumCase),
        )));
        let symbol = MemberVariable::new(
            DeclInfo::new(CompoundSymbolName::from_pascal_case("SwiftSymbol")).with_original("c_symbol", CDeclKind::Struct),
        );
        DeclLookup::build(&[Declaration::Extension(world), Declaration::Variable(symbol)])
    }

    fn transform(text: &str) -> String {
        DoxygenFlavor::new()
            .unwrap()
            .transform(&DocCommentBlock::from_text(text), &lookup())
            .text()
            .to_string()
    }

    #[test]
    fn full_command_rewrite() {
        let input = "\\ingroup Groupname\n\\brief \\ref c_symbol::abc is a symbol.\n\\note This is a note!\n@param p A parameter\n@return A return value.";
        assert_eq!(
            transform(input),
            "`SwiftSymbol.abc` is a symbol.\n- note: This is a note!\n- param p: A parameter\n- returns: A return value."
        );
    }

    #[test]
    fn refs_resolve_to_qualified_names() {
        assert_eq!(transform("See \\ref b2World_gravity."), "See `B2World.gravity`.");
        assert_eq!(transform("See @ref B2WORLD for details"), "See `B2World` for details");
    }

    #[test]
    fn ref_call_suffix_is_kept() {
        assert_eq!(transform("Use \\ref b2World() first"), "Use `B2World()` first");
    }

    #[test]
    fn unresolved_refs_are_still_quoted() {
        assert_eq!(transform("\\ref unknown_thing"), "`unknown_thing`");
    }

    #[test]
    fn every_occurrence_is_rewritten() {
        assert_eq!(
            transform("@param a First.\n@param b Second.\n@returns Sum."),
            "- param a: First.\n- param b: Second.\n- returns: Sum."
        );
    }

    #[test]
    fn ingroup_line_is_dropped_mid_comment() {
        assert_eq!(transform("A\n\\ingroup g\nB"), "A\nB");
        assert_eq!(transform("Step.\n@ingroup world\n@param dt Time."), "Step.\n- param dt: Time.");
    }

    #[test]
    fn ingroup_at_end_of_buffer() {
        assert_eq!(transform("Docs.\n\\ingroup world"), "Docs.\n");
    }

    #[test]
    fn commands_need_word_boundaries() {
        assert_eq!(transform("@notes stay"), "@notes stay");
        assert_eq!(transform("@parameters stay"), "@parameters stay");
    }
}
