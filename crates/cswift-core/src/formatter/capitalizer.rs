//! Word capitalizers: pin a substring of a name component to uppercase.

use regex::{Regex, RegexBuilder};

use crate::CoreError;

/// A span of a component that should be rendered as `word`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capitalization {
    pub word: String,
    pub start: usize,
    pub end: usize,
}

/// A configured capitalization term.
///
/// Plain entries match the word anywhere, case-insensitively. Entries written
/// as `/regex/` uppercase only their single capture group.
#[derive(Debug, Clone)]
pub enum WordCapitalizer {
    Word(Regex),
    Pattern(Regex),
}

impl WordCapitalizer {
    /// Parse a `capitalizeTerms` entry.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Regex`] when the pattern does not compile and
    /// [`CoreError::InvalidCapitalizer`] when a `/regex/` entry does not have
    /// exactly one capture group.
    pub fn parse(entry: &str) -> Result<Self, CoreError> {
        if entry.len() > 2 && entry.starts_with('/') && entry.ends_with('/') {
            let source = &entry[1..entry.len() - 1];
            let pattern = RegexBuilder::new(source).case_insensitive(true).build()?;
            let groups = pattern.captures_len() - 1;
            if groups != 1 {
                return Err(CoreError::InvalidCapitalizer {
                    pattern: entry.to_string(),
                    groups,
                });
            }
            return Ok(Self::Pattern(pattern));
        }

        let pattern = RegexBuilder::new(&format!("({})", regex::escape(entry)))
            .case_insensitive(true)
            .build()?;
        Ok(Self::Word(pattern))
    }

    /// Earliest span of `text` this capitalizer wants uppercased.
    #[must_use]
    pub fn suggest(&self, text: &str) -> Option<Capitalization> {
        let pattern = match self {
            Self::Word(pattern) | Self::Pattern(pattern) => pattern,
        };
        pattern
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .find(|group| !group.is_empty())
            .map(|group| Capitalization {
                word: group.as_str().to_uppercase(),
                start: group.start(),
                end: group.end(),
            })
    }
}
