//! Symbol name formatter.
//!
//! Applies a base casing, splits components along configured multi-group
//! patterns, pins capitalization terms to uppercase and finally forces a
//! `snake_case` joint after configured trigger terms.

mod capitalizer;

use regex::{Regex, RegexBuilder};

pub use capitalizer::{Capitalization, WordCapitalizer};

use crate::CoreError;
use crate::symbol::{ComponentCase, CompoundSymbolName, SymbolCasing, SymbolComponent, upper_first};

#[derive(Debug, Clone)]
pub struct NameFormatter {
    casing: SymbolCasing,
    capitalizers: Vec<WordCapitalizer>,
    split_patterns: Vec<Regex>,
    snake_case_after: Vec<String>,
}

impl NameFormatter {
    /// Formatter with only a base casing.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedCasing`] for [`SymbolCasing::MixedCase`].
    pub fn new(casing: SymbolCasing) -> Result<Self, CoreError> {
        Self::from_terms::<&str>(casing, &[], &[], &[])
    }

    /// Build a formatter from raw configuration terms.
    ///
    /// # Errors
    ///
    /// Fails when the casing cannot be used for output, when a split pattern
    /// has fewer than two capture groups, or when any pattern is malformed.
    pub fn from_terms<S: AsRef<str>>(
        casing: SymbolCasing,
        capitalize_terms: &[S],
        patterns_to_split: &[S],
        snake_case_after: &[S],
    ) -> Result<Self, CoreError> {
        if casing == SymbolCasing::MixedCase {
            return Err(CoreError::UnsupportedCasing(casing));
        }

        let capitalizers = capitalize_terms
            .iter()
            .map(|term| WordCapitalizer::parse(term.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let split_patterns = patterns_to_split
            .iter()
            .map(|pattern| compile_split_pattern(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            casing,
            capitalizers,
            split_patterns,
            snake_case_after: snake_case_after
                .iter()
                .map(|s| s.as_ref().to_string())
                .collect(),
        })
    }

    #[must_use]
    pub const fn casing(&self) -> SymbolCasing {
        self.casing
    }

    #[must_use]
    pub fn format(&self, name: &CompoundSymbolName) -> CompoundSymbolName {
        let name = self.pre_capitalize(name);

        let mut components: Vec<SymbolComponent> = name
            .iter()
            .flat_map(|component| self.split_and_capitalize(component))
            .collect();

        let lowercase_led = name
            .components()
            .first()
            .and_then(|c| c.render(false).chars().next())
            .is_some_and(char::is_lowercase);
        if lowercase_led && let Some(first) = components.first_mut() {
            *first = first.with_case(ComponentCase::Lower);
        }

        self.snake_case(components).into_iter().collect()
    }

    fn pre_capitalize(&self, name: &CompoundSymbolName) -> CompoundSymbolName {
        match self.casing {
            SymbolCasing::SnakeCase => name.lower_snake_cased(false),
            SymbolCasing::UpperSnakeCase => name.upper_snake_cased(false),
            SymbolCasing::PascalCase => name.pascal_cased(),
            // MixedCase is rejected at construction.
            SymbolCasing::CamelCase | SymbolCasing::MixedCase => name.camel_cased("_"),
        }
    }

    fn split_and_capitalize(&self, component: &SymbolComponent) -> Vec<SymbolComponent> {
        let mut parts = Vec::new();
        self.split_component(component.text(), &mut parts);

        parts
            .iter()
            .enumerate()
            .flat_map(|(i, part)| self.capitalize(part, i > 0))
            .map(|(text, case)| component.with_text(text).with_case(component.case() | case))
            .collect()
    }

    fn split_component(&self, text: &str, out: &mut Vec<String>) {
        for pattern in &self.split_patterns {
            if !pattern.is_match(text) {
                continue;
            }
            let pieces = split_keeping_groups(pattern, text);
            if pieces.len() == 1 && pieces[0] == text {
                break;
            }
            for piece in &pieces {
                self.split_component(piece, out);
            }
            return;
        }
        out.push(text.to_string());
    }

    fn capitalize(&self, text: &str, has_prev: bool) -> Vec<(String, ComponentCase)> {
        let mut leftmost: Option<Capitalization> = None;
        for capitalizer in &self.capitalizers {
            if let Some(found) = capitalizer.suggest(text)
                && leftmost.as_ref().is_none_or(|best| found.start < best.start)
            {
                leftmost = Some(found);
            }
        }

        let Some(found) = leftmost else {
            let text = if has_prev {
                upper_first(text)
            } else {
                text.to_string()
            };
            return vec![(text, ComponentCase::Any)];
        };

        let mut result = Vec::new();
        if found.start > 0 {
            result.extend(self.capitalize(&text[..found.start], has_prev));
        }
        result.push((found.word, ComponentCase::AsIs));
        if found.end < text.len() {
            result.extend(self.capitalize(&text[found.end..], true));
        }
        result
    }

    fn snake_case(&self, components: Vec<SymbolComponent>) -> Vec<SymbolComponent> {
        let mut snake_next = false;
        components
            .into_iter()
            .map(|mut component| {
                if snake_next {
                    component = component.with_joiner("_").lower(false);
                    snake_next = false;
                }
                if self.snake_case_after.iter().any(|t| t == component.text()) {
                    snake_next = true;
                }
                component
            })
            .collect()
    }
}

/// Compile a `patternsToSplit` entry case-insensitively.
///
/// # Errors
///
/// Returns [`CoreError::InvalidSplitPattern`] when the pattern has fewer than
/// two capture groups, since splitting on it would never terminate.
pub fn compile_split_pattern(pattern: &str) -> Result<Regex, CoreError> {
    let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
    let groups = regex.captures_len() - 1;
    if groups < 2 {
        return Err(CoreError::InvalidSplitPattern {
            pattern: pattern.to_string(),
            groups,
        });
    }
    Ok(regex)
}

/// Split `text` on `pattern`, keeping participating capture groups between
/// the pieces and dropping empty strings.
fn split_keeping_groups(pattern: &Regex, text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for captures in pattern.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        pieces.push(&text[last..whole.start()]);
        pieces.extend(captures.iter().skip(1).flatten().map(|m| m.as_str()));
        last = whole.end();
    }
    pieces.push(&text[last..]);

    pieces
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
