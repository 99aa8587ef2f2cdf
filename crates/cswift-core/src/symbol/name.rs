use std::fmt;

use serde::{Serialize, Serializer};

use super::component::{ComponentCase, SymbolComponent, capitalize};
use super::segment::segment;

/// An identifier made of ordered [`SymbolComponent`]s.
///
/// Equality covers every component field, so two names that render the same
/// string can still differ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompoundSymbolName {
    components: Vec<SymbolComponent>,
}

impl CompoundSymbolName {
    #[must_use]
    pub const fn new(components: Vec<SymbolComponent>) -> Self {
        Self { components }
    }

    /// One component per string, no joiners.
    #[must_use]
    pub fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(parts.into_iter().map(SymbolComponent::new).collect())
    }

    /// Split on `_`. Every component carries `_` as its joiner, so the
    /// original text renders back unchanged.
    #[must_use]
    pub fn from_snake_case(text: &str) -> Self {
        Self::new(
            text.split('_')
                .map(|part| SymbolComponent::new(part).with_joiner("_"))
                .collect(),
        )
    }

    #[must_use]
    pub fn from_pascal_case(text: &str) -> Self {
        Self::from_parts(segment(text, false).into_iter().map(|s| s.text))
    }

    /// Same segmentation as [`from_pascal_case`](Self::from_pascal_case).
    #[must_use]
    pub fn from_camel_case(text: &str) -> Self {
        Self::from_pascal_case(text)
    }

    /// Pascal/camel segmentation that also splits on `_`, keeping the
    /// underscores as the joiner of the following component.
    #[must_use]
    pub fn from_mixed_case(text: &str) -> Self {
        Self::new(
            segment(text, true)
                .into_iter()
                .map(|s| {
                    let component = SymbolComponent::new(s.text);
                    match s.joiner {
                        Some(joiner) => component.with_joiner(joiner),
                        None => component,
                    }
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn components(&self) -> &[SymbolComponent] {
        &self.components
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolComponent> {
        self.components.iter()
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.components
            .iter()
            .enumerate()
            .map(|(i, c)| c.render(i > 0))
            .collect()
    }

    #[must_use]
    pub fn starts_with(&self, text: &str) -> bool {
        self.render().starts_with(text)
    }

    #[must_use]
    pub fn ends_with(&self, text: &str) -> bool {
        self.render().ends_with(text)
    }

    #[must_use]
    pub fn adding_component(&self, component: SymbolComponent) -> Self {
        let mut components = self.components.clone();
        components.push(component);
        Self::new(components)
    }

    #[must_use]
    pub fn prepending_component(&self, component: SymbolComponent) -> Self {
        let mut components = Vec::with_capacity(self.len() + 1);
        components.push(component);
        components.extend(self.components.iter().cloned());
        Self::new(components)
    }

    #[must_use]
    pub fn appending(&self, other: &Self) -> Self {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        Self::new(components)
    }

    /// Split into runs of components between those matching `predicate`.
    ///
    /// Matching components are dropped, or emitted as single-component names
    /// when `include_separator` is set.
    #[must_use]
    pub fn split(
        &self,
        predicate: impl Fn(usize, &SymbolComponent) -> bool,
        include_separator: bool,
    ) -> Vec<Self> {
        let mut result = Vec::new();
        let mut current: Vec<SymbolComponent> = Vec::new();

        for (i, component) in self.components.iter().enumerate() {
            if predicate(i, component) {
                if !current.is_empty() {
                    result.push(Self::new(std::mem::take(&mut current)));
                }
                if include_separator {
                    result.push(Self::new(vec![component.clone()]));
                }
            } else {
                current.push(component.clone());
            }
        }
        if !current.is_empty() {
            result.push(Self::new(current));
        }

        result
    }

    #[must_use]
    pub fn lower(&self, force: bool) -> Self {
        Self::new(self.components.iter().map(|c| c.lower(force)).collect())
    }

    #[must_use]
    pub fn upper(&self, force: bool) -> Self {
        Self::new(self.components.iter().map(|c| c.upper(force)).collect())
    }

    /// Drop leading components whose text equals one of `prefixes`.
    #[must_use]
    pub fn removing_prefixes<S: AsRef<str>>(&self, prefixes: &[S], case_sensitive: bool) -> Self {
        let matches = |text: &str| {
            prefixes.iter().any(|p| {
                if case_sensitive {
                    p.as_ref() == text
                } else {
                    p.as_ref().eq_ignore_ascii_case(text)
                }
            })
        };
        let index = self
            .components
            .iter()
            .take_while(|c| matches(c.text()))
            .count();

        Self::new(self.components[index..].to_vec())
    }

    /// Remove the leading components shared with `other`.
    ///
    /// With `detect_plurals`, `X` and `Xs` count as shared in either direction.
    /// When the remainder would start with a digit, the split point backs up
    /// until it does not, and the backed-up components are returned as the
    /// second element.
    #[must_use]
    pub fn removing_common(
        &self,
        other: &Self,
        case_sensitive: bool,
        detect_plurals: bool,
    ) -> (Self, Option<Self>) {
        let mut prefix_index = 0;
        for (mine, theirs) in self.components.iter().zip(&other.components) {
            let (a, b) = (mine.text(), theirs.text());
            if detect_plurals {
                let (la, lb) = (a.to_lowercase(), b.to_lowercase());
                if format!("{la}s") == lb || la == format!("{lb}s") {
                    prefix_index += 1;
                    continue;
                }
            }
            let same = if case_sensitive {
                a == b
            } else {
                a.to_lowercase() == b.to_lowercase()
            };
            if !same {
                break;
            }
            prefix_index += 1;
        }

        let starts_with_digit = |index: usize| {
            self.components
                .get(index)
                .and_then(|c| c.text().chars().next())
                .is_some_and(|c| c.is_ascii_digit())
        };
        let mut extra_index = prefix_index;
        while extra_index > 0 && starts_with_digit(extra_index) {
            extra_index -= 1;
        }

        let name = Self::new(self.components[prefix_index..].to_vec());
        let extra = (extra_index != prefix_index)
            .then(|| Self::new(self.components[extra_index..prefix_index].to_vec()));

        (name, extra)
    }

    /// `lower_snake_case`: text only, lowercased, joined by `_`.
    #[must_use]
    pub fn lower_snake_cased(&self, force: bool) -> Self {
        Self::new(
            self.components
                .iter()
                .map(|c| c.text_only().lower(force).with_joiner("_"))
                .collect(),
        )
    }

    /// `UPPER_SNAKE_CASE`: text only, uppercased, joined by `_`.
    #[must_use]
    pub fn upper_snake_cased(&self, force: bool) -> Self {
        Self::new(
            self.components
                .iter()
                .map(|c| c.text_only().upper(force).with_joiner("_"))
                .collect(),
        )
    }

    /// Fresh components with capitalized text. Case constraints are dropped.
    #[must_use]
    pub fn pascal_cased(&self) -> Self {
        Self::from_parts(self.components.iter().map(|c| capitalize(c.text())))
    }

    /// `camelCase`: first component lowered, the rest capitalized.
    ///
    /// A component starting with a digit that follows one ending with a digit
    /// receives `digit_separator` as its joiner. Pinned components keep their
    /// text.
    #[must_use]
    pub fn camel_cased(&self, digit_separator: &str) -> Self {
        let mut result: Vec<SymbolComponent> = Vec::with_capacity(self.len());

        for (i, component) in self.components.iter().enumerate() {
            let mut next = component.text_only().lower(false);
            if i > 0 {
                if next.case() == ComponentCase::Any {
                    next = next.with_text(capitalize(next.text()));
                }
                let starts_digit = next.render(true).starts_with(|c: char| c.is_ascii_digit());
                let prev_ends_digit = self.components[i - 1]
                    .render(i > 1)
                    .ends_with(|c: char| c.is_ascii_digit());
                if starts_digit && prev_ends_digit {
                    next = next.with_joiner(digit_separator);
                }
            }
            result.push(next);
        }

        Self::new(result)
    }
}

impl fmt::Display for CompoundSymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for CompoundSymbolName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'a> IntoIterator for &'a CompoundSymbolName {
    type Item = &'a SymbolComponent;
    type IntoIter = std::slice::Iter<'a, SymbolComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<SymbolComponent> for CompoundSymbolName {
    fn from_iter<T: IntoIterator<Item = SymbolComponent>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
