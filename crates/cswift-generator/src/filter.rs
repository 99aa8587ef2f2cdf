//! Accept/reject filters deciding which C symbols are generated.

use std::collections::HashSet;
use std::fmt;

use cswift_config::{ConformanceConfig, FiltersConfig};
use regex::Regex;

use crate::GeneratorError;

/// Outcome of one filter. A symbol is generated only when the combined
/// outcome of its category is [`Accept`](Self::Accept).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    Neither,
    Accept,
    Reject,
}

impl FilterResult {
    /// `Reject` dominates `Accept`, which dominates `Neither`.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Reject, _) | (_, Self::Reject) => Self::Reject,
            (Self::Accept, _) | (_, Self::Accept) => Self::Accept,
            (Self::Neither, Self::Neither) => Self::Neither,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    Enums,
    EnumMembers,
    Structs,
    Methods,
}

impl FilterCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enums => "enums",
            Self::EnumMembers => "enumMembers",
            Self::Structs => "structs",
            Self::Methods => "methods",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A start-anchored pattern over the original C name; a leading `!` turns a
/// match into a rejection.
#[derive(Debug, Clone)]
pub struct DeclarationFilter {
    pattern: Regex,
    on_match: FilterResult,
}

impl DeclarationFilter {
    /// # Errors
    ///
    /// Returns the regex error if the pattern does not compile.
    pub fn parse(entry: &str) -> Result<Self, regex::Error> {
        let (body, on_match) = entry
            .strip_prefix('!')
            .map_or((entry, FilterResult::Accept), |body| (body, FilterResult::Reject));
        Ok(Self {
            pattern: Regex::new(&format!("^(?:{body})"))?,
            on_match,
        })
    }

    #[must_use]
    pub fn apply(&self, c_name: Option<&str>) -> FilterResult {
        match c_name {
            Some(name) if self.pattern.is_match(name) => self.on_match,
            _ => FilterResult::Neither,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymbolFilter {
    enums: Vec<DeclarationFilter>,
    enum_members: Vec<DeclarationFilter>,
    structs: Vec<DeclarationFilter>,
    methods: Vec<DeclarationFilter>,
    /// C names with conformance requests; these count as accepted unless a
    /// filter rejects them.
    implicit: HashSet<String>,
}

impl SymbolFilter {
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidFilter`] for the first pattern that
    /// does not compile.
    pub fn from_config(filters: &FiltersConfig, conformances: &[ConformanceConfig]) -> Result<Self, GeneratorError> {
        let compile = |category: FilterCategory, entries: &[String]| {
            entries
                .iter()
                .map(|entry| {
                    DeclarationFilter::parse(entry).map_err(|source| GeneratorError::InvalidFilter {
                        category: category.as_str(),
                        pattern: entry.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(Self {
            enums: compile(FilterCategory::Enums, &filters.enums)?,
            enum_members: compile(FilterCategory::EnumMembers, &filters.enum_members)?,
            structs: compile(FilterCategory::Structs, &filters.structs)?,
            methods: compile(FilterCategory::Methods, &filters.methods)?,
            implicit: conformances.iter().map(|c| c.c_name.clone()).collect(),
        })
    }

    fn filters(&self, category: FilterCategory) -> &[DeclarationFilter] {
        match category {
            FilterCategory::Enums => &self.enums,
            FilterCategory::EnumMembers => &self.enum_members,
            FilterCategory::Structs => &self.structs,
            FilterCategory::Methods => &self.methods,
        }
    }

    #[must_use]
    pub fn evaluate(&self, category: FilterCategory, c_name: Option<&str>) -> FilterResult {
        let initial = match c_name {
            Some(name) if self.implicit.contains(name) => FilterResult::Accept,
            _ => FilterResult::Neither,
        };
        self.filters(category)
            .iter()
            .fold(initial, |result, filter| result.combine(filter.apply(c_name)))
    }

    #[must_use]
    pub fn accepts(&self, category: FilterCategory, c_name: Option<&str>) -> bool {
        self.evaluate(category, c_name) == FilterResult::Accept
    }
}
