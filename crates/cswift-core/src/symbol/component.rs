//! A single word of a compound symbol name.

use serde::{Deserialize, Serialize};

/// Casing constraint carried by a [`SymbolComponent`].
///
/// `Any` and `AsIs` render the text untouched. The others force a case at
/// render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCase {
    #[default]
    Any,
    AsIs,
    Upper,
    Lower,
    Capitalized,
}

impl ComponentCase {
    /// Apply this casing to `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Any | Self::AsIs => text.to_string(),
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
            Self::Capitalized => capitalize(text),
        }
    }

    /// "Prefer explicit" merge: `Any` yields to `other`, everything else wins.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        match self {
            Self::Any => other,
            _ => self,
        }
    }
}

impl std::ops::BitOr for ComponentCase {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

/// Uppercase the first character and lowercase the rest.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Uppercase only the first character, leaving the rest untouched.
#[must_use]
pub fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// One word of a [`CompoundSymbolName`](super::CompoundSymbolName).
///
/// Components are immutable; every transformation returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolComponent {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    joiner: Option<String>,
    #[serde(default)]
    case: ComponentCase,
}

impl SymbolComponent {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            prefix: None,
            suffix: None,
            joiner: None,
            case: ComponentCase::Any,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// String emitted before this component when it follows another one.
    #[must_use]
    pub fn joiner(&self) -> Option<&str> {
        self.joiner.as_deref()
    }

    #[must_use]
    pub const fn case(&self) -> ComponentCase {
        self.case
    }

    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_prefix(&self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_suffix(&self, suffix: impl Into<String>) -> Self {
        Self {
            suffix: Some(suffix.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_joiner(&self, joiner: impl Into<String>) -> Self {
        Self {
            joiner: Some(joiner.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_case(&self, case: ComponentCase) -> Self {
        Self {
            case,
            ..self.clone()
        }
    }

    /// Copy keeping only the text and the case constraint.
    #[must_use]
    pub fn text_only(&self) -> Self {
        Self::new(self.text.clone()).with_case(self.case)
    }

    /// Lowercase every string of this component.
    ///
    /// Pinned components (any case other than `Any`) are returned unchanged
    /// unless `force` is set, in which case the constraint is reset to `Any`.
    #[must_use]
    pub fn lower(&self, force: bool) -> Self {
        self.map_strings(force, str::to_lowercase)
    }

    /// Uppercase counterpart of [`lower`](Self::lower).
    #[must_use]
    pub fn upper(&self, force: bool) -> Self {
        self.map_strings(force, str::to_uppercase)
    }

    fn map_strings(&self, force: bool, f: impl Fn(&str) -> String) -> Self {
        if !force && self.case != ComponentCase::Any {
            return self.clone();
        }
        Self {
            text: f(&self.text),
            prefix: self.prefix.as_deref().map(&f),
            suffix: self.suffix.as_deref().map(&f),
            joiner: self.joiner.as_deref().map(&f),
            case: ComponentCase::Any,
        }
    }

    /// Render joiner (only when `has_previous`), prefix, text and suffix with
    /// the case constraint applied to each.
    #[must_use]
    pub fn render(&self, has_previous: bool) -> String {
        let mut out = String::new();
        if has_previous && let Some(joiner) = &self.joiner {
            out.push_str(&self.case.apply(joiner));
        }
        if let Some(prefix) = &self.prefix {
            out.push_str(&self.case.apply(prefix));
        }
        out.push_str(&self.case.apply(&self.text));
        if let Some(suffix) = &self.suffix {
            out.push_str(&self.case.apply(suffix));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn case_apply() {
        assert_eq!(ComponentCase::Any.apply("AString"), "AString");
        assert_eq!(ComponentCase::AsIs.apply("AString"), "AString");
        assert_eq!(ComponentCase::Upper.apply("AString"), "ASTRING");
        assert_eq!(ComponentCase::Lower.apply("AString"), "astring");
        assert_eq!(ComponentCase::Capitalized.apply("AString"), "Astring");
    }

    #[test]
    fn any_is_identity_for_prefer_explicit() {
        assert_eq!(ComponentCase::Any | ComponentCase::Any, ComponentCase::Any);
        assert_eq!(ComponentCase::Any | ComponentCase::AsIs, ComponentCase::AsIs);
        assert_eq!(ComponentCase::Upper | ComponentCase::Lower, ComponentCase::Upper);
    }

    #[test]
    fn render_emits_joiner_only_after_previous() {
        let comp = SymbolComponent::new("symbol")
            .with_prefix("pref")
            .with_joiner("_");
        assert_eq!(comp.render(false), "prefsymbol");
        assert_eq!(comp.render(true), "_prefsymbol");
    }

    #[test]
    fn render_applies_case_to_every_part() {
        let comp = SymbolComponent::new("Symbol")
            .with_prefix("Pref")
            .with_suffix("Suff")
            .with_joiner("_A")
            .with_case(ComponentCase::Lower);
        assert_eq!(comp.render(true), "_aprefsymbolsuff");
    }

    #[test]
    fn lower_skips_pinned_unless_forced() {
        let pinned = SymbolComponent::new("SyMBol")
            .with_prefix("pRef")
            .with_suffix("SuFF")
            .with_joiner("_Prev")
            .with_case(ComponentCase::AsIs);
        assert_eq!(pinned.lower(false).render(true), "_PrevpRefSyMBolSuFF");

        let forced = pinned.lower(true);
        assert_eq!(forced.render(true), "_prevprefsymbolsuff");
        assert_eq!(forced.case(), ComponentCase::Any);
    }

    #[test]
    fn upper_forced_resets_case() {
        let comp = SymbolComponent::new("SyMBol").with_case(ComponentCase::Lower);
        let upper = comp.upper(true);
        assert_eq!(upper.text(), "SYMBOL");
        assert_eq!(upper.case(), ComponentCase::Any);
    }

    #[test]
    fn capitalize_helpers() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(upper_first("hELLO"), "HELLO");
        assert_eq!(capitalize(""), "");
    }
}
