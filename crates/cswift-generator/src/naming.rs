//! Swift names for generated declarations.

use cswift_config::{DeclarationsConfig, SymbolCasingConfig};
use cswift_core::CoreError;
use cswift_core::formatter::NameFormatter;
use cswift_core::symbol::{CompoundSymbolName, SymbolCasing};

/// Parses C names with the casing configured for their declaration kind and
/// formats them with one shared [`NameFormatter`].
#[derive(Debug, Clone)]
pub struct SymbolNameGenerator {
    formatter: NameFormatter,
    casing: SymbolCasingConfig,
}

impl SymbolNameGenerator {
    #[must_use]
    pub const fn new(formatter: NameFormatter, casing: SymbolCasingConfig) -> Self {
        Self { formatter, casing }
    }

    /// # Errors
    ///
    /// Returns the [`CoreError`] raised while compiling the formatting terms.
    pub fn from_config(config: &DeclarationsConfig) -> Result<Self, CoreError> {
        let formatting = &config.swift_symbol_formatting;
        let formatter = NameFormatter::from_terms(
            formatting.symbol_casing,
            &formatting.capitalize_terms,
            &formatting.patterns_to_split,
            &formatting.snake_case_after_terms,
        )?;
        Ok(Self::new(formatter, config.symbol_casing.clone()))
    }

    fn generate(&self, name: &str, casing: SymbolCasing) -> CompoundSymbolName {
        self.formatter.format(&casing.parse_name(name))
    }

    #[must_use]
    pub fn enum_name(&self, name: &str) -> CompoundSymbolName {
        self.generate(name, self.casing.enums)
    }

    #[must_use]
    pub fn enum_case(&self, case_name: &str) -> CompoundSymbolName {
        self.generate(case_name, self.casing.enum_members)
    }

    #[must_use]
    pub fn struct_name(&self, name: &str) -> CompoundSymbolName {
        self.generate(name, self.casing.structs)
    }

    #[must_use]
    pub fn function_name(&self, name: &str) -> CompoundSymbolName {
        self.generate(name, self.casing.functions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn generator() -> SymbolNameGenerator {
        let mut config = DeclarationsConfig::default();
        config.swift_symbol_formatting.capitalize_terms = vec!["AABB".into()];
        SymbolNameGenerator::from_config(&config).unwrap()
    }

    #[test]
    fn function_names_are_camel_cased() {
        let names = generator();
        assert_eq!(names.function_name("GetGravity").to_string(), "getGravity");
        assert_eq!(names.function_name("Step").to_string(), "step");
    }

    #[test]
    fn struct_names_keep_their_c_spelling() {
        let names = generator();
        assert_eq!(names.struct_name("b2Vec2").to_string(), "b2Vec2");
    }

    #[test]
    fn capitalized_terms_are_pinned() {
        let names = generator();
        assert_eq!(names.function_name("ComputeAabb").to_string(), "computeAABB");
    }

    #[test]
    fn mixed_case_output_is_rejected() {
        let mut config = DeclarationsConfig::default();
        config.swift_symbol_formatting.symbol_casing = SymbolCasing::MixedCase;
        assert!(matches!(
            SymbolNameGenerator::from_config(&config),
            Err(CoreError::UnsupportedCasing(SymbolCasing::MixedCase))
        ));
    }
}
