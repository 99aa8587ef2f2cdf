//! Which C declarations become Swift declarations, and how they are named.

use cswift_core::decl::AccessLevel;
use cswift_core::symbol::SymbolCasing;
use serde::{Deserialize, Serialize};

const fn default_access_level() -> AccessLevel {
    AccessLevel::Public
}

const fn default_c_casing() -> SymbolCasing {
    SymbolCasing::CamelCase
}

const fn default_enum_member_casing() -> SymbolCasing {
    SymbolCasing::SnakeCase
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationsConfig {
    /// C name prefixes of the declarations to collect, e.g. `b2`.
    #[serde(default)]
    pub prefixes: Vec<String>,

    #[serde(default)]
    pub symbol_casing: SymbolCasingConfig,

    #[serde(default)]
    pub swift_symbol_formatting: FormattingConfig,

    #[serde(default)]
    pub functions_to_methods: Vec<FunctionMapperConfig>,

    #[serde(default)]
    pub conformances: Vec<ConformanceConfig>,

    #[serde(default)]
    pub filters: FiltersConfig,

    /// Fold matching `get`/`set` method pairs into computed properties.
    #[serde(default)]
    pub auto_property: bool,
}

/// How the C names of each declaration category are segmented.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolCasingConfig {
    #[serde(default = "default_c_casing")]
    pub enums: SymbolCasing,
    #[serde(default = "default_enum_member_casing")]
    pub enum_members: SymbolCasing,
    #[serde(default = "default_c_casing")]
    pub structs: SymbolCasing,
    #[serde(default = "default_c_casing")]
    pub functions: SymbolCasing,
}

impl Default for SymbolCasingConfig {
    fn default() -> Self {
        Self {
            enums: default_c_casing(),
            enum_members: default_enum_member_casing(),
            structs: default_c_casing(),
            functions: default_c_casing(),
        }
    }
}

/// Output naming rules applied to every generated Swift name.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingConfig {
    #[serde(default = "default_c_casing")]
    pub symbol_casing: SymbolCasing,

    /// Words pinned to uppercase: literal terms or `/regex/` with one group.
    #[serde(default)]
    pub capitalize_terms: Vec<String>,

    /// Regexes with at least two groups that split compound words.
    #[serde(default)]
    pub patterns_to_split: Vec<String>,

    /// Terms after which the rest of the name is joined with `_`.
    #[serde(default)]
    pub snake_case_after_terms: Vec<String>,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            symbol_casing: default_c_casing(),
            capitalize_terms: Vec::new(),
            patterns_to_split: Vec::new(),
            snake_case_after_terms: Vec::new(),
        }
    }
}

/// Maps free functions named `<c_prefix>Rest` onto methods of `swift_type`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionMapperConfig {
    pub c_prefix: String,
    pub swift_type: String,
    #[serde(default = "default_access_level")]
    pub access_level: AccessLevel,
    pub param0: FirstParamConfig,
}

/// The receiver passed as the C function's first argument.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstParamConfig {
    pub swift_name: String,
    #[serde(rename = "type")]
    pub c_type: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConformanceConfig {
    pub c_name: String,
    pub conformances: Vec<String>,
}

/// Start-anchored regexes over C names; a leading `!` rejects.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersConfig {
    #[serde(default)]
    pub enums: Vec<String>,
    #[serde(default)]
    pub enum_members: Vec<String>,
    #[serde(default)]
    pub structs: Vec<String>,
    #[serde(default)]
    pub methods: Vec<String>,
}

impl FiltersConfig {
    /// `(field path, patterns)` for every category.
    #[must_use]
    pub fn categories(&self) -> [(&'static str, &[String]); 4] {
        [
            ("declarations.filters.enums", &self.enums),
            ("declarations.filters.enumMembers", &self.enum_members),
            ("declarations.filters.structs", &self.structs),
            ("declarations.filters.methods", &self.methods),
        ]
    }
}
