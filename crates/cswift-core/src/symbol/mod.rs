//! Symbol name model: components, compound names and casing styles.

mod component;
mod name;
mod segment;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use component::{ComponentCase, SymbolComponent, capitalize, upper_first};
pub use name::CompoundSymbolName;

/// Naming style of a declaration category, as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolCasing {
    CamelCase,
    PascalCase,
    SnakeCase,
    UpperSnakeCase,
    MixedCase,
}

impl SymbolCasing {
    /// Segment `text` according to this style.
    #[must_use]
    pub fn parse_name(self, text: &str) -> CompoundSymbolName {
        match self {
            Self::CamelCase | Self::PascalCase => CompoundSymbolName::from_pascal_case(text),
            Self::SnakeCase | Self::UpperSnakeCase => CompoundSymbolName::from_snake_case(text),
            Self::MixedCase => CompoundSymbolName::from_mixed_case(text),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CamelCase => "camelCase",
            Self::PascalCase => "pascalCase",
            Self::SnakeCase => "snakeCase",
            Self::UpperSnakeCase => "upperSnakeCase",
            Self::MixedCase => "mixedCase",
        }
    }
}

impl fmt::Display for SymbolCasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
