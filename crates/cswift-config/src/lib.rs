//! # cswift-config
//!
//! Layered generator configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CSWIFT_*` prefix, `__` as separator)
//! 2. The configuration file passed on the command line (`.json`, `.jsonc` or `.toml`)
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Keys are written in upper snake case and mapped onto the camelCase file
//! layout: `CSWIFT_DOC_COMMENTS__COLLECT` -> `docComments.collect`,
//! `CSWIFT_DECLARATIONS__AUTO_PROPERTY` -> `declarations.autoProperty`.
//!
//! # Usage
//!
//! ```no_run
//! use cswift_config::GeneratorConfig;
//!
//! let config = GeneratorConfig::load(Some("box2d.jsonc".as_ref())).expect("config");
//! println!("writing to {}", config.file_generation.target_path.display());
//! ```

mod declarations;
mod doc_comments;
mod error;
mod file_generation;
pub mod jsonc;

pub use declarations::{
    ConformanceConfig, DeclarationsConfig, FiltersConfig, FirstParamConfig, FormattingConfig, FunctionMapperConfig,
    SymbolCasingConfig,
};
pub use doc_comments::DocCommentsConfig;
pub use error::ConfigError;
pub use file_generation::{DirectoryEntryConfig, FileGenerationConfig};

use std::path::Path;

use cswift_core::formatter::NameFormatter;
use cswift_core::symbol::upper_first;
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
    value::{Uncased, UncasedStr},
};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    #[serde(default)]
    pub declarations: DeclarationsConfig,
    #[serde(default)]
    pub doc_comments: DocCommentsConfig,
    #[serde(default)]
    pub file_generation: FileGenerationConfig,
}

impl GeneratorConfig {
    /// Load and validate configuration from defaults, `path` and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Figment`] if a source fails to parse or extract, and
    /// [`ConfigError::InvalidValue`] if [`validate`](Self::validate) rejects it.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(path)?.extract()?;
        config.validate()?;
        tracing::debug!(
            prefixes = config.declarations.prefixes.len(),
            mappers = config.declarations.functions_to_methods.len(),
            "loaded generator configuration"
        );
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the configuration file cannot be read.
    pub fn figment(path: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            figment = if path.extension().is_some_and(|ext| ext == "toml") {
                figment.merge(Toml::string(&text))
            } else {
                figment.merge(Json::string(&jsonc::strip_comments(&text)))
            };
        }

        Ok(figment.merge(
            Env::prefixed("CSWIFT_")
                .split("__")
                .map(camel_case_key)
                .lowercase(false),
        ))
    }

    /// Check every pattern the generator will compile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let formatting = &self.declarations.swift_symbol_formatting;
        NameFormatter::from_terms(
            formatting.symbol_casing,
            &formatting.capitalize_terms,
            &formatting.patterns_to_split,
            &formatting.snake_case_after_terms,
        )
        .map_err(|error| invalid("declarations.swiftSymbolFormatting", &error))?;

        for (field, patterns) in self.declarations.filters.categories() {
            for pattern in patterns {
                let body = pattern.strip_prefix('!').unwrap_or(pattern);
                Regex::new(&format!("^(?:{body})")).map_err(|error| invalid(field, &error))?;
            }
        }

        for (index, mapper) in self.declarations.functions_to_methods.iter().enumerate() {
            if mapper.c_prefix.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("declarations.functionsToMethods[{index}].cPrefix"),
                    reason: "prefix must not be empty".to_string(),
                });
            }
        }

        for entry in &self.file_generation.directory_structure {
            for pattern in &entry.patterns {
                if let Some(body) = regex_body(pattern) {
                    Regex::new(body).map_err(|error| invalid("fileGeneration.directoryStructure", &error))?;
                }
            }
        }

        Ok(())
    }
}

/// Inner text of a `/regex/` entry, or `None` for a literal.
#[must_use]
pub fn regex_body(entry: &str) -> Option<&str> {
    entry
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
        .filter(|body| !body.is_empty())
}

fn invalid(field: &str, error: &dyn std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: error.to_string(),
    }
}

/// `DOC_COMMENTS.COLLECT` -> `docComments.collect`.
fn camel_case_key(key: &UncasedStr) -> Uncased<'_> {
    key.as_str()
        .split('.')
        .map(|segment| {
            segment
                .split('_')
                .filter(|word| !word.is_empty())
                .enumerate()
                .map(|(i, word)| {
                    let word = word.to_ascii_lowercase();
                    if i == 0 { word } else { upper_first(&word) }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(".")
        .into()
}
