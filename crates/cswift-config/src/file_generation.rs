//! Output file layout settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_target_path() -> PathBuf {
    PathBuf::from("Generated")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileGenerationConfig {
    #[serde(default = "default_target_path")]
    pub target_path: PathBuf,

    /// Appended to every file stem, e.g. `+Ext` gives `B2Vec2+Ext.swift`.
    #[serde(default)]
    pub global_file_suffix: String,

    /// Modules imported at the top of every file.
    #[serde(default)]
    pub imports: Vec<String>,

    #[serde(default)]
    pub directory_structure: Vec<DirectoryEntryConfig>,

    /// Text written above the imports of every file.
    #[serde(default)]
    pub file_header: String,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            target_path: default_target_path(),
            global_file_suffix: String::new(),
            imports: Vec::new(),
            directory_structure: Vec::new(),
            file_header: String::new(),
        }
    }
}

/// A sub-directory and the file names (or `/regex/` patterns) placed in it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryEntryConfig {
    pub path: String,
    #[serde(rename = "match", default)]
    pub patterns: Vec<String>,
}
