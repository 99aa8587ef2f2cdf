//! Assignment of declarations to Swift files under the target directory.

use std::path::PathBuf;

use cswift_config::{FileGenerationConfig, regex_body};
use cswift_core::decl::Declaration;
use regex::{Regex, RegexBuilder};

use crate::error::EmitError;
use crate::file::SwiftFile;

/// Replace characters that are unsafe in a file or folder name with `_`.
/// A `..` component becomes `_`.
#[must_use]
pub fn escape_path_component(component: &str) -> String {
    if component == ".." {
        return "_".to_string();
    }
    component
        .chars()
        .map(|c| if c.is_alphanumeric() || matches!(c, '_' | '.' | ' ' | '+' | '-') { c } else { '_' })
        .collect()
}

#[derive(Debug, Clone)]
enum FilePattern {
    Exact(String),
    Regex(Regex),
}

impl FilePattern {
    fn parse(entry: &str) -> Result<Self, EmitError> {
        let Some(body) = regex_body(entry) else {
            return Ok(Self::Exact(entry.to_string()));
        };
        RegexBuilder::new(&format!("^(?:{body})"))
            .case_insensitive(true)
            .build()
            .map(Self::Regex)
            .map_err(|source| EmitError::InvalidPattern {
                pattern: entry.to_string(),
                source,
            })
    }

    fn matches(&self, file_name: &str) -> bool {
        match self {
            Self::Exact(name) => name == file_name,
            Self::Regex(regex) => regex.is_match(file_name),
        }
    }
}

#[derive(Debug, Clone)]
struct DirectoryEntry {
    components: Vec<String>,
    patterns: Vec<FilePattern>,
}

/// File naming and sub-directory rules from `fileGeneration`.
///
/// Paths produced here are relative to the output target's destination.
#[derive(Debug, Clone, Default)]
pub struct DirectoryLayout {
    file_suffix: String,
    header_lines: Vec<String>,
    imports: Vec<String>,
    entries: Vec<DirectoryEntry>,
}

impl DirectoryLayout {
    /// # Errors
    ///
    /// Returns [`EmitError::InvalidPattern`] when a `/regex/` entry does not
    /// compile.
    pub fn from_config(config: &FileGenerationConfig) -> Result<Self, EmitError> {
        let entries = config
            .directory_structure
            .iter()
            .map(|entry| {
                Ok(DirectoryEntry {
                    components: entry
                        .path
                        .split('/')
                        .filter(|component| !component.is_empty())
                        .map(escape_path_component)
                        .collect(),
                    patterns: entry
                        .patterns
                        .iter()
                        .map(|pattern| FilePattern::parse(pattern))
                        .collect::<Result<_, _>>()?,
                })
            })
            .collect::<Result<_, EmitError>>()?;

        let header_lines = if config.file_header.is_empty() {
            Vec::new()
        } else {
            config.file_header.lines().map(str::to_string).collect()
        };

        Ok(Self {
            file_suffix: config.global_file_suffix.clone(),
            header_lines,
            imports: config.imports.clone(),
            entries,
        })
    }

    /// `<Name><suffix>.swift`, escaped.
    #[must_use]
    pub fn file_name_for(&self, decl: &Declaration) -> String {
        escape_path_component(&format!("{}{}.swift", decl.name(), self.file_suffix))
    }

    /// Folder of the entry with the most path components that accepts
    /// `file_name`; the first such entry wins a tie.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::InvalidPathComponent`] when the chosen folder has
    /// a component that is not alphanumeric.
    pub fn folder_for(&self, file_name: &str) -> Result<PathBuf, EmitError> {
        let mut longest: &[String] = &[];
        for entry in &self.entries {
            if entry.components.len() > longest.len()
                && entry.patterns.iter().any(|pattern| pattern.matches(file_name))
            {
                longest = &entry.components;
            }
        }

        if let Some(component) = longest
            .iter()
            .find(|component| !component.chars().all(char::is_alphanumeric))
        {
            return Err(EmitError::InvalidPathComponent {
                file: file_name.to_string(),
                component: component.clone(),
            });
        }
        Ok(longest.iter().collect())
    }

    /// # Errors
    ///
    /// See [`folder_for`](Self::folder_for).
    pub fn path_for(&self, decl: &Declaration) -> Result<PathBuf, EmitError> {
        let file_name = self.file_name_for(decl);
        Ok(self.folder_for(&file_name)?.join(file_name))
    }

    /// Group `decls` into files, in the order each path is first seen.
    /// Declarations that print nothing do not create a file.
    ///
    /// # Errors
    ///
    /// See [`folder_for`](Self::folder_for).
    pub fn make_files(&self, decls: Vec<Declaration>) -> Result<Vec<SwiftFile>, EmitError> {
        let mut files: Vec<SwiftFile> = Vec::new();
        for decl in decls {
            if !crate::printer::has_output(&decl) {
                tracing::debug!(name = %decl.name(), "skipping declaration with no printable content");
                continue;
            }
            let path = self.path_for(&decl)?;
            if let Some(file) = files.iter_mut().find(|file| file.path == path) {
                file.declarations.push(decl);
            } else {
                let mut file = SwiftFile::new(path, self.header_lines.clone(), self.imports.clone());
                file.declarations.push(decl);
                files.push(file);
            }
        }
        Ok(files)
    }
}
