//! A generated Swift source file.

use std::path::PathBuf;

use cswift_core::decl::Declaration;

use crate::printer::write_declaration;
use crate::stream::SyntaxStream;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftFile {
    /// Relative to the output destination.
    pub path: PathBuf,
    pub header_lines: Vec<String>,
    pub imports: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl SwiftFile {
    #[must_use]
    pub const fn new(path: PathBuf, header_lines: Vec<String>, imports: Vec<String>) -> Self {
        Self {
            path,
            header_lines,
            imports,
            declarations: Vec::new(),
        }
    }

    /// Header, imports, then declarations separated by blank lines.
    #[must_use]
    pub fn render(&self) -> String {
        let mut stream = SyntaxStream::new();
        if !self.header_lines.is_empty() {
            for line in &self.header_lines {
                stream.line(line);
            }
            stream.line("");
        }
        if !self.imports.is_empty() {
            for module in &self.imports {
                stream.line(&format!("import {module}"));
            }
            stream.line("");
        }
        for (index, decl) in self.declarations.iter().enumerate() {
            if index > 0 {
                stream.line("");
            }
            write_declaration(&mut stream, decl);
        }
        stream.finish()
    }
}
