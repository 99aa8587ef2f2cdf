//! # cswift-emit
//!
//! Swift surface syntax for generated declarations, and their placement on
//! disk.
//!
//! - [`stream`]: indentation-aware text writer
//! - [`printer`]: renders [`Declaration`] trees
//! - [`placement`]: file naming and the `directoryStructure` rules
//! - [`file`]: a generated file with its header and imports
//! - [`target`]: disk and stdout destinations

pub mod error;
pub mod file;
pub mod placement;
pub mod printer;
pub mod stream;
pub mod target;

pub use error::EmitError;
pub use file::SwiftFile;
pub use placement::DirectoryLayout;
pub use target::{DiskTarget, OutputTarget, StdoutTarget};

use cswift_config::FileGenerationConfig;
use cswift_core::decl::Declaration;

/// What an [`emit`] call wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    pub files: usize,
    pub declarations: usize,
}

/// Lay out `decls` per `config` and hand each rendered file to `target`.
///
/// # Errors
///
/// Returns [`EmitError`] when a directory pattern is invalid, a chosen
/// folder has a non-alphanumeric component, or the target fails to write.
pub fn emit(
    decls: Vec<Declaration>,
    config: &FileGenerationConfig,
    target: &mut dyn OutputTarget,
) -> Result<EmitSummary, EmitError> {
    let layout = DirectoryLayout::from_config(config)?;
    let files = layout.make_files(decls)?;

    target.prepare()?;
    let mut summary = EmitSummary::default();
    for file in &files {
        target.write_file(file, &file.render())?;
        summary.files += 1;
        summary.declarations += file.declarations.len();
    }

    tracing::info!(files = summary.files, declarations = summary.declarations, "emitted Swift files");
    Ok(summary)
}
