//! Where generated files end up.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::EmitError;
use crate::file::SwiftFile;

/// Receives rendered files.
pub trait OutputTarget {
    /// Called once before any file is written.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::Io`] when the target cannot be prepared.
    fn prepare(&mut self) -> Result<(), EmitError> {
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`EmitError::Io`] when the file cannot be written.
    fn write_file(&mut self, file: &SwiftFile, contents: &str) -> Result<(), EmitError>;
}

/// Writes files below `destination`, creating directories as needed.
#[derive(Debug, Clone)]
pub struct DiskTarget {
    destination: PathBuf,
    clean: bool,
}

impl DiskTarget {
    /// With `clean`, the destination's existing contents are removed first.
    #[must_use]
    pub fn new(destination: impl Into<PathBuf>, clean: bool) -> Self {
        Self {
            destination: destination.into(),
            clean,
        }
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> EmitError + '_ {
    move |source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl OutputTarget for DiskTarget {
    fn prepare(&mut self) -> Result<(), EmitError> {
        if self.clean && self.destination.exists() {
            tracing::info!(path = %self.destination.display(), "clearing output directory");
            std::fs::remove_dir_all(&self.destination).map_err(io_error(&self.destination))?;
        }
        std::fs::create_dir_all(&self.destination).map_err(io_error(&self.destination))
    }

    fn write_file(&mut self, file: &SwiftFile, contents: &str) -> Result<(), EmitError> {
        let path = self.destination.join(&file.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        tracing::debug!(path = %path.display(), "writing file");
        std::fs::write(&path, contents).map_err(io_error(&path))
    }
}

/// Prints each file after a `[Create file at: <path>]` banner.
#[derive(Debug)]
pub struct StdoutTarget<W> {
    destination: PathBuf,
    out: W,
}

impl StdoutTarget<std::io::Stdout> {
    #[must_use]
    pub fn stdout(destination: impl Into<PathBuf>) -> Self {
        Self::new(destination, std::io::stdout())
    }
}

impl<W: Write> StdoutTarget<W> {
    #[must_use]
    pub fn new(destination: impl Into<PathBuf>, out: W) -> Self {
        Self {
            destination: destination.into(),
            out,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputTarget for StdoutTarget<W> {
    fn write_file(&mut self, file: &SwiftFile, contents: &str) -> Result<(), EmitError> {
        let path = self.destination.join(&file.path);
        writeln!(self.out, "[Create file at: {}]", path.display())
            .and_then(|()| self.out.write_all(contents.as_bytes()))
            .map_err(io_error(&path))
    }
}
