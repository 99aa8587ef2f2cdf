//! Per-file doc-comment index and declaration association.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use cswift_core::decl::{DeclInfo, Declaration, walk_all, walk_all_mut, walker::FnVisitor};
use cswift_core::doc_block::DocCommentBlock;

use crate::DocError;
use crate::lexer::scan_doc_comments;

/// Doc comments of one source file, indexed by every line they span.
#[derive(Debug, Clone, Default)]
pub struct CachedFile {
    comments: Vec<DocCommentBlock>,
    by_line: HashMap<usize, usize>,
}

impl CachedFile {
    #[must_use]
    pub fn new(comments: Vec<DocCommentBlock>) -> Self {
        let mut by_line = HashMap::new();
        for (index, comment) in comments.iter().enumerate() {
            for line in comment.line..comment.end_line() {
                by_line.insert(line, index);
            }
        }
        Self { comments, by_line }
    }

    #[must_use]
    pub fn comment_on_line(&self, line: usize) -> Option<&DocCommentBlock> {
        self.by_line.get(&line).map(|&index| &self.comments[index])
    }

    #[must_use]
    pub fn comments(&self) -> &[DocCommentBlock] {
        &self.comments
    }
}

/// Read-only cache of every source file referenced by a declaration list.
#[derive(Debug, Clone, Default)]
pub struct DocCommentCache {
    files: HashMap<PathBuf, CachedFile>,
}

impl DocCommentCache {
    /// Read and scan every file named by a declaration origin, once.
    ///
    /// Files that cannot be read are left out, so their declarations get no
    /// comment.
    #[must_use]
    pub fn load_for(decls: &[Declaration], markers: &[&str]) -> Self {
        let mut paths = BTreeSet::new();
        walk_all(
            &mut FnVisitor(|decl: &Declaration| {
                if let Some(origin) = &decl.info().origin {
                    paths.insert(origin.file.clone());
                }
            }),
            decls,
        );

        let mut cache = Self::default();
        for path in paths {
            match read_file(&path, markers) {
                Ok(file) => {
                    tracing::debug!(path = %path.display(), comments = file.comments.len(), "scanned doc comments");
                    cache.files.insert(path, file);
                }
                Err(error) => tracing::debug!(%error, "skipping doc comments for unreadable source"),
            }
        }
        cache
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, file: CachedFile) {
        self.files.insert(path.into(), file);
    }

    #[must_use]
    pub fn file(&self, path: &Path) -> Option<&CachedFile> {
        self.files.get(path)
    }

    /// Attach the associated comment to every declaration in the tree.
    pub fn populate(&self, decls: &mut [Declaration]) {
        walk_all_mut(
            &mut FnVisitor(|decl: &mut Declaration| {
                let comment = self.find_for(decl.info());
                decl.info_mut().doc_comment = comment;
            }),
            decls,
        );
    }

    /// Comment for a declaration: the one on its own line, or the contiguous
    /// run of comments directly above it.
    ///
    /// Declarations without an origin or an original C node never get one.
    #[must_use]
    pub fn find_for(&self, info: &DeclInfo) -> Option<DocCommentBlock> {
        info.original_node?;
        let origin = info.origin.as_ref()?;
        let file = self.files.get(&origin.file)?;

        if let Some(inline) = file.comment_on_line(origin.line) {
            return Some(inline.normalize_indentation());
        }

        let mut collected = Vec::new();
        let mut line = origin.line;
        while line > 0 {
            line -= 1;
            let Some(comment) = file.comment_on_line(line) else {
                break;
            };
            collected.push(comment.clone());
            if comment.is_multi_lined() {
                break;
            }
        }
        collected.reverse();

        DocCommentBlock::merge_list(&collected).map(|merged| merged.normalize_indentation().trim_blank_lines())
    }
}

fn read_file(path: &Path, markers: &[&str]) -> Result<CachedFile, DocError> {
    let text = std::fs::read_to_string(path).map_err(|source| DocError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(CachedFile::new(scan_doc_comments(path, &text, markers)))
}
