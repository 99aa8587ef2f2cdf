//! Declaration tallies logged around the merge stage.

use cswift_core::decl::{DeclVisitor, Declaration, VisitAction, walk_all};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeclCounts {
    pub extensions: usize,
    pub methods: usize,
    pub properties: usize,
    pub typealiases: usize,
}

impl DeclCounts {
    /// Count every declaration in `decls`, nested members included.
    #[must_use]
    pub fn count(decls: &[Declaration]) -> Self {
        let mut counts = Self::default();
        walk_all(&mut counts, decls);
        counts
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.extensions + self.methods + self.properties + self.typealiases
    }

    pub fn log(&self, stage: &str) {
        tracing::info!(
            stage,
            extensions = self.extensions,
            methods = self.methods,
            properties = self.properties,
            typealiases = self.typealiases,
            "declaration counts"
        );
    }
}

impl DeclVisitor for DeclCounts {
    fn visit(&mut self, decl: &Declaration) -> VisitAction {
        match decl {
            Declaration::Extension(_) => self.extensions += 1,
            Declaration::Function(_) => self.methods += 1,
            Declaration::Variable(_) => self.properties += 1,
            Declaration::TypeAlias(_) => self.typealiases += 1,
        }
        VisitAction::Descend
    }
}
