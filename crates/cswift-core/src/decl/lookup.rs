//! Original C name to generated Swift name index.

use std::collections::HashMap;

use super::walker::{DeclVisitor, VisitAction, walk_all};
use super::{CDeclKind, Declaration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    /// Generated name qualified by its enclosing declarations, e.g. `B2BodyType.staticBody`.
    pub swift_name: String,
    pub c_kind: CDeclKind,
}

/// Case-insensitive index of every declaration that carries an original C
/// name.
#[derive(Debug, Clone, Default)]
pub struct DeclLookup {
    entries: HashMap<String, LookupEntry>,
}

impl DeclLookup {
    #[must_use]
    pub fn build(decls: &[Declaration]) -> Self {
        let mut builder = Builder::default();
        walk_all(&mut builder, decls);
        tracing::debug!(entries = builder.lookup.entries.len(), "built symbol lookup");
        builder.lookup
    }

    #[must_use]
    pub fn lookup_c_symbol(&self, c_name: &str) -> Option<&LookupEntry> {
        self.entries.get(&c_name.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Default)]
struct Builder {
    stack: Vec<String>,
    lookup: DeclLookup,
}

impl DeclVisitor for Builder {
    fn visit(&mut self, decl: &Declaration) -> VisitAction {
        let info = decl.info();
        let name = info.name.to_string();
        if let Some(original) = &info.original_name {
            let mut qualified = self.stack.clone();
            qualified.push(name.clone());
            self.lookup.entries.insert(
                original.to_lowercase(),
                LookupEntry {
                    swift_name: qualified.join("."),
                    c_kind: info.c_kind,
                },
            );
        }
        self.stack.push(name);
        VisitAction::Descend
    }

    fn post_visit(&mut self, _decl: &Declaration) {
        self.stack.pop();
    }
}
