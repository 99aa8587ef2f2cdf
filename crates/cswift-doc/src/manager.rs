//! Collection and formatting passes over a declaration list.

use cswift_core::decl::{DeclLookup, Declaration, walk_all_mut, walker::FnVisitor};

use crate::DocError;
use crate::cache::DocCommentCache;
use crate::flavor::{DocFlavor, DoxygenFlavor};
use crate::formatter::format_comment;

/// Runs the doc-comment passes of a generation, each gated by its toggle.
pub struct DocCommentManager {
    flavors: Vec<Box<dyn DocFlavor>>,
    collect: bool,
    format: bool,
}

impl std::fmt::Debug for DocCommentManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocCommentManager")
            .field("flavors", &self.flavors.len())
            .field("collect", &self.collect)
            .field("format", &self.format)
            .finish()
    }
}

impl DocCommentManager {
    /// Manager with the built-in Doxygen flavor.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::Regex`] if a flavor's patterns fail to compile.
    pub fn new(collect: bool, format: bool) -> Result<Self, DocError> {
        Ok(Self::with_flavors(vec![Box::new(DoxygenFlavor::new()?)], collect, format))
    }

    #[must_use]
    pub fn with_flavors(flavors: Vec<Box<dyn DocFlavor>>, collect: bool, format: bool) -> Self {
        Self {
            flavors,
            collect,
            format,
        }
    }

    #[must_use]
    pub const fn collects(&self) -> bool {
        self.collect
    }

    /// Markers of every flavor, in flavor order.
    #[must_use]
    pub fn markers(&self) -> Vec<&'static str> {
        self.flavors.iter().flat_map(|flavor| flavor.markers().iter().copied()).collect()
    }

    /// Attach source comments to every declaration that has an origin.
    pub fn populate(&self, decls: &mut [Declaration]) {
        if !self.collect {
            return;
        }
        let cache = DocCommentCache::load_for(decls, &self.markers());
        cache.populate(decls);
    }

    /// Rewrite every attached comment through each flavor, then clean up its
    /// whitespace.
    pub fn format(&self, decls: &mut [Declaration]) {
        if !self.format {
            return;
        }
        let lookup = DeclLookup::build(decls);
        walk_all_mut(
            &mut FnVisitor(|decl: &mut Declaration| {
                let info = decl.info_mut();
                if let Some(comment) = info.doc_comment.take() {
                    let rewritten = self
                        .flavors
                        .iter()
                        .fold(comment, |comment, flavor| flavor.transform(&comment, &lookup));
                    info.doc_comment = Some(format_comment(&rewritten));
                }
            }),
            decls,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cswift_core::c_ast::{CAst, CNodeKind};
    use cswift_core::decl::{AccessLevel, CDeclKind, DeclInfo, Extension, MemberFunction, SourceLocation};
    use cswift_core::doc_block::DocCommentBlock;
    use cswift_core::symbol::CompoundSymbolName;
    use pretty_assertions::assert_eq;

    fn world_with_step(path: &std::path::Path) -> Vec<Declaration> {
        let node = CAst::new().push(CNodeKind::IdentifierType { names: vec![] }, None);
        let mut info = DeclInfo::new(CompoundSymbolName::from_camel_case("step"))
            .with_original("b2World_Step", CDeclKind::Func)
            .with_node(node);
        info.origin = Some(SourceLocation {
            file: path.to_path_buf(),
            line: 3,
            column: Some(6),
        });
        let mut world = Extension::new(
            DeclInfo::new(CompoundSymbolName::from_pascal_case("B2World")).with_original("b2WorldId", CDeclKind::Struct),
            AccessLevel::Public,
        );
        world.members.push(Declaration::Function(MemberFunction::new(info)));
        vec![Declaration::Extension(world)]
    }

    fn step_doc(decls: &[Declaration]) -> Option<String> {
        decls[0].children()[0]
            .info()
            .doc_comment
            .as_ref()
            .map(|doc| doc.text().to_string())
    }

    #[test]
    fn collect_then_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.h");
        std::fs::write(
            &path,
            "/// \\brief Simulate one step of \\ref b2WorldId.\n/// @param timeStep Seconds to simulate.\nvoid b2World_Step(b2WorldId worldId, float timeStep);\n",
        )
        .unwrap();

        let manager = DocCommentManager::new(true, true).unwrap();
        let mut decls = world_with_step(&path);
        manager.populate(&mut decls);
        manager.format(&mut decls);

        assert_eq!(
            step_doc(&decls).as_deref(),
            Some("Simulate one step of `B2World`.\n- param timeStep: Seconds to simulate.")
        );
    }

    #[test]
    fn toggles_disable_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.h");
        std::fs::write(&path, "\n/// Docs.\nvoid b2World_Step(b2WorldId worldId);\n").unwrap();

        let mut decls = world_with_step(&path);
        DocCommentManager::new(false, true).unwrap().populate(&mut decls);
        assert_eq!(step_doc(&decls), None);

        DocCommentManager::new(true, false).unwrap().populate(&mut decls);
        assert_eq!(step_doc(&decls).as_deref(), Some(" Docs."));

        decls[0].children_mut()[0].info_mut().doc_comment = Some(DocCommentBlock::from_text("  @note raw"));
        DocCommentManager::new(true, false).unwrap().format(&mut decls);
        assert_eq!(step_doc(&decls).as_deref(), Some("  @note raw"));
    }

    #[test]
    fn markers_come_from_flavors() {
        let manager = DocCommentManager::new(true, true).unwrap();
        assert_eq!(manager.markers(), ["//!<", "//!", "///", "/**"]);
    }
}
