//! Pre/post-order traversal of declaration trees.

use super::Declaration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitAction {
    Descend,
    SkipChildren,
}

pub trait DeclVisitor {
    fn visit(&mut self, decl: &Declaration) -> VisitAction;

    /// Runs after the children, whether or not they were visited.
    fn post_visit(&mut self, _decl: &Declaration) {}
}

pub trait DeclVisitorMut {
    fn visit_mut(&mut self, decl: &mut Declaration) -> VisitAction;

    fn post_visit_mut(&mut self, _decl: &mut Declaration) {}
}

/// Adapts a closure into a visitor that always descends.
pub struct FnVisitor<F>(pub F);

impl<F: FnMut(&Declaration)> DeclVisitor for FnVisitor<F> {
    fn visit(&mut self, decl: &Declaration) -> VisitAction {
        (self.0)(decl);
        VisitAction::Descend
    }
}

impl<F: FnMut(&mut Declaration)> DeclVisitorMut for FnVisitor<F> {
    fn visit_mut(&mut self, decl: &mut Declaration) -> VisitAction {
        (self.0)(decl);
        VisitAction::Descend
    }
}

pub fn walk<V: DeclVisitor + ?Sized>(visitor: &mut V, decl: &Declaration) {
    if visitor.visit(decl) == VisitAction::Descend {
        for child in decl.children() {
            walk(visitor, child);
        }
    }
    visitor.post_visit(decl);
}

pub fn walk_all<V: DeclVisitor + ?Sized>(visitor: &mut V, decls: &[Declaration]) {
    for decl in decls {
        walk(visitor, decl);
    }
}

pub fn walk_mut<V: DeclVisitorMut + ?Sized>(visitor: &mut V, decl: &mut Declaration) {
    if visitor.visit_mut(decl) == VisitAction::Descend {
        for child in decl.children_mut() {
            walk_mut(visitor, child);
        }
    }
    visitor.post_visit_mut(decl);
}

pub fn walk_all_mut<V: DeclVisitorMut + ?Sized>(visitor: &mut V, decls: &mut [Declaration]) {
    for decl in decls {
        walk_mut(visitor, decl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{AccessLevel, DeclInfo, Extension, MemberFunction};
    use crate::symbol::CompoundSymbolName;
    use pretty_assertions::assert_eq;

    fn tree() -> Vec<Declaration> {
        let mut ext = Extension::new(
            DeclInfo::new(CompoundSymbolName::from_parts(["B2World"])),
            AccessLevel::Public,
        );
        for name in ["step", "destroy"] {
            ext.members.push(Declaration::Function(MemberFunction::new(DeclInfo::new(
                CompoundSymbolName::from_parts([name]),
            ))));
        }
        vec![Declaration::Extension(ext)]
    }

    #[derive(Default)]
    struct Trace {
        events: Vec<String>,
        skip: bool,
    }

    impl DeclVisitor for Trace {
        fn visit(&mut self, decl: &Declaration) -> VisitAction {
            self.events.push(format!("visit {}", decl.name()));
            if self.skip {
                VisitAction::SkipChildren
            } else {
                VisitAction::Descend
            }
        }

        fn post_visit(&mut self, decl: &Declaration) {
            self.events.push(format!("post {}", decl.name()));
        }
    }

    #[test]
    fn visits_pre_and_post_order() {
        let mut trace = Trace::default();
        walk_all(&mut trace, &tree());
        assert_eq!(
            trace.events,
            [
                "visit B2World",
                "visit step",
                "post step",
                "visit destroy",
                "post destroy",
                "post B2World",
            ]
        );
    }

    #[test]
    fn skip_children_still_posts() {
        let mut trace = Trace {
            skip: true,
            ..Trace::default()
        };
        walk_all(&mut trace, &tree());
        assert_eq!(trace.events, ["visit B2World", "post B2World"]);
    }

    #[test]
    fn mutable_walk_reaches_members() {
        let mut decls = tree();
        walk_all_mut(
            &mut FnVisitor(|decl: &mut Declaration| {
                decl.info_mut().original_name = Some(decl.name().to_string());
            }),
            &mut decls,
        );
        let mut names = Vec::new();
        walk_all(
            &mut FnVisitor(|decl: &Declaration| names.push(decl.info().original_name.clone())),
            &decls,
        );
        assert_eq!(
            names,
            [
                Some("B2World".to_string()),
                Some("step".to_string()),
                Some("destroy".to_string()),
            ]
        );
    }
}
