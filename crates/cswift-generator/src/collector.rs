//! Candidate collection over the C AST.

use cswift_core::c_ast::{CAst, CNodeKind, NodeId};

/// Struct, enum and function nodes whose C name starts with one of
/// `prefixes`, in source order.
///
/// The walk descends through typedefs, declarations and declarators but
/// never into a struct, enum or function it reaches, so fields and
/// parameters are not collected on their own.
#[must_use]
pub fn collect_candidates<S: AsRef<str>>(ast: &CAst, prefixes: &[S]) -> Vec<NodeId> {
    let included = |name: &str| prefixes.iter().any(|prefix| name.starts_with(prefix.as_ref()));

    let mut candidates = Vec::new();
    let mut stack: Vec<NodeId> = ast.root().into_iter().collect();
    while let Some(id) = stack.pop() {
        match ast.kind(id) {
            CNodeKind::Struct { name, .. } | CNodeKind::Enum { name, .. } => {
                if name.as_deref().is_some_and(included) {
                    candidates.push(id);
                }
            }
            CNodeKind::FuncDecl { ty, .. } => {
                if let CNodeKind::TypeDecl {
                    declname: Some(name), ..
                } = ast.kind(*ty)
                    && included(name)
                {
                    candidates.push(id);
                }
            }
            _ => stack.extend(ast.children(id).into_iter().rev()),
        }
    }

    tracing::debug!(count = candidates.len(), "collected declaration candidates");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(ast: &CAst, ids: &[NodeId]) -> Vec<String> {
        ids.iter()
            .map(|&id| format!("{} {}", ast.kind(id).label(), ast.declared_name(id).unwrap_or("?")))
            .collect()
    }

    #[test]
    fn collects_prefixed_symbols_in_source_order() {
        let ast = cswift_parser::parse_source(
            r"
typedef struct b2Vec2 { float x, y; } b2Vec2;
typedef enum b2BodyType { b2_staticBody, b2_dynamicBody } b2BodyType;
struct other { int a; };
b2Vec2 b2World_GetGravity(b2WorldId worldId);
void helper(void);
",
            "collect.h",
        )
        .unwrap();

        let found = collect_candidates(&ast, &["b2"]);
        assert_eq!(
            labels(&ast, &found),
            ["Struct b2Vec2", "Enum b2BodyType", "FuncDecl b2World_GetGravity"]
        );
    }

    #[test]
    fn function_pointer_fields_and_params_are_not_collected() {
        let ast = cswift_parser::parse_source(
            r"
typedef struct b2WorldDef { void (*b2Callback)(int value); } b2WorldDef;
void b2Run(void (*b2Inner)(void));
",
            "nested.h",
        )
        .unwrap();

        let found = collect_candidates(&ast, &["b2"]);
        assert_eq!(labels(&ast, &found), ["Struct b2WorldDef", "FuncDecl b2Run"]);
    }

    #[test]
    fn pointer_returning_functions_are_skipped() {
        let ast = cswift_parser::parse_source("void* b2Alloc(int size);", "alloc.h").unwrap();
        assert!(collect_candidates(&ast, &["b2"]).is_empty());
    }
}
