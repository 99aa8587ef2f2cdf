use super::*;
use crate::parse_source;

mod files;

fn parse(source: &str) -> CAst {
    parse_source(source, "test.h").expect("source should parse")
}

fn top_level_by_name(ast: &CAst, name: &str) -> NodeId {
    let named = |id: NodeId| match ast.kind(id) {
        CNodeKind::Decl { name, .. } => name.clone(),
        CNodeKind::Typedef { name, .. } => Some(name.clone()),
        _ => None,
    };
    ast.top_level()
        .iter()
        .copied()
        .find(|&id| named(id).as_deref() == Some(name))
        .unwrap_or_else(|| {
            let available: Vec<_> = ast
                .top_level()
                .iter()
                .map(|&id| format!("{}: {:?}", ast.kind(id).label(), named(id)))
                .collect();
            panic!("declaration {name:?} not found. Available:\n{}", available.join("\n"))
        })
}

fn with_quals(text: String, quals: &[String]) -> String {
    if quals.is_empty() { text } else { format!("{text} {}", quals.join(" ")) }
}

/// One line per node along the `ty` links from `id` down to its base type.
fn chain(ast: &CAst, id: NodeId) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = Some(id);
    while let Some(id) = current {
        let (line, next) = match ast.kind(id) {
            CNodeKind::Decl { name, quals, ty } => {
                (with_quals(format!("Decl {}", name.as_deref().unwrap_or("_")), quals), Some(*ty))
            }
            CNodeKind::TypeDecl { declname, quals, ty } => (
                with_quals(format!("TypeDecl {}", declname.as_deref().unwrap_or("_")), quals),
                Some(*ty),
            ),
            CNodeKind::Typedef { name, quals, ty } => (with_quals(format!("Typedef {name}"), quals), Some(*ty)),
            CNodeKind::PtrDecl { quals, ty } => (with_quals("PtrDecl".to_string(), quals), Some(*ty)),
            CNodeKind::ArrayDecl { ty, dim } => (format!("ArrayDecl[{}]", dim.as_deref().unwrap_or("")), Some(*ty)),
            CNodeKind::FuncDecl { params, ty } => (
                format!("FuncDecl/{}", params.as_ref().map_or("-".to_string(), |p| p.len().to_string())),
                Some(*ty),
            ),
            CNodeKind::IdentifierType { names } => (format!("IdentifierType {}", names.join(" ")), None),
            CNodeKind::Struct { name, fields } => (
                format!(
                    "Struct {}{}",
                    name.as_deref().unwrap_or("_"),
                    fields.as_ref().map_or(String::new(), |f| format!("{{{}}}", f.len()))
                ),
                None,
            ),
            CNodeKind::Enum { name, values } => (
                format!(
                    "Enum {}{}",
                    name.as_deref().unwrap_or("_"),
                    values.as_ref().map_or(String::new(), |v| format!("{{{}}}", v.len()))
                ),
                None,
            ),
            other => (other.label().to_string(), None),
        };
        lines.push(line);
        current = next;
    }
    lines
}

/// Parameters of the first `FuncDecl` along the `ty` links from `decl`.
fn params(ast: &CAst, decl: NodeId) -> Vec<NodeId> {
    let mut current = decl;
    loop {
        current = match ast.kind(current) {
            CNodeKind::FuncDecl { params, .. } => return params.clone().unwrap_or_default(),
            CNodeKind::Decl { ty, .. }
            | CNodeKind::TypeDecl { ty, .. }
            | CNodeKind::Typedef { ty, .. }
            | CNodeKind::PtrDecl { ty, .. }
            | CNodeKind::ArrayDecl { ty, .. } => *ty,
            other => panic!("no function declarator below {}", other.label()),
        };
    }
}
