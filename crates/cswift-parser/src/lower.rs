//! Lowering from tree-sitter C syntax into the [`CAst`] arena.
//!
//! tree-sitter nests declarators the way they are written (`*f(void)` is a
//! pointer declarator around a function declarator) while the arena nests
//! them by type (a function returning a pointer). Declarators are therefore
//! read outside-in into a list of [`Derivation`]s and then applied, in that
//! order, on top of the innermost `TypeDecl`.

use std::path::{Path, PathBuf};

use ast_grep_core::{Doc, Node};
use cswift_core::c_ast::{CAst, CNodeKind, Coord, NodeId};

use crate::ParserError;

const TYPE_SPECIFIERS: &[&str] = &[
    "primitive_type",
    "sized_type_specifier",
    "type_identifier",
    "struct_specifier",
    "union_specifier",
    "enum_specifier",
    "macro_type_specifier",
];

const DECLARATORS: &[&str] = &[
    "identifier",
    "field_identifier",
    "type_identifier",
    "primitive_type",
    "init_declarator",
    "pointer_declarator",
    "function_declarator",
    "array_declarator",
    "parenthesized_declarator",
    "abstract_pointer_declarator",
    "abstract_function_declarator",
    "abstract_array_declarator",
    "abstract_parenthesized_declarator",
];

/// Containers whose children are lowered as if they were top level.
const TRANSPARENT: &[&str] = &[
    "preproc_if",
    "preproc_ifdef",
    "preproc_else",
    "preproc_elif",
    "preproc_elifdef",
    "linkage_specification",
    "declaration_list",
];

fn kind_is<D: Doc>(node: &Node<D>, kinds: &[&str]) -> bool {
    kinds.contains(&node.kind().as_ref())
}

/// Lower a `translation_unit` into a fresh arena.
pub(crate) fn lower<D: Doc>(root: &Node<D>, file: &Path) -> Result<CAst, ParserError> {
    if let Some(error) = first_error(root) {
        let snippet: String = error.text().lines().next().unwrap_or_default().chars().take(40).collect();
        return Err(ParserError::ParseFailed {
            file: file.to_path_buf(),
            line: error.start_pos().line() + 1,
            snippet,
        });
    }

    let mut lowering = Lowering {
        ast: CAst::new(),
        file: file.to_path_buf(),
    };
    let mut ext = Vec::new();
    lowering.external_items(root, &mut ext);
    let coord = lowering.coord(root);
    lowering.ast.push_root(ext, Some(coord));
    Ok(lowering.ast)
}

fn first_error<'r, D: Doc>(root: &Node<'r, D>) -> Option<Node<'r, D>> {
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if node.kind().as_ref() == "ERROR" {
            return Some(node);
        }
        let mut children: Vec<_> = node.children().collect();
        children.reverse();
        stack.extend(children);
    }
    None
}

/// Declared-type construction step, outermost first.
enum Derivation {
    Pointer(Vec<String>),
    Array(Option<String>),
    Function(Option<Vec<NodeId>>),
}

/// Type specifier, qualifiers and declarators of one declaration-like node.
struct Specifiers<'r, D: Doc> {
    ty: Option<Node<'r, D>>,
    quals: Vec<String>,
    declarators: Vec<Node<'r, D>>,
}

impl<'r, D: Doc> Specifiers<'r, D> {
    fn read(node: &Node<'r, D>) -> Self {
        let mut ty = None;
        let mut quals = Vec::new();
        let mut declarators = Vec::new();
        for child in node.children() {
            if child.kind().as_ref() == "type_qualifier" {
                quals.push(child.text().to_string());
            } else if ty.is_none() && kind_is(&child, TYPE_SPECIFIERS) {
                ty = Some(child);
            } else if ty.is_some() && kind_is(&child, DECLARATORS) {
                declarators.push(child);
            }
        }
        Self { ty, quals, declarators }
    }
}

struct Lowering {
    ast: CAst,
    file: PathBuf,
}

impl Lowering {
    fn coord<D: Doc>(&self, node: &Node<D>) -> Coord {
        let start = node.start_pos();
        Coord {
            file: self.file.clone(),
            line: start.line() + 1,
            column: start.column(node) + 1,
        }
    }

    fn push<D: Doc>(&mut self, kind: CNodeKind, node: &Node<D>) -> NodeId {
        let coord = self.coord(node);
        self.ast.push(kind, Some(coord))
    }

    fn external_items<D: Doc>(&mut self, parent: &Node<D>, ext: &mut Vec<NodeId>) {
        for child in parent.children() {
            match child.kind().as_ref() {
                "declaration" | "function_definition" => ext.extend(self.declarations(&child)),
                "type_definition" => ext.extend(self.typedefs(&child)),
                "struct_specifier" | "union_specifier" | "enum_specifier" => {
                    let ty = self.specifier(&child, true);
                    ext.push(self.push(
                        CNodeKind::Decl {
                            name: None,
                            quals: Vec::new(),
                            ty,
                        },
                        &child,
                    ));
                }
                kind if TRANSPARENT.contains(&kind) => self.external_items(&child, ext),
                _ => {}
            }
        }
    }

    /// One `Decl` per declarator. A declaration without declarators
    /// (`struct S { ... };`) yields one unnamed `Decl` around its type.
    fn declarations<D: Doc>(&mut self, node: &Node<D>) -> Vec<NodeId> {
        let spec = Specifiers::read(node);
        let Some(ty_node) = &spec.ty else {
            return Vec::new();
        };

        if spec.declarators.is_empty() {
            let ty = self.specifier(ty_node, true);
            let decl = CNodeKind::Decl {
                name: None,
                quals: spec.quals,
                ty,
            };
            return vec![self.push(decl, node)];
        }

        let mut decls = Vec::with_capacity(spec.declarators.len());
        for (index, declarator) in spec.declarators.iter().enumerate() {
            let base = self.specifier(ty_node, index == 0);
            let mut derivations = Vec::new();
            let name = self.declarator(declarator, &mut derivations);
            let ty = self.apply(name.clone(), base, &spec.quals, derivations, node);
            let decl = CNodeKind::Decl {
                name,
                quals: spec.quals.clone(),
                ty,
            };
            decls.push(self.push(decl, node));
        }
        decls
    }

    fn typedefs<D: Doc>(&mut self, node: &Node<D>) -> Vec<NodeId> {
        let spec = Specifiers::read(node);
        let Some(ty_node) = &spec.ty else {
            return Vec::new();
        };

        let mut typedefs = Vec::new();
        for (index, declarator) in spec.declarators.iter().enumerate() {
            let base = self.specifier(ty_node, index == 0);
            let mut derivations = Vec::new();
            let Some(name) = self.declarator(declarator, &mut derivations) else {
                continue;
            };
            let ty = self.apply(Some(name.clone()), base, &spec.quals, derivations, node);
            let typedef = CNodeKind::Typedef {
                name,
                quals: spec.quals.clone(),
                ty,
            };
            typedefs.push(self.push(typedef, node));
        }
        typedefs
    }

    /// Walk a declarator from the outside in, recording derivations, and
    /// return the declared name if there is one.
    fn declarator<D: Doc>(&mut self, node: &Node<D>, derivations: &mut Vec<Derivation>) -> Option<String> {
        let mut current = node.clone();
        loop {
            let next = match current.kind().as_ref() {
                "identifier" | "field_identifier" | "type_identifier" | "primitive_type" => {
                    return Some(current.text().to_string());
                }
                "pointer_declarator" | "abstract_pointer_declarator" => {
                    let quals = current
                        .children()
                        .filter(|c| c.kind().as_ref() == "type_qualifier")
                        .map(|c| c.text().to_string())
                        .collect();
                    derivations.push(Derivation::Pointer(quals));
                    current.field("declarator")
                }
                "function_declarator" | "abstract_function_declarator" => {
                    let params = current.field("parameters").and_then(|list| self.parameters(&list));
                    derivations.push(Derivation::Function(params));
                    current.field("declarator")
                }
                "array_declarator" | "abstract_array_declarator" => {
                    let dim = current.field("size").map(|size| size.text().trim().to_string());
                    derivations.push(Derivation::Array(dim));
                    current.field("declarator")
                }
                "parenthesized_declarator" | "abstract_parenthesized_declarator" => {
                    current.children().find(|c| kind_is(c, DECLARATORS))
                }
                "init_declarator" => current.field("declarator"),
                _ => None,
            };
            current = next?;
        }
    }

    /// Build the `TypeDecl` and wrap it in `derivations`, returning the
    /// outermost node.
    fn apply<D: Doc>(
        &mut self,
        declname: Option<String>,
        base: NodeId,
        quals: &[String],
        derivations: Vec<Derivation>,
        node: &Node<D>,
    ) -> NodeId {
        let mut ty = self.push(
            CNodeKind::TypeDecl {
                declname,
                quals: quals.to_vec(),
                ty: base,
            },
            node,
        );
        for derivation in derivations {
            let kind = match derivation {
                Derivation::Pointer(quals) => CNodeKind::PtrDecl { quals, ty },
                Derivation::Array(dim) => CNodeKind::ArrayDecl { ty, dim },
                Derivation::Function(params) => CNodeKind::FuncDecl { params, ty },
            };
            ty = self.push(kind, node);
        }
        ty
    }

    /// `None` for `()`, empty for `(void)`.
    fn parameters<D: Doc>(&mut self, list: &Node<D>) -> Option<Vec<NodeId>> {
        let params: Vec<_> = list
            .children()
            .filter(|c| matches!(c.kind().as_ref(), "parameter_declaration" | "variadic_parameter"))
            .collect();
        if params.is_empty() {
            return None;
        }
        if let [only] = params.as_slice()
            && is_void_parameter(only)
        {
            return Some(Vec::new());
        }
        Some(params.iter().map(|param| self.parameter(param)).collect())
    }

    fn parameter<D: Doc>(&mut self, node: &Node<D>) -> NodeId {
        if node.kind().as_ref() == "variadic_parameter" {
            // Lowered as an unmappable type so variadic functions are skipped.
            let base = self.push(
                CNodeKind::IdentifierType {
                    names: vec!["...".to_string()],
                },
                node,
            );
            let ty = self.apply(None, base, &[], Vec::new(), node);
            return self.push(
                CNodeKind::Decl {
                    name: None,
                    quals: Vec::new(),
                    ty,
                },
                node,
            );
        }

        let spec = Specifiers::read(node);
        let base = match &spec.ty {
            Some(ty_node) => self.specifier(ty_node, true),
            None => self.push(CNodeKind::IdentifierType { names: Vec::new() }, node),
        };
        let mut derivations = Vec::new();
        let name = match spec.declarators.first() {
            Some(declarator) => self.declarator(declarator, &mut derivations),
            None => None,
        };
        let ty = self.apply(name.clone(), base, &spec.quals, derivations, node);
        self.push(
            CNodeKind::Decl {
                name,
                quals: spec.quals,
                ty,
            },
            node,
        )
    }

    /// Lower a type specifier. Struct and enum bodies are only attached when
    /// `with_body` is set, so a body shared by several declarators appears
    /// once in the tree.
    fn specifier<D: Doc>(&mut self, node: &Node<D>, with_body: bool) -> NodeId {
        let name = || node.field("name").map(|n| n.text().to_string());
        let body = || if with_body { node.field("body") } else { None };

        let kind = match node.kind().as_ref() {
            "struct_specifier" => {
                let fields = body().map(|list| self.fields(&list));
                CNodeKind::Struct { name: name(), fields }
            }
            "enum_specifier" => {
                let values = body().map(|list| self.enumerators(&list));
                CNodeKind::Enum { name: name(), values }
            }
            "union_specifier" => {
                let mut names = vec!["union".to_string()];
                names.extend(name());
                CNodeKind::IdentifierType { names }
            }
            "sized_type_specifier" => CNodeKind::IdentifierType {
                names: node.text().split_whitespace().map(ToString::to_string).collect(),
            },
            _ => CNodeKind::IdentifierType {
                names: vec![node.text().to_string()],
            },
        };
        self.push(kind, node)
    }

    fn fields<D: Doc>(&mut self, list: &Node<D>) -> Vec<NodeId> {
        let mut fields = Vec::new();
        for child in list.children() {
            match child.kind().as_ref() {
                "field_declaration" => fields.extend(self.declarations(&child)),
                kind if TRANSPARENT.contains(&kind) => fields.extend(self.fields(&child)),
                _ => {}
            }
        }
        fields
    }

    fn enumerators<D: Doc>(&mut self, list: &Node<D>) -> Vec<NodeId> {
        let mut values = Vec::new();
        for child in list.children() {
            if child.kind().as_ref() != "enumerator" {
                continue;
            }
            let Some(name) = child.field("name") else {
                continue;
            };
            let value = child.field("value").map(|v| v.text().to_string());
            values.push(self.push(
                CNodeKind::Enumerator {
                    name: name.text().to_string(),
                    value,
                },
                &child,
            ));
        }
        values
    }
}

fn is_void_parameter<D: Doc>(param: &Node<D>) -> bool {
    let spec = Specifiers::read(param);
    spec.declarators.is_empty() && spec.ty.is_some_and(|ty| ty.text().as_ref() == "void")
}

#[cfg(test)]
mod tests;
