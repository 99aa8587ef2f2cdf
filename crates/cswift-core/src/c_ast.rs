//! Read-only C declaration tree.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. The shape
//! follows the classic C front-end layout: a declarator chain of `PtrDecl`,
//! `ArrayDecl` and `FuncDecl` wrapping a `TypeDecl` that names the declared
//! entity and holds its base type.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CNodeKind {
    FileAst {
        ext: Vec<NodeId>,
    },
    /// A declaration: variable, parameter, struct field or function prototype.
    Decl {
        name: Option<String>,
        quals: Vec<String>,
        ty: NodeId,
    },
    /// Innermost declarator: the declared name plus its base type.
    TypeDecl {
        declname: Option<String>,
        quals: Vec<String>,
        ty: NodeId,
    },
    Typedef {
        name: String,
        quals: Vec<String>,
        ty: NodeId,
    },
    PtrDecl {
        quals: Vec<String>,
        ty: NodeId,
    },
    ArrayDecl {
        ty: NodeId,
        dim: Option<String>,
    },
    /// `params` is `None` for `()` and empty for `(void)`.
    FuncDecl {
        params: Option<Vec<NodeId>>,
        ty: NodeId,
    },
    IdentifierType {
        names: Vec<String>,
    },
    /// `fields` is `None` for a tag reference or forward declaration.
    Struct {
        name: Option<String>,
        fields: Option<Vec<NodeId>>,
    },
    Enum {
        name: Option<String>,
        values: Option<Vec<NodeId>>,
    },
    Enumerator {
        name: String,
        value: Option<String>,
    },
}

impl CNodeKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FileAst { .. } => "FileAST",
            Self::Decl { .. } => "Decl",
            Self::TypeDecl { .. } => "TypeDecl",
            Self::Typedef { .. } => "Typedef",
            Self::PtrDecl { .. } => "PtrDecl",
            Self::ArrayDecl { .. } => "ArrayDecl",
            Self::FuncDecl { .. } => "FuncDecl",
            Self::IdentifierType { .. } => "IdentifierType",
            Self::Struct { .. } => "Struct",
            Self::Enum { .. } => "Enum",
            Self::Enumerator { .. } => "Enumerator",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CNode {
    pub kind: CNodeKind,
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, Default)]
pub struct CAst {
    nodes: Vec<CNode>,
    root: Option<NodeId>,
}

impl CAst {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: CNodeKind, coord: Option<Coord>) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(CNode { kind, coord });
        id
    }

    /// Push the translation unit node and mark it as the root.
    pub fn push_root(&mut self, ext: Vec<NodeId>, coord: Option<Coord>) -> NodeId {
        let id = self.push(CNodeKind::FileAst { ext }, coord);
        self.root = Some(id);
        id
    }

    #[must_use]
    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&CNode> {
        self.nodes.get(id.index())
    }

    /// Node by id. Ids are only handed out by [`push`](Self::push), so this
    /// indexes directly.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &CNode {
        &self.nodes[id.index()]
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> &CNodeKind {
        &self.node(id).kind
    }

    #[must_use]
    pub fn coord(&self, id: NodeId) -> Option<&Coord> {
        self.node(id).coord.as_ref()
    }

    /// Top-level declarations of the translation unit.
    #[must_use]
    pub fn top_level(&self) -> &[NodeId] {
        match self.root.map(|id| self.kind(id)) {
            Some(CNodeKind::FileAst { ext }) => ext,
            _ => &[],
        }
    }

    /// Direct children in declaration order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        match self.kind(id) {
            CNodeKind::FileAst { ext } => ext.clone(),
            CNodeKind::Decl { ty, .. }
            | CNodeKind::TypeDecl { ty, .. }
            | CNodeKind::Typedef { ty, .. }
            | CNodeKind::PtrDecl { ty, .. }
            | CNodeKind::ArrayDecl { ty, .. } => vec![*ty],
            CNodeKind::FuncDecl { params, ty } => {
                let mut out = params.clone().unwrap_or_default();
                out.push(*ty);
                out
            }
            CNodeKind::Struct { fields, .. } => fields.clone().unwrap_or_default(),
            CNodeKind::Enum { values, .. } => values.clone().unwrap_or_default(),
            CNodeKind::IdentifierType { .. } | CNodeKind::Enumerator { .. } => Vec::new(),
        }
    }

    /// Every node reachable from the root, parents before children.
    #[must_use]
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).into_iter().rev());
        }
        out
    }

    /// Name a declaration-like node introduces, if any.
    ///
    /// For a `FuncDecl` this is the function name held by its `TypeDecl`.
    #[must_use]
    pub fn declared_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            CNodeKind::Decl { name, .. } => name.as_deref(),
            CNodeKind::TypeDecl { declname, .. } => declname.as_deref(),
            CNodeKind::Typedef { name, .. } | CNodeKind::Enumerator { name, .. } => Some(name),
            CNodeKind::Struct { name, .. } | CNodeKind::Enum { name, .. } => name.as_deref(),
            CNodeKind::FuncDecl { ty, .. } => match self.kind(*ty) {
                CNodeKind::TypeDecl { declname, .. } => declname.as_deref(),
                _ => None,
            },
            _ => None,
        }
    }

    /// Field declarations of a struct definition; `None` for forward
    /// declarations and non-struct nodes.
    #[must_use]
    pub fn struct_fields(&self, id: NodeId) -> Option<&[NodeId]> {
        match self.kind(id) {
            CNodeKind::Struct {
                fields: Some(fields),
                ..
            } => Some(fields),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_struct(&self, id: NodeId) -> bool {
        matches!(self.kind(id), CNodeKind::Struct { .. })
    }
}
