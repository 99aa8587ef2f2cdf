//! Swift declaration model.
//!
//! Declarations form a shallow tree: extensions own their members, every other
//! variant is a leaf. The [`walker`] is the only traversal primitive.

mod access;
pub mod lookup;
pub mod walker;

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::Serialize;

pub use access::AccessLevel;
pub use lookup::DeclLookup;
pub use walker::{DeclVisitor, DeclVisitorMut, VisitAction, walk, walk_all, walk_all_mut, walk_mut};

use crate::c_ast::{Coord, NodeId};
use crate::doc_block::DocCommentBlock;
use crate::symbol::CompoundSymbolName;
use crate::target_type::TargetType;

/// Kind of C construct a declaration was generated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CDeclKind {
    #[default]
    None,
    Enum,
    EnumCase,
    Struct,
    Func,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
    pub column: Option<usize>,
}

impl From<&Coord> for SourceLocation {
    fn from(coord: &Coord) -> Self {
        Self {
            file: coord.file.clone(),
            line: coord.line,
            column: Some(coord.column),
        }
    }
}

/// Fields shared by every declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclInfo {
    pub name: CompoundSymbolName,
    pub original_name: Option<String>,
    pub origin: Option<SourceLocation>,
    /// Index into the C tree this declaration came from. Lookup only.
    #[serde(skip)]
    pub original_node: Option<NodeId>,
    pub c_kind: CDeclKind,
    pub doc_comment: Option<DocCommentBlock>,
}

impl DeclInfo {
    #[must_use]
    pub fn new(name: CompoundSymbolName) -> Self {
        Self {
            name,
            original_name: None,
            origin: None,
            original_node: None,
            c_kind: CDeclKind::None,
            doc_comment: None,
        }
    }

    #[must_use]
    pub fn with_original(mut self, name: impl Into<String>, kind: CDeclKind) -> Self {
        self.original_name = Some(name.into());
        self.c_kind = kind;
        self
    }

    #[must_use]
    pub fn with_origin(mut self, coord: Option<&Coord>) -> Self {
        self.origin = coord.map(SourceLocation::from);
        self
    }

    #[must_use]
    pub const fn with_node(mut self, node: NodeId) -> Self {
        self.original_node = Some(node);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberVariable {
    #[serde(flatten)]
    pub info: DeclInfo,
    pub is_static: bool,
    pub access_level: Option<AccessLevel>,
    pub var_type: Option<TargetType>,
    pub initial_value: Option<String>,
    /// Body of a computed property; `None` for stored values.
    pub accessor_lines: Option<Vec<String>>,
}

impl MemberVariable {
    #[must_use]
    pub const fn new(info: DeclInfo) -> Self {
        Self {
            info,
            is_static: false,
            access_level: None,
            var_type: None,
            initial_value: None,
            accessor_lines: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Argument label; `None` prints as `_`.
    pub label: Option<String>,
    pub name: String,
    /// Attribute written before the type, e.g. `@convention(c)`.
    pub decoration: Option<String>,
    pub ty: TargetType,
}

impl Parameter {
    #[must_use]
    pub fn unlabeled(name: impl Into<String>, ty: TargetType) -> Self {
        Self {
            label: None,
            name: name.into(),
            decoration: None,
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberFunction {
    #[serde(flatten)]
    pub info: DeclInfo,
    pub is_static: bool,
    pub access_level: Option<AccessLevel>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TargetType>,
    pub body: Vec<String>,
}

impl MemberFunction {
    #[must_use]
    pub const fn new(info: DeclInfo) -> Self {
        Self {
            info,
            is_static: false,
            access_level: None,
            parameters: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeAlias {
    #[serde(flatten)]
    pub info: DeclInfo,
    pub access_level: AccessLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extension {
    #[serde(flatten)]
    pub info: DeclInfo,
    pub access_level: AccessLevel,
    pub conformances: BTreeSet<String>,
    pub members: Vec<Declaration>,
}

impl Extension {
    #[must_use]
    pub const fn new(info: DeclInfo, access_level: AccessLevel) -> Self {
        Self {
            info,
            access_level,
            conformances: BTreeSet::new(),
            members: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Variable(MemberVariable),
    Function(MemberFunction),
    TypeAlias(TypeAlias),
    Extension(Extension),
}

impl Declaration {
    #[must_use]
    pub const fn info(&self) -> &DeclInfo {
        match self {
            Self::Variable(v) => &v.info,
            Self::Function(f) => &f.info,
            Self::TypeAlias(t) => &t.info,
            Self::Extension(e) => &e.info,
        }
    }

    pub const fn info_mut(&mut self) -> &mut DeclInfo {
        match self {
            Self::Variable(v) => &mut v.info,
            Self::Function(f) => &mut f.info,
            Self::TypeAlias(t) => &mut t.info,
            Self::Extension(e) => &mut e.info,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &CompoundSymbolName {
        &self.info().name
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Extension(e) => &e.members,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Self] {
        match self {
            Self::Extension(e) => &mut e.members,
            _ => &mut [],
        }
    }

    #[must_use]
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Variable(_) => "member variable",
            Self::Function(_) => "member function",
            Self::TypeAlias(_) => "typealias",
            Self::Extension(_) => "extension",
        }
    }
}
