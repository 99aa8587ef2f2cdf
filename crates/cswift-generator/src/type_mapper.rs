//! C type nodes to Swift types.
//!
//! Every mapping yields two spellings: the canonical one, with typedefs
//! expanded, and the aliased one, which keeps typedef names as written. The
//! generator prints aliased types and inspects canonical ones.

use std::collections::{HashMap, HashSet};

use cswift_core::c_ast::{CAst, CNodeKind, NodeId};
use cswift_core::target_type::TargetType;

/// C spellings accepted for each Swift primitive. Multi-word spellings are
/// matched after joining the specifiers with single spaces.
const PRIMITIVES: &[(&str, &[&str])] = &[
    ("Void", &["void"]),
    ("Bool", &["_Bool", "bool"]),
    ("Float", &["float"]),
    ("Double", &["double", "long double"]),
    ("CChar", &["char", "signed char"]),
    ("CUnsignedChar", &["unsigned char"]),
    ("Int8", &["int8_t"]),
    ("UInt8", &["uint8_t"]),
    ("Int16", &["int16_t", "short", "short int", "signed short", "signed short int"]),
    ("UInt16", &["uint16_t", "unsigned short", "unsigned short int"]),
    (
        "Int32",
        &[
            "int32_t",
            "intptr_t",
            "int",
            "signed",
            "signed int",
            "long",
            "long int",
            "signed long",
            "signed long int",
        ],
    ),
    ("UInt32", &["uint32_t", "unsigned", "unsigned int", "unsigned long", "unsigned long int"]),
    (
        "Int64",
        &["int64_t", "long long", "long long int", "signed long long", "signed long long int"],
    ),
    ("UInt64", &["uint64_t", "unsigned long long", "unsigned long long int"]),
    ("UInt", &["size_t", "uintptr_t"]),
];

fn primitive(spelling: &str) -> Option<&'static str> {
    PRIMITIVES
        .iter()
        .find(|(_, spellings)| spellings.contains(&spelling))
        .map(|(swift, _)| *swift)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    pub canonical: TargetType,
    pub aliased: TargetType,
}

impl MappedType {
    fn same(ty: TargetType) -> Self {
        Self {
            canonical: ty.clone(),
            aliased: ty,
        }
    }

    fn map(self, f: impl Fn(TargetType) -> TargetType) -> Self {
        Self {
            canonical: f(self.canonical),
            aliased: f(self.aliased),
        }
    }
}

/// Recursive type mapper over one [`CAst`].
///
/// Without caching every typedef reference scans the translation unit's
/// top-level declarations. [`with_caching`](Self::with_caching) indexes the
/// typedefs up front and memoizes each resolved name.
#[derive(Debug)]
pub struct TypeMapper<'a> {
    ast: &'a CAst,
    typedefs: Option<HashMap<&'a str, NodeId>>,
    cache: HashMap<String, MappedType>,
    resolving: HashSet<String>,
}

impl<'a> TypeMapper<'a> {
    #[must_use]
    pub fn new(ast: &'a CAst) -> Self {
        Self {
            ast,
            typedefs: None,
            cache: HashMap::new(),
            resolving: HashSet::new(),
        }
    }

    #[must_use]
    pub fn with_caching(ast: &'a CAst) -> Self {
        let typedefs = ast
            .top_level()
            .iter()
            .filter_map(|&id| match ast.kind(id) {
                CNodeKind::Typedef { name, .. } => Some((name.as_str(), id)),
                _ => None,
            })
            .collect::<HashMap<_, _>>();
        tracing::debug!(typedefs = typedefs.len(), "indexed typedefs");
        Self {
            typedefs: Some(typedefs),
            ..Self::new(ast)
        }
    }

    /// Map a declaration or type node; `None` when any part has no Swift
    /// counterpart.
    pub fn map(&mut self, id: NodeId) -> Option<MappedType> {
        let ast = self.ast;
        match ast.kind(id) {
            CNodeKind::Decl { ty, .. } => self.map(*ty),
            CNodeKind::TypeDecl { ty, .. } => self.map(*ty),
            CNodeKind::Typedef { name, ty, .. } => {
                let inner = self.map(*ty)?;
                Some(MappedType {
                    canonical: inner.canonical,
                    aliased: TargetType::nominal(name),
                })
            }
            CNodeKind::Struct { name, .. } | CNodeKind::Enum { name, .. } => {
                name.as_deref().map(|name| MappedType::same(TargetType::nominal(name)))
            }
            CNodeKind::PtrDecl { ty, .. } => self.map_pointer(*ty),
            CNodeKind::ArrayDecl { ty, dim } => {
                let count = dim.as_deref().and_then(parse_dimension)?;
                let element = self.map(*ty)?;
                Some(element.map(|ty| TargetType::Tuple(vec![ty; count])))
            }
            CNodeKind::FuncDecl { params, ty } => {
                let mut canonical = Vec::new();
                let mut aliased = Vec::new();
                for &param in params.as_deref().unwrap_or_default() {
                    let mapped = self.map(param)?;
                    canonical.push(mapped.canonical);
                    aliased.push(mapped.aliased);
                }
                let ret = self.map(*ty)?;
                Some(MappedType {
                    canonical: TargetType::function(canonical, ret.canonical),
                    aliased: TargetType::function(aliased, ret.aliased),
                })
            }
            CNodeKind::IdentifierType { names } => self.map_names(names),
            CNodeKind::FileAst { .. } | CNodeKind::Enumerator { .. } => None,
        }
    }

    /// Canonical form of the typedef `name`.
    pub fn unalias_type(&mut self, name: &str) -> Option<TargetType> {
        self.resolve_typedef(name).map(|mapped| mapped.canonical)
    }

    fn map_pointer(&mut self, pointee: NodeId) -> Option<MappedType> {
        let inner = self.map(pointee)?;
        let constant = self.is_const(pointee);

        if inner.canonical.is_void() {
            let name = if constant {
                "UnsafeRawPointer"
            } else {
                "UnsafeMutableRawPointer"
            };
            return Some(MappedType::same(TargetType::optional(TargetType::nominal(name))));
        }

        let name = if constant { "UnsafePointer" } else { "UnsafeMutablePointer" };
        let canonical = TargetType::optional(TargetType::generic(name, vec![inner.canonical]));
        match collapse_function_pointer(&canonical) {
            // Pointers to functions are the function type itself; the aliased
            // side keeps the typedef name so callers can still unalias it.
            Some(function) => Some(MappedType {
                canonical: function,
                aliased: inner.aliased,
            }),
            None => Some(MappedType {
                canonical,
                aliased: TargetType::optional(TargetType::generic(name, vec![inner.aliased])),
            }),
        }
    }

    fn map_names(&mut self, names: &[String]) -> Option<MappedType> {
        if let Some(swift) = primitive(&names.join(" ")) {
            return Some(MappedType::same(TargetType::nominal(swift)));
        }
        match names {
            [name] => self.resolve_typedef(name),
            _ => None,
        }
    }

    fn resolve_typedef(&mut self, name: &str) -> Option<MappedType> {
        if let Some(hit) = self.cache.get(name) {
            return Some(hit.clone());
        }
        if self.resolving.contains(name) {
            return Some(MappedType::same(TargetType::nominal(name)));
        }
        let Some(node) = self.find_typedef(name) else {
            tracing::debug!(name, "no typedef for type name");
            return None;
        };

        self.resolving.insert(name.to_string());
        let mapped = self.map(node);
        self.resolving.remove(name);

        if self.typedefs.is_some()
            && let Some(mapped) = &mapped
        {
            self.cache.insert(name.to_string(), mapped.clone());
        }
        mapped
    }

    fn find_typedef(&self, name: &str) -> Option<NodeId> {
        if let Some(typedefs) = &self.typedefs {
            return typedefs.get(name).copied();
        }
        self.ast
            .top_level()
            .iter()
            .copied()
            .find(|&id| matches!(self.ast.kind(id), CNodeKind::Typedef { name: n, .. } if n == name))
    }

    fn is_const(&self, id: NodeId) -> bool {
        match self.ast.kind(id) {
            CNodeKind::Decl { quals, .. }
            | CNodeKind::TypeDecl { quals, .. }
            | CNodeKind::Typedef { quals, .. }
            | CNodeKind::PtrDecl { quals, .. } => quals.iter().any(|q| q == "const"),
            _ => false,
        }
    }
}

fn collapse_function_pointer(ty: &TargetType) -> Option<TargetType> {
    let TargetType::Optional(inner) = ty else {
        return None;
    };
    let nominal = inner.as_nominal()?;
    match nominal.generic_args.as_deref() {
        Some([function @ TargetType::Function(_)]) if nominal.name == "UnsafeMutablePointer" => Some(function.clone()),
        _ => None,
    }
}

/// Positive integer array dimension, allowing C integer suffixes.
pub(crate) fn parse_dimension(dim: &str) -> Option<usize> {
    let digits = dim.trim().trim_end_matches(['u', 'U', 'l', 'L']);
    let value = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    (value > 0).then_some(value)
}
