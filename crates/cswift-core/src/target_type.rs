//! Swift type model.
//!
//! Sugared forms (`T?`, `[T]`, `[K: V]`, `()`) desugar into nominal generic
//! types; structural equivalence is only defined on desugared forms.

use std::fmt;

use serde::Serialize;

/// `Name` or `Name<Args...>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NominalType {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_args: Option<Vec<TargetType>>,
}

impl NominalType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generic_args: None,
        }
    }

    #[must_use]
    pub fn generic(name: impl Into<String>, args: Vec<TargetType>) -> Self {
        Self {
            name: name.into(),
            generic_args: Some(args),
        }
    }

    fn desugar(&self) -> Self {
        Self {
            name: self.name.clone(),
            generic_args: self
                .generic_args
                .as_ref()
                .map(|args| args.iter().map(TargetType::desugar).collect()),
        }
    }

    fn is_equivalent(&self, other: &Self) -> bool {
        let empty = Vec::new();
        let mine = self.generic_args.as_ref().unwrap_or(&empty);
        let theirs = other.generic_args.as_ref().unwrap_or(&empty);
        self.name == other.name
            && mine.len() == theirs.len()
            && mine.iter().zip(theirs).all(|(a, b)| a.is_equivalent(b))
    }
}

impl fmt::Display for NominalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(args) = &self.generic_args {
            write!(f, "<{}>", join(args, ", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FunctionType {
    pub params: Vec<TargetType>,
    pub return_type: Box<TargetType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TargetType {
    Nominal(NominalType),
    /// `A.B.C`; always at least two links.
    Nested(Vec<NominalType>),
    ProtocolComposition(Vec<TargetType>),
    Tuple(Vec<TargetType>),
    Function(FunctionType),
    Optional(Box<TargetType>),
    ImplicitlyUnwrappedOptional(Box<TargetType>),
    Array(Box<TargetType>),
    Dictionary {
        key: Box<TargetType>,
        value: Box<TargetType>,
    },
}

impl TargetType {
    #[must_use]
    pub fn nominal(name: impl Into<String>) -> Self {
        Self::Nominal(NominalType::new(name))
    }

    #[must_use]
    pub fn generic(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Nominal(NominalType::generic(name, args))
    }

    /// `None` when fewer than two links are given.
    #[must_use]
    pub fn nested(chain: Vec<NominalType>) -> Option<Self> {
        (chain.len() >= 2).then_some(Self::Nested(chain))
    }

    #[must_use]
    pub const fn void() -> Self {
        Self::Tuple(Vec::new())
    }

    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }

    #[must_use]
    pub fn function(params: Vec<Self>, return_type: Self) -> Self {
        Self::Function(FunctionType {
            params,
            return_type: Box::new(return_type),
        })
    }

    #[must_use]
    pub const fn as_nominal(&self) -> Option<&NominalType> {
        match self {
            Self::Nominal(nominal) => Some(nominal),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// `()` or `Void`.
    #[must_use]
    pub fn is_void(&self) -> bool {
        match self {
            Self::Tuple(elements) => elements.is_empty(),
            Self::Nominal(nominal) => nominal.name == "Void" && nominal.generic_args.is_none(),
            _ => false,
        }
    }

    /// Replace sugared forms with their nominal spelling, recursively.
    #[must_use]
    pub fn desugar(&self) -> Self {
        match self {
            Self::Nominal(nominal) => Self::Nominal(nominal.desugar()),
            Self::Nested(chain) => Self::Nested(chain.iter().map(NominalType::desugar).collect()),
            Self::ProtocolComposition(types) => {
                Self::ProtocolComposition(types.iter().map(Self::desugar).collect())
            }
            Self::Tuple(elements) if elements.is_empty() => Self::nominal("Void"),
            Self::Tuple(elements) => Self::Tuple(elements.iter().map(Self::desugar).collect()),
            Self::Function(function) => Self::function(
                function.params.iter().map(Self::desugar).collect(),
                function.return_type.desugar(),
            ),
            Self::Optional(inner) => Self::generic("Optional", vec![inner.desugar()]),
            Self::ImplicitlyUnwrappedOptional(inner) => {
                Self::generic("ImplicitlyUnwrappedOptional", vec![inner.desugar()])
            }
            Self::Array(inner) => Self::generic("Array", vec![inner.desugar()]),
            Self::Dictionary { key, value } => {
                Self::generic("Dictionary", vec![key.desugar(), value.desugar()])
            }
        }
    }

    /// Structural equality of the desugared forms.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        desugared_equivalent(&self.desugar(), &other.desugar())
    }
}

fn all_equivalent(a: &[TargetType], b: &[TargetType]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| desugared_equivalent(x, y))
}

fn desugared_equivalent(a: &TargetType, b: &TargetType) -> bool {
    use TargetType as T;

    match (a, b) {
        (T::Nominal(x), T::Nominal(y)) => x.is_equivalent(y),
        (T::Nested(x), T::Nested(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(p, q)| p.is_equivalent(q))
        }
        (T::ProtocolComposition(x), T::ProtocolComposition(y)) | (T::Tuple(x), T::Tuple(y)) => {
            all_equivalent(x, y)
        }
        (T::Function(x), T::Function(y)) => {
            all_equivalent(&x.params, &y.params) && desugared_equivalent(&x.return_type, &y.return_type)
        }
        _ => false,
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominal(nominal) => write!(f, "{nominal}"),
            Self::Nested(chain) => write!(f, "{}", join(chain, ".")),
            Self::ProtocolComposition(types) => write!(f, "{}", join(types, " & ")),
            Self::Tuple(elements) => write!(f, "({})", join(elements, ", ")),
            Self::Function(function) => write!(
                f,
                "({}) -> {}",
                join(&function.params, ", "),
                function.return_type
            ),
            Self::Optional(inner) => write_wrapped(f, inner, "?"),
            Self::ImplicitlyUnwrappedOptional(inner) => write_wrapped(f, inner, "!"),
            Self::Array(inner) => write!(f, "[{inner}]"),
            Self::Dictionary { key, value } => write!(f, "[{key}: {value}]"),
        }
    }
}

fn write_wrapped(f: &mut fmt::Formatter<'_>, inner: &TargetType, mark: &str) -> fmt::Result {
    match inner {
        TargetType::Function(_) | TargetType::ProtocolComposition(_) => write!(f, "({inner}){mark}"),
        _ => write!(f, "{inner}{mark}"),
    }
}

fn join<T: fmt::Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn int() -> TargetType {
        TargetType::nominal("Int")
    }

    fn samples() -> Vec<TargetType> {
        vec![
            int(),
            TargetType::void(),
            TargetType::optional(int()),
            TargetType::ImplicitlyUnwrappedOptional(Box::new(int())),
            TargetType::Array(Box::new(TargetType::optional(int()))),
            TargetType::Dictionary {
                key: Box::new(TargetType::nominal("String")),
                value: Box::new(TargetType::Array(Box::new(int()))),
            },
            TargetType::function(vec![TargetType::optional(int())], TargetType::void()),
            TargetType::Tuple(vec![int(), TargetType::optional(int())]),
            TargetType::ProtocolComposition(vec![
                TargetType::nominal("Equatable"),
                TargetType::nominal("Hashable"),
            ]),
            TargetType::nested(vec![NominalType::new("A"), NominalType::new("B")]).unwrap(),
        ]
    }

    #[test]
    fn desugar_is_idempotent() {
        for ty in samples() {
            let once = ty.desugar();
            assert_eq!(once.desugar(), once, "desugar not idempotent for {ty}");
        }
    }

    #[test]
    fn optional_sugar_is_equivalent_to_generic() {
        let sugared = TargetType::optional(int());
        let spelled = TargetType::generic("Optional", vec![int()]);
        assert!(sugared.is_equivalent(&spelled));
        assert!(spelled.is_equivalent(&sugared));
        assert!(!sugared.is_equivalent(&int()));
    }

    #[test]
    fn empty_tuple_is_void() {
        assert!(TargetType::void().is_equivalent(&TargetType::nominal("Void")));
        assert!(TargetType::void().is_void());
        assert!(TargetType::nominal("Void").is_void());
    }

    #[test]
    fn absent_and_empty_generic_args_are_equivalent() {
        let bare = TargetType::nominal("Int");
        let empty = TargetType::generic("Int", vec![]);
        assert!(bare.is_equivalent(&empty));
    }

    #[test]
    fn nested_needs_two_links() {
        assert!(TargetType::nested(vec![NominalType::new("A")]).is_none());
    }

    #[test]
    fn renders_swift_syntax() {
        let rendered: Vec<String> = samples().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            [
                "Int",
                "()",
                "Int?",
                "Int!",
                "[Int?]",
                "[String: [Int]]",
                "(Int?) -> ()",
                "(Int, Int?)",
                "Equatable & Hashable",
                "A.B",
            ]
        );
    }

    #[test]
    fn optional_function_is_parenthesized() {
        let ty = TargetType::optional(TargetType::function(vec![], TargetType::nominal("Void")));
        assert_eq!(ty.to_string(), "(() -> Void)?");
        let pointer = TargetType::generic("UnsafePointer", vec![TargetType::nominal("CChar")]);
        assert_eq!(TargetType::optional(pointer).to_string(), "UnsafePointer<CChar>?");
    }
}
