//! Member synthesis for requested protocol conformances.

use cswift_core::c_ast::{CAst, CNodeKind, NodeId};
use cswift_core::decl::{DeclInfo, Declaration, MemberFunction, MemberVariable, Parameter};
use cswift_core::symbol::CompoundSymbolName;
use cswift_core::target_type::TargetType;

use crate::type_mapper::parse_dimension;

/// Synthesizes the members a protocol requires from a struct's fields.
pub trait ConformanceGenerator: Sync {
    fn protocol(&self) -> &'static str;

    /// Members for `type_name`, given its field access paths in declaration
    /// order. Returns nothing when there are no fields.
    fn generate_members(&self, type_name: &str, fields: &[String]) -> Vec<Declaration>;
}

static GENERATORS: &[&dyn ConformanceGenerator] = &[&Equatable, &Hashable, &CustomStringConvertible];

#[must_use]
pub fn conformance_generator(protocol: &str) -> Option<&'static dyn ConformanceGenerator> {
    GENERATORS.iter().copied().find(|g| g.protocol() == protocol)
}

/// Access paths of a struct's fields in declaration order. Fixed-size array
/// fields expand to one path per element (`values.0`, `values.1`, ...).
#[must_use]
pub fn field_paths(ast: &CAst, struct_node: NodeId) -> Vec<String> {
    let mut paths = Vec::new();
    for &field in ast.struct_fields(struct_node).unwrap_or_default() {
        if let CNodeKind::Decl { name: Some(name), ty, .. } = ast.kind(field) {
            expand(ast, *ty, name.clone(), &mut paths);
        }
    }
    paths
}

fn expand(ast: &CAst, ty: NodeId, path: String, out: &mut Vec<String>) {
    if let CNodeKind::ArrayDecl { ty: element, dim } = ast.kind(ty)
        && let Some(count) = dim.as_deref().and_then(parse_dimension)
    {
        for index in 0..count {
            expand(ast, *element, format!("{path}.{index}"), out);
        }
        return;
    }
    out.push(path);
}

fn synthesized(name: &str) -> DeclInfo {
    DeclInfo::new(CompoundSymbolName::from_parts([name]))
}

pub struct Equatable;

impl ConformanceGenerator for Equatable {
    fn protocol(&self) -> &'static str {
        "Equatable"
    }

    fn generate_members(&self, type_name: &str, fields: &[String]) -> Vec<Declaration> {
        if fields.is_empty() {
            return Vec::new();
        }
        let comparison = fields
            .iter()
            .map(|field| format!("lhs.{field} == rhs.{field}"))
            .collect::<Vec<_>>()
            .join(" && ");

        let mut function = MemberFunction::new(synthesized("=="));
        function.is_static = true;
        function.parameters = vec![
            Parameter::unlabeled("lhs", TargetType::nominal(type_name)),
            Parameter::unlabeled("rhs", TargetType::nominal(type_name)),
        ];
        function.return_type = Some(TargetType::nominal("Bool"));
        function.body = vec![comparison];
        vec![Declaration::Function(function)]
    }
}

pub struct Hashable;

impl ConformanceGenerator for Hashable {
    fn protocol(&self) -> &'static str {
        "Hashable"
    }

    fn generate_members(&self, _type_name: &str, fields: &[String]) -> Vec<Declaration> {
        if fields.is_empty() {
            return Vec::new();
        }
        let mut function = MemberFunction::new(synthesized("hash"));
        function.parameters = vec![Parameter {
            label: Some("into".to_string()),
            name: "hasher".to_string(),
            decoration: Some("inout".to_string()),
            ty: TargetType::nominal("Hasher"),
        }];
        function.body = fields.iter().map(|field| format!("hasher.combine({field})")).collect();
        vec![Declaration::Function(function)]
    }
}

pub struct CustomStringConvertible;

impl ConformanceGenerator for CustomStringConvertible {
    fn protocol(&self) -> &'static str {
        "CustomStringConvertible"
    }

    fn generate_members(&self, type_name: &str, fields: &[String]) -> Vec<Declaration> {
        if fields.is_empty() {
            return Vec::new();
        }
        let interpolated = fields
            .iter()
            .map(|field| format!("{field}: \\({field})"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut description = MemberVariable::new(synthesized("description"));
        description.var_type = Some(TargetType::nominal("String"));
        description.accessor_lines = Some(vec![format!("\"{type_name}({interpolated})\"")]);
        vec![Declaration::Variable(description)]
    }
}
