use super::*;
use crate::c_ast::{CAst, CNodeKind, NodeId};
use crate::decl::{AccessLevel, DeclInfo};
use crate::symbol::CompoundSymbolName;
use crate::target_type::TargetType;

mod members;

fn name(text: &str) -> CompoundSymbolName {
    CompoundSymbolName::from_pascal_case(text)
}

fn extension(type_name: &str, members: Vec<Declaration>) -> Extension {
    let mut ext = Extension::new(DeclInfo::new(name(type_name)), AccessLevel::Public);
    ext.members = members;
    ext
}

fn function(fn_name: &str, body: &[&str], return_type: Option<&str>) -> Declaration {
    let mut f = MemberFunction::new(DeclInfo::new(name(fn_name)));
    f.body = body.iter().map(ToString::to_string).collect();
    f.return_type = return_type.map(TargetType::nominal);
    Declaration::Function(f)
}

fn variable(var_name: &str, ty: &str, initial: Option<&str>) -> Declaration {
    let mut v = MemberVariable::new(DeclInfo::new(name(var_name)));
    v.var_type = Some(TargetType::nominal(ty));
    v.initial_value = initial.map(ToString::to_string);
    v.is_static = true;
    Declaration::Variable(v)
}

fn merge(decls: Vec<Declaration>) -> Result<Vec<Declaration>, CoreError> {
    DeclMerger::new(&CAst::new()).merge(decls)
}

fn single_extension(decls: &[Declaration]) -> &Extension {
    match decls {
        [Declaration::Extension(ext)] => ext,
        other => panic!("expected one extension, got {other:?}"),
    }
}

fn find_member<'a>(ext: &'a Extension, member: &str) -> &'a Declaration {
    ext.members
        .iter()
        .find(|m| m.name().to_string() == member)
        .unwrap_or_else(|| {
            let names: Vec<_> = ext.members.iter().map(|m| m.name().to_string()).collect();
            panic!("missing member '{member}', available={names:?}")
        })
}

/// Arena with a forward-declared and a defined struct of the same name.
fn forward_and_definition() -> (CAst, NodeId, NodeId) {
    let mut ast = CAst::new();
    let forward = ast.push(
        CNodeKind::Struct {
            name: Some("b2Vec2".into()),
            fields: None,
        },
        None,
    );
    let definition = ast.push(
        CNodeKind::Struct {
            name: Some("b2Vec2".into()),
            fields: Some(vec![]),
        },
        None,
    );
    (ast, forward, definition)
}
