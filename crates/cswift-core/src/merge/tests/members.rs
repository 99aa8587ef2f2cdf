use pretty_assertions::assert_eq;

use super::*;
use crate::decl::Parameter;
use crate::doc_block::DocCommentBlock;

fn merged_member(first: Declaration, second: Declaration) -> Result<Declaration, CoreError> {
    let member = first.name().to_string();
    let merged = merge(vec![
        Declaration::Extension(extension("B2World", vec![first])),
        Declaration::Extension(extension("B2World", vec![second])),
    ])?;
    let ext = single_extension(&merged);
    assert_eq!(ext.members.len(), 1, "members should have merged");
    Ok(find_member(ext, &member).clone())
}

#[test]
fn function_fill_the_gap() {
    let declared = function("GetGravity", &[], Some("B2Vec2"));
    let defined = function("GetGravity", &["return b2World_GetGravity(id)"], None);

    let Declaration::Function(f) = merged_member(declared, defined).unwrap() else {
        panic!("expected function");
    };
    assert_eq!(f.body, ["return b2World_GetGravity(id)"]);
    assert_eq!(f.return_type, Some(TargetType::nominal("B2Vec2")));
}

#[test]
fn function_parameters_fill_the_gap() {
    let bare = function("SetGravity", &[], None);
    let Declaration::Function(mut with_params) = function("SetGravity", &[], None) else {
        unreachable!()
    };
    with_params.parameters = vec![Parameter::unlabeled("gravity", TargetType::nominal("B2Vec2"))];

    let Declaration::Function(f) = merged_member(bare, Declaration::Function(with_params)).unwrap() else {
        panic!("expected function");
    };
    assert_eq!(f.parameters.len(), 1);
    assert_eq!(f.parameters[0].name, "gravity");
}

#[test]
fn differing_bodies_are_fatal() {
    let error = merged_member(
        function("Step", &["b2World_Step(id)"], None),
        function("Step", &["b2World_Step(id, 1)"], None),
    )
    .unwrap_err();
    assert!(matches!(error, CoreError::MemberConflict { field: "body", .. }));
}

#[test]
fn differing_return_types_are_fatal() {
    let error = merged_member(
        function("Count", &[], Some("Int32")),
        function("Count", &[], Some("Int64")),
    )
    .unwrap_err();
    assert!(matches!(error, CoreError::MemberConflict { field: "return type", .. }));
}

#[test]
fn variable_initial_value_prefers_non_null() {
    let Declaration::Variable(v) =
        merged_member(variable("Zero", "B2Vec2", None), variable("Zero", "B2Vec2", Some("b2Vec2_zero"))).unwrap()
    else {
        panic!("expected variable");
    };
    assert_eq!(v.initial_value.as_deref(), Some("b2Vec2_zero"));
}

#[test]
fn variable_conflicts_are_fatal() {
    let error = merged_member(variable("Zero", "B2Vec2", Some("a")), variable("Zero", "B2Vec2", Some("b"))).unwrap_err();
    assert!(matches!(error, CoreError::MemberConflict { field: "initial value", .. }));

    let error = merged_member(variable("Zero", "B2Vec2", None), variable("Zero", "B2Rot", None)).unwrap_err();
    assert!(matches!(error, CoreError::MemberConflict { field: "type", .. }));
}

#[test]
fn variable_accessors_concatenate() {
    let with_accessor = |line: &str| {
        let Declaration::Variable(mut v) = variable("Gravity", "B2Vec2", None) else {
            unreachable!()
        };
        v.accessor_lines = Some(vec![line.to_string()]);
        Declaration::Variable(v)
    };

    let Declaration::Variable(v) = merged_member(with_accessor("get { a }"), with_accessor("get { b }")).unwrap() else {
        panic!("expected variable");
    };
    assert_eq!(v.accessor_lines, Some(vec!["get { a }".to_string(), "get { b }".to_string()]));
}

#[test]
fn member_doc_comments_merge() {
    let documented = |text: &str| {
        let Declaration::Function(mut f) = function("Step", &[], None) else {
            unreachable!()
        };
        f.info.doc_comment = Some(DocCommentBlock::from_text(text));
        Declaration::Function(f)
    };

    let merged = merged_member(documented("Steps."), documented("Steps.")).unwrap();
    assert_eq!(merged.info().doc_comment.as_ref().map(DocCommentBlock::text), Some("Steps."));

    let merged = merged_member(documented("Steps."), function("Step", &[], None)).unwrap();
    assert_eq!(merged.info().doc_comment.as_ref().map(DocCommentBlock::text), Some("Steps."));
}

#[test]
fn variable_and_function_with_same_name_coexist() {
    let merged = merge(vec![
        Declaration::Extension(extension("B2World", vec![variable("Gravity", "B2Vec2", None)])),
        Declaration::Extension(extension("B2World", vec![function("Gravity", &[], None)])),
    ])
    .unwrap();
    assert_eq!(single_extension(&merged).members.len(), 2);
}
