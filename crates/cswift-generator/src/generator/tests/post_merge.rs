use super::*;
use cswift_core::symbol::SymbolCasing;
use pretty_assertions::assert_eq;

const WORLD: &str = r"
b2Vec2 b2World_GetGravity(b2WorldId id);
void b2World_SetGravity(b2WorldId id, b2Vec2 gravity);
";

fn merged(generated: Generated) -> (CAst, Vec<Declaration>) {
    let Generated { ast, decls, .. } = generated;
    let mut decls = DeclMerger::new(&ast).merge(decls).expect("declarations merge");
    DeclGenerator::post_merge(&ast, &mut decls);
    (ast, decls)
}

#[test]
fn method_fragments_merge_into_one_extension() {
    let (_, decls) = merged(generate(&format!("{TYPES}{WORLD}")));

    assert_eq!(names(&decls), ["b2Vec2", "B2World"]);
    let world = extension(&decls, "B2World");
    let methods: Vec<String> = functions(world).iter().map(|f| f.info.name.to_string()).collect();
    assert_eq!(methods, ["getGravity", "setGravity"]);
}

#[test]
fn conformance_members_follow_sorted_protocols_and_field_order() {
    let (_, decls) = merged(generate(TYPES));

    let vec2 = extension(&decls, "b2Vec2");
    assert_eq!(vec2.conformances.iter().collect::<Vec<_>>(), ["Equatable", "Hashable"]);
    let members = functions(vec2);
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].info.name.to_string(), "==");
    assert_eq!(members[0].body, ["lhs.x == rhs.x && lhs.y == rhs.y"]);
    assert_eq!(members[1].info.name.to_string(), "hash");
    assert_eq!(members[1].body, ["hasher.combine(x)", "hasher.combine(y)"]);
}

#[test]
fn forward_declaration_does_not_hide_fields() {
    let source = "typedef struct b2Vec2 b2Vec2;\nstruct b2Vec2 { float x; float y; };\n";
    let (ast, decls) = merged(generate(source));

    let vec2 = extension(&decls, "b2Vec2");
    let node = vec2.info.original_node.expect("struct node");
    assert_eq!(ast.struct_fields(node).map(<[NodeId]>::len), Some(2));
    assert_eq!(functions(vec2).len(), 2);
}

#[test]
fn signature_types_resolve_to_generated_names() {
    let mut config = box2d_config();
    config.swift_symbol_formatting.symbol_casing = SymbolCasing::PascalCase;
    let (_, decls) = merged(generate_with(&format!("{TYPES}{WORLD}"), &config));

    let world = extension(&decls, "B2World");
    let [getter, setter] = functions(world)[..] else {
        panic!("expected two methods, got {:?}", world.members);
    };
    assert_eq!(getter.return_type, Some(TargetType::nominal("B2Vec2")));
    assert_eq!(setter.parameters[0].ty, TargetType::nominal("B2Vec2"));
    assert_eq!(setter.return_type, Some(TargetType::nominal("Void")));
}
