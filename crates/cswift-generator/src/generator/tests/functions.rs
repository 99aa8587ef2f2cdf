use super::*;
use pretty_assertions::assert_eq;

#[test]
fn world_function_becomes_method() {
    let source = format!("{TYPES}\nb2Vec2 b2World_GetGravity(b2WorldId id);\n");
    let generated = generate(&source);

    let world = extension(&generated.decls, "B2World");
    assert_eq!(world.access_level, AccessLevel::Public);
    assert_eq!(world.info.original_name, None);
    assert_eq!(world.info.original_node, None);

    let [method] = functions(world)[..] else {
        panic!("expected one method, got {:?}", world.members);
    };
    assert_eq!(method.info.name.to_string(), "getGravity");
    assert_eq!(method.info.original_name.as_deref(), Some("b2World_GetGravity"));
    assert_eq!(method.info.c_kind, CDeclKind::Func);
    assert!(method.parameters.is_empty());
    assert_eq!(method.return_type, Some(TargetType::nominal("b2Vec2")));
    assert_eq!(method.body, ["b2World_GetGravity(id)"]);
    assert_eq!(method.access_level, None);
    assert!(!method.is_static);
}

#[test]
fn remaining_parameters_are_unlabeled_and_forwarded() {
    let source = format!("{TYPES}\nvoid b2World_Explode(b2WorldId id, b2Vec2 position, float radius, float);\n");
    let generated = generate(&source);

    let world = extension(&generated.decls, "B2World");
    let method = functions(world)[0];
    let params: Vec<(Option<&str>, &str, String)> = method
        .parameters
        .iter()
        .map(|p| (p.label.as_deref(), p.name.as_str(), p.ty.to_string()))
        .collect();
    assert_eq!(
        params,
        [
            (None, "position", "b2Vec2".to_string()),
            (None, "radius", "Float".to_string()),
            (None, "arg3", "Float".to_string()),
        ]
    );
    assert_eq!(method.body, ["b2World_Explode(id, position, radius, arg3)"]);
    assert_eq!(method.return_type, Some(TargetType::nominal("Void")));
}

#[test]
fn function_typedef_parameters_use_c_convention() {
    let source = format!(
        "{TYPES}\ntypedef void b2TaskCallback(int32_t startIndex, int32_t endIndex, uint32_t workerIndex, void* taskContext);\n\
         void b2World_RunTask(b2WorldId id, b2TaskCallback* task, void* context);\n"
    );
    let generated = generate(&source);

    let method = functions(extension(&generated.decls, "B2World"))[0];
    let task = &method.parameters[0];
    assert_eq!(task.decoration.as_deref(), Some("@convention(c)"));
    assert_eq!(task.ty.to_string(), "(Int32, Int32, UInt32, UnsafeMutableRawPointer?) -> Void");
    let context = &method.parameters[1];
    assert_eq!(context.decoration, None);
    assert_eq!(context.ty.to_string(), "UnsafeMutableRawPointer?");
}

#[test]
fn mapper_access_level_moves_to_extension() {
    let source = format!("{TYPES}\nfloat b2Shape_GetFriction(b2ShapeId shapeId);\n");
    let generated = generate(&source);

    let shape = extension(&generated.decls, "B2Shape");
    assert_eq!(shape.access_level, AccessLevel::Internal);
    assert_eq!(functions(shape)[0].access_level, None);
    assert_eq!(functions(shape)[0].body, ["b2Shape_GetFriction(id)"]);
}

#[test]
fn functions_that_cannot_become_methods_are_skipped() {
    let source = format!(
        "{TYPES}\n\
         void b2World_(b2WorldId id);\n\
         void b2World_Reset();\n\
         void b2World_Clear(void);\n\
         void b2World_Use(b2WorldId id, b2Unknown thing);\n\
         b2Unknown b2World_Make(b2WorldId id);\n\
         void b2World_Dump(b2WorldId id);\n\
         void b2Body_Enable(b2BodyId id);\n\
         b2Vec2* b2World_Points(b2WorldId id);\n"
    );
    let generated = generate(&source);

    assert_eq!(names(&generated.decls), ["b2Vec2"]);
}

#[test]
fn unused_mappers_are_reported() {
    let source = format!("{TYPES}\nb2Vec2 b2World_GetGravity(b2WorldId id);\n");
    let generated = generate(&source);

    assert_eq!(generated.generator.unused_mappers(&generated.usage), ["b2Shape_"]);
    assert_eq!(generated.usage.used_mappers.len(), 1);
}
