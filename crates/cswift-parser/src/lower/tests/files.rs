use super::*;
use crate::{ParserError, parse_file};
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("../../../tests/fixtures/box2d_subset.h");

#[test]
fn fixture_top_level_order() {
    let ast = parse(FIXTURE);
    let names: Vec<_> = ast.top_level().iter().filter_map(|&id| ast.declared_name(id)).collect();
    assert_eq!(
        names,
        [
            "b2Vec2",
            "b2Rot",
            "b2WorldId",
            "b2BodyId",
            "b2BodyType",
            "b2Polygon",
            "b2TaskCallback",
            "b2EnqueueTaskCallback",
            "b2Timer",
            "b2CreateWorld",
            "b2DestroyWorld",
            "b2World_IsValid",
            "b2World_Step",
            "b2World_SetGravity",
            "b2World_GetGravity",
            "b2Body_GetPosition",
            "b2Body_SetType",
            "b2Body_GetType",
            "b2Dot",
        ]
    );
}

#[test]
fn fixture_coordinates_point_at_declarations() {
    let ast = parse(FIXTURE);
    let line_of = |name: &str| {
        let line = ast.coord(top_level_by_name(&ast, name)).unwrap().line;
        FIXTURE.lines().nth(line - 1).unwrap()
    };
    assert!(line_of("b2World_GetGravity").starts_with("b2Vec2 b2World_GetGravity("));
    assert!(line_of("b2Vec2").starts_with("typedef struct b2Vec2"));
}

#[test]
fn parse_file_records_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("world.h");
    std::fs::write(&path, "void b2World_Step(b2WorldId worldId, float timeStep);\n").unwrap();

    let ast = parse_file(&path).unwrap();
    let step = top_level_by_name(&ast, "b2World_Step");
    assert_eq!(ast.coord(step).unwrap().file, path);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.h");
    let error = parse_file(&missing).unwrap_err();
    assert!(matches!(error, ParserError::Io { ref path, .. } if *path == missing));
}

#[test]
fn syntax_errors_report_their_line() {
    let error = parse_source("int a;\nint @@ b;\n", "broken.h").unwrap_err();
    let ParserError::ParseFailed { file, line, .. } = error else {
        panic!("expected a parse failure, got {error:?}");
    };
    assert_eq!(file, std::path::Path::new("broken.h"));
    assert_eq!(line, 2);
}
