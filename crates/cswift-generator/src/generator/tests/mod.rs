use super::*;
use crate::collector::collect_candidates;
use cswift_config::{FiltersConfig, FirstParamConfig};
use cswift_core::merge::DeclMerger;

mod functions;
mod post_merge;

fn mapper(c_prefix: &str, swift_type: &str, first: (&str, &str), access_level: AccessLevel) -> FunctionMapperConfig {
    FunctionMapperConfig {
        c_prefix: c_prefix.to_string(),
        swift_type: swift_type.to_string(),
        access_level,
        param0: FirstParamConfig {
            swift_name: first.0.to_string(),
            c_type: first.1.to_string(),
        },
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn box2d_config() -> DeclarationsConfig {
    DeclarationsConfig {
        prefixes: strings(&["b2"]),
        functions_to_methods: vec![
            mapper("b2World_", "B2World", ("id", "b2WorldId"), AccessLevel::Public),
            mapper("b2Shape_", "B2Shape", ("id", "b2ShapeId"), AccessLevel::Internal),
        ],
        conformances: vec![ConformanceConfig {
            c_name: "b2Vec2".to_string(),
            conformances: strings(&["Hashable", "Equatable"]),
        }],
        filters: FiltersConfig {
            enums: strings(&["b2"]),
            enum_members: strings(&["B2_", "!B2_BODY_TYPE_COUNT"]),
            structs: strings(&["!b2Timer"]),
            methods: strings(&["b2", "!b2World_Dump"]),
        },
        ..DeclarationsConfig::default()
    }
}

struct Generated {
    ast: CAst,
    generator: DeclGenerator,
    decls: Vec<Declaration>,
    usage: GenerationUsage,
}

fn generate_with(source: &str, config: &DeclarationsConfig) -> Generated {
    let ast = cswift_parser::parse_source(source, "box2d.h").expect("header parses");
    let generator = DeclGenerator::from_config(config).expect("valid configuration");
    let candidates = collect_candidates(&ast, generator.prefixes());
    let (decls, usage) = generator.generate_all(&ast, &candidates);
    Generated {
        ast,
        generator,
        decls,
        usage,
    }
}

fn generate(source: &str) -> Generated {
    generate_with(source, &box2d_config())
}

fn names(decls: &[Declaration]) -> Vec<String> {
    decls.iter().map(|d| d.name().to_string()).collect()
}

fn find_by_name<'a>(decls: &'a [Declaration], name: &str) -> &'a Declaration {
    decls
        .iter()
        .find(|d| d.name().to_string() == name)
        .unwrap_or_else(|| panic!("missing declaration '{name}', available={:?}", names(decls)))
}

fn extension<'a>(decls: &'a [Declaration], name: &str) -> &'a Extension {
    match find_by_name(decls, name) {
        Declaration::Extension(ext) => ext,
        other => panic!("'{name}' is a {}", other.kind_label()),
    }
}

fn functions(ext: &Extension) -> Vec<&MemberFunction> {
    ext.members
        .iter()
        .filter_map(|m| match m {
            Declaration::Function(f) => Some(f),
            _ => None,
        })
        .collect()
}

const TYPES: &str = r"
typedef struct b2WorldId { uint16_t index1; uint16_t revision; } b2WorldId;
typedef struct b2ShapeId { int32_t index1; uint16_t revision; } b2ShapeId;
typedef struct b2Vec2 { float x, y; } b2Vec2;
typedef struct b2Timer { int64_t start; } b2Timer;
";
