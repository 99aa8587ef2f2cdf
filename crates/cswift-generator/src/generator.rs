//! Declarations generated from collected C nodes.

use std::collections::BTreeSet;

use cswift_config::{ConformanceConfig, DeclarationsConfig, FunctionMapperConfig};
use cswift_core::c_ast::{CAst, CNodeKind, NodeId};
use cswift_core::decl::{
    AccessLevel, CDeclKind, DeclInfo, DeclLookup, Declaration, Extension, MemberFunction, MemberVariable, Parameter,
};
use cswift_core::symbol::CompoundSymbolName;
use cswift_core::target_type::TargetType;

use crate::GeneratorError;
use crate::conformance::{conformance_generator, field_paths};
use crate::filter::{FilterCategory, SymbolFilter};
use crate::naming::SymbolNameGenerator;
use crate::type_mapper::TypeMapper;

/// Turns free functions named `<c_prefix>Rest` into methods of `swift_type`,
/// passing `first_argument` as the C function's first parameter.
#[derive(Debug, Clone)]
pub struct MethodMapper {
    pub c_prefix: String,
    pub swift_type: CompoundSymbolName,
    pub first_argument: String,
    pub first_argument_type: String,
    pub access_level: AccessLevel,
}

impl MethodMapper {
    #[must_use]
    pub fn from_config(config: &FunctionMapperConfig) -> Self {
        Self {
            c_prefix: config.c_prefix.clone(),
            swift_type: CompoundSymbolName::from_pascal_case(&config.swift_type),
            first_argument: config.param0.swift_name.clone(),
            first_argument_type: config.param0.c_type.clone(),
            access_level: config.access_level,
        }
    }
}

/// Which configuration entries took part in a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationUsage {
    pub matched_conformances: BTreeSet<usize>,
    pub used_mappers: BTreeSet<usize>,
}

#[derive(Debug, Clone)]
pub struct DeclGenerator {
    prefixes: Vec<String>,
    filter: SymbolFilter,
    names: SymbolNameGenerator,
    conformances: Vec<ConformanceConfig>,
    mappers: Vec<MethodMapper>,
}

impl DeclGenerator {
    #[must_use]
    pub const fn new(
        prefixes: Vec<String>,
        filter: SymbolFilter,
        names: SymbolNameGenerator,
        conformances: Vec<ConformanceConfig>,
        mappers: Vec<MethodMapper>,
    ) -> Self {
        Self {
            prefixes,
            filter,
            names,
            conformances,
            mappers,
        }
    }

    /// # Errors
    ///
    /// Fails when a filter pattern or a name formatting term is invalid.
    pub fn from_config(config: &DeclarationsConfig) -> Result<Self, GeneratorError> {
        Ok(Self::new(
            config.prefixes.clone(),
            SymbolFilter::from_config(&config.filters, &config.conformances)?,
            SymbolNameGenerator::from_config(config)?,
            config.conformances.clone(),
            config.functions_to_methods.iter().map(MethodMapper::from_config).collect(),
        ))
    }

    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// C names of conformance requests that matched no generated declaration.
    #[must_use]
    pub fn unmatched_conformances(&self, usage: &GenerationUsage) -> Vec<String> {
        self.conformances
            .iter()
            .enumerate()
            .filter(|(index, _)| !usage.matched_conformances.contains(index))
            .map(|(_, request)| request.c_name.clone())
            .collect()
    }

    /// Prefixes of function mappers that matched no function.
    #[must_use]
    pub fn unused_mappers(&self, usage: &GenerationUsage) -> Vec<String> {
        self.mappers
            .iter()
            .enumerate()
            .filter(|(index, _)| !usage.used_mappers.contains(index))
            .map(|(_, mapper)| mapper.c_prefix.clone())
            .collect()
    }

    /// Generate one declaration per accepted candidate, in candidate order.
    #[must_use]
    pub fn generate_all(&self, ast: &CAst, candidates: &[NodeId]) -> (Vec<Declaration>, GenerationUsage) {
        let mut types = TypeMapper::with_caching(ast);
        let mut usage = GenerationUsage::default();
        let mut decls = Vec::with_capacity(candidates.len());

        for &id in candidates {
            if let Some(decl) = self.generate(ast, &mut types, id, &mut usage) {
                decls.push(decl);
            }
        }

        tracing::debug!(count = decls.len(), "generated declarations");
        (decls, usage)
    }

    fn generate(
        &self,
        ast: &CAst,
        types: &mut TypeMapper<'_>,
        id: NodeId,
        usage: &mut GenerationUsage,
    ) -> Option<Declaration> {
        match ast.kind(id) {
            CNodeKind::Enum { name: Some(name), values } => {
                if !self.filter.accepts(FilterCategory::Enums, Some(name)) {
                    return None;
                }
                let decl = self.generate_enum(ast, id, name, values.as_deref().unwrap_or_default(), usage);
                Some(Declaration::Extension(decl))
            }
            CNodeKind::Struct { name: Some(name), .. } => {
                if !self.filter.accepts(FilterCategory::Structs, Some(name)) {
                    return None;
                }
                Some(Declaration::Extension(self.generate_struct(ast, id, name, usage)))
            }
            CNodeKind::FuncDecl { params, ty } => {
                let CNodeKind::TypeDecl {
                    declname: Some(c_name), ..
                } = ast.kind(*ty)
                else {
                    return None;
                };
                if !self.filter.accepts(FilterCategory::Methods, Some(c_name)) {
                    return None;
                }
                let (decl, mapper) = self.generate_function(ast, types, id, c_name, params.as_deref()?, *ty)?;
                usage.used_mappers.insert(mapper);
                Some(Declaration::Extension(decl))
            }
            _ => None,
        }
    }

    fn generate_enum(
        &self,
        ast: &CAst,
        id: NodeId,
        name: &str,
        values: &[NodeId],
        usage: &mut GenerationUsage,
    ) -> Extension {
        let mut decl = Extension::new(
            DeclInfo::new(self.names.enum_name(name))
                .with_original(name, CDeclKind::Enum)
                .with_origin(ast.coord(id))
                .with_node(id),
            AccessLevel::Public,
        );

        for &value in values {
            let CNodeKind::Enumerator { name: case_name, .. } = ast.kind(value) else {
                continue;
            };
            if !self.filter.accepts(FilterCategory::EnumMembers, Some(case_name)) {
                continue;
            }
            let mut case = MemberVariable::new(
                DeclInfo::new(self.names.enum_case(case_name))
                    .with_original(case_name, CDeclKind::EnumCase)
                    .with_origin(ast.coord(value))
                    .with_node(value),
            );
            case.is_static = true;
            case.initial_value = Some(case_name.clone());
            decl.members.push(Declaration::Variable(case));
        }

        decl.conformances = self.propose_conformances(name, usage);
        decl
    }

    fn generate_struct(&self, ast: &CAst, id: NodeId, name: &str, usage: &mut GenerationUsage) -> Extension {
        let mut decl = Extension::new(
            DeclInfo::new(self.names.struct_name(name))
                .with_original(name, CDeclKind::Struct)
                .with_origin(ast.coord(id))
                .with_node(id),
            AccessLevel::Public,
        );
        decl.conformances = self.propose_conformances(name, usage);
        decl
    }

    /// Single-method extension of the mapper's Swift type, plus the index of
    /// the mapper used.
    fn generate_function(
        &self,
        ast: &CAst,
        types: &mut TypeMapper<'_>,
        id: NodeId,
        c_name: &str,
        params: &[NodeId],
        return_node: NodeId,
    ) -> Option<(Extension, usize)> {
        if params.is_empty() {
            return None;
        }
        let (index, mapper) = self
            .mappers
            .iter()
            .enumerate()
            .find(|(_, mapper)| c_name.starts_with(&mapper.c_prefix))?;

        let rest = &c_name[mapper.c_prefix.len()..];
        if rest.is_empty() {
            return None;
        }

        let mut parameters = Vec::with_capacity(params.len() - 1);
        let mut call_args = vec![mapper.first_argument.clone()];
        for (position, &param) in params.iter().enumerate().skip(1) {
            let name = ast
                .declared_name(param)
                .map_or_else(|| format!("arg{position}"), ToString::to_string);
            let Some(parameter) = Self::map_parameter(types, param, &name) else {
                tracing::debug!(function = c_name, parameter = %name, "skipping function with unmappable parameter");
                return None;
            };
            call_args.push(name);
            parameters.push(parameter);
        }

        let Some(return_type) = types.map(return_node) else {
            tracing::debug!(function = c_name, "skipping function with unmappable return type");
            return None;
        };

        let mut method = MemberFunction::new(
            DeclInfo::new(self.names.function_name(rest))
                .with_original(c_name, CDeclKind::Func)
                .with_origin(ast.coord(id))
                .with_node(id),
        );
        method.parameters = parameters;
        method.return_type = Some(return_type.aliased);
        method.body = vec![format!("{c_name}({})", call_args.join(", "))];

        let mut info = DeclInfo::new(mapper.swift_type.clone());
        info.c_kind = CDeclKind::Func;
        let mut extension = Extension::new(info, mapper.access_level);
        extension.members.push(Declaration::Function(method));
        Some((extension, index))
    }

    /// Parameter for a C argument. Function typedefs become the function
    /// type itself, marked `@convention(c)`.
    fn map_parameter(types: &mut TypeMapper<'_>, param: NodeId, name: &str) -> Option<Parameter> {
        let mapped = types.map(param)?;
        let alias = mapped.aliased.as_nominal().map(|nominal| nominal.name.clone());
        let mut parameter = Parameter::unlabeled(name, mapped.aliased);

        if let Some(alias) = alias
            && let Some(function @ TargetType::Function(_)) = types.unalias_type(&alias)
        {
            parameter.ty = function;
            parameter.decoration = Some("@convention(c)".to_string());
        }
        Some(parameter)
    }

    fn propose_conformances(&self, c_name: &str, usage: &mut GenerationUsage) -> BTreeSet<String> {
        let mut conformances = BTreeSet::new();
        for (index, request) in self.conformances.iter().enumerate() {
            if request.c_name == c_name {
                usage.matched_conformances.insert(index);
                conformances.extend(request.conformances.iter().cloned());
            }
        }
        conformances
    }

    /// Synthesize conformance members for struct extensions, then replace
    /// C type names in method signatures with their generated names.
    pub fn post_merge(ast: &CAst, decls: &mut [Declaration]) {
        for decl in decls.iter_mut() {
            let Declaration::Extension(extension) = decl else {
                continue;
            };
            let Some(node) = extension.info.original_node.filter(|&node| ast.is_struct(node)) else {
                continue;
            };

            let fields = field_paths(ast, node);
            let type_name = extension.info.name.to_string();
            let synthesized: Vec<Declaration> = extension
                .conformances
                .iter()
                .filter_map(|protocol| conformance_generator(protocol))
                .flat_map(|generator| generator.generate_members(&type_name, &fields))
                .collect();
            extension.members.extend(synthesized);
        }

        let lookup = DeclLookup::build(decls);
        for decl in decls.iter_mut() {
            let Declaration::Extension(extension) = decl else {
                continue;
            };
            for member in &mut extension.members {
                let Declaration::Function(function) = member else {
                    continue;
                };
                if let Some(return_type) = &mut function.return_type {
                    alias_type(return_type, &lookup);
                }
                for parameter in &mut function.parameters {
                    alias_type(&mut parameter.ty, &lookup);
                }
            }
        }
    }
}

fn alias_type(ty: &mut TargetType, lookup: &DeclLookup) {
    let resolved = ty
        .as_nominal()
        .and_then(|nominal| lookup.lookup_c_symbol(&nominal.name))
        .map(|entry| TargetType::nominal(&entry.swift_name));
    if let Some(resolved) = resolved {
        *ty = resolved;
    }
}

#[cfg(test)]
mod tests;
