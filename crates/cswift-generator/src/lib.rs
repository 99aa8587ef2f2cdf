//! # cswift-generator
//!
//! Turns a parsed C header into Swift declarations:
//!
//! - [`collector`] picks the prefixed structs, enums and functions.
//! - [`type_mapper`] maps C types onto Swift types.
//! - [`filter`] and [`naming`] decide which symbols are kept and what they are called.
//! - [`generator`] builds extensions, methods and enum cases, then synthesizes
//!   conformance members once fragments are merged.
//! - [`auto_property`] optionally folds getter/setter pairs into properties.
//! - [`pipeline`] runs every stage in order and reports what went unused.

pub mod auto_property;
pub mod collector;
pub mod conformance;
pub mod counter;
pub mod error;
pub mod filter;
pub mod generator;
pub mod naming;
pub mod pipeline;
pub mod type_mapper;

pub use counter::DeclCounts;
pub use error::GeneratorError;
pub use filter::SymbolFilter;
pub use generator::{DeclGenerator, GenerationUsage};
pub use pipeline::{GenerationOutput, GenerationReport, run};
pub use type_mapper::TypeMapper;
