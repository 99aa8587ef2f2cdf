use anyhow::Context;
use cswift_config::GeneratorConfig;
use cswift_core::c_ast::CAst;
use cswift_generator::GenerationOutput;

use crate::cli::{Commands, GlobalFlags, SourceArgs};

pub mod generate;
pub mod lookup;

pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => generate::handle(args, flags),
        Commands::Lookup(args) => lookup::handle(args, flags),
    }
}

/// Load the configuration, parse the header and run the generator.
fn run_pipeline(source: &SourceArgs) -> anyhow::Result<(GeneratorConfig, GenerationOutput)> {
    let config = GeneratorConfig::load(Some(&source.config))
        .with_context(|| format!("failed to load configuration {}", source.config.display()))?;

    let ast: CAst = cswift_parser::parse_file(&source.header)
        .with_context(|| format!("failed to parse {}", source.header.display()))?;
    tracing::info!(nodes = ast.len(), header = %source.header.display(), "parsed header");

    let output = cswift_generator::run(&ast, &config).context("declaration generation failed")?;
    Ok((config, output))
}
