use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `cswift` binary.
#[derive(Debug, Parser)]
#[command(name = "cswift", version, about = "Generate Swift extensions for C libraries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate Swift files for a preprocessed C header.
    Generate(GenerateArgs),
    /// Show the Swift names generated for C symbols.
    Lookup(LookupArgs),
}

/// Header and configuration shared by every command.
#[derive(Clone, Debug, Args)]
pub struct SourceArgs {
    /// Preprocessed C header to read.
    pub header: PathBuf,

    /// Generator configuration (.json, .jsonc or .toml).
    #[arg(short, long)]
    pub config: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print files to stdout instead of writing them.
    #[arg(long)]
    pub stdout: bool,

    /// Keep existing files in the target directory.
    #[arg(long)]
    pub no_clean: bool,

    /// Override `fileGeneration.targetPath`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// C names to resolve.
    #[arg(required = true)]
    pub names: Vec<String>,
}
