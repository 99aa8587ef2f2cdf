use std::path::PathBuf;

use anyhow::Context;
use cswift_core::decl::Declaration;
use cswift_emit::{DiskTarget, EmitSummary, OutputTarget, StdoutTarget};
use cswift_generator::GenerationReport;
use serde::Serialize;

use crate::cli::{GenerateArgs, GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
struct ModelResponse<'a> {
    report: &'a GenerationReport,
    declarations: &'a [Declaration],
}

#[derive(Debug, Serialize)]
struct WrittenResponse {
    target: PathBuf,
    files: usize,
    declarations: usize,
}

/// Handle `cswift generate`.
///
/// With `--format json` the declaration model is printed instead of being
/// written as Swift.
pub fn handle(args: &GenerateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (mut config, generated) = super::run_pipeline(&args.source)?;

    if flags.format == OutputFormat::Json {
        let response = ModelResponse {
            report: &generated.report,
            declarations: &generated.declarations,
        };
        return output(&response, flags.format, |_| String::new());
    }

    if let Some(path) = &args.output {
        config.file_generation.target_path.clone_from(path);
    }
    let target_path = config.file_generation.target_path.clone();

    let mut target: Box<dyn OutputTarget> = if args.stdout {
        Box::new(StdoutTarget::stdout(&target_path))
    } else {
        Box::new(DiskTarget::new(&target_path, !args.no_clean))
    };

    let EmitSummary { files, declarations } =
        cswift_emit::emit(generated.declarations, &config.file_generation, target.as_mut())
            .with_context(|| format!("failed to emit Swift files to {}", target_path.display()))?;

    if args.stdout || flags.quiet {
        return Ok(());
    }
    let response = WrittenResponse {
        target: target_path,
        files,
        declarations,
    };
    output(&response, flags.format, |written| {
        format!(
            "Wrote {} declarations to {} files in {}",
            written.declarations,
            written.files,
            written.target.display()
        )
    })
}
