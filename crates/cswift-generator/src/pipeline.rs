//! The generation pipeline from a parsed C AST to merged Swift declarations.

use cswift_config::GeneratorConfig;
use cswift_core::c_ast::CAst;
use cswift_core::decl::Declaration;
use cswift_core::merge::DeclMerger;
use cswift_doc::DocCommentManager;
use serde::Serialize;

use crate::GeneratorError;
use crate::auto_property::fold_accessors;
use crate::collector::collect_candidates;
use crate::counter::DeclCounts;
use crate::generator::DeclGenerator;

/// Run statistics and configuration entries that never applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub candidates: usize,
    pub generated: DeclCounts,
    pub merged: DeclCounts,
    pub unmatched_conformances: Vec<String>,
    pub unused_mappers: Vec<String>,
}

impl GenerationReport {
    /// Warn about every conformance request and mapper that matched nothing.
    pub fn log_unmatched(&self) {
        for name in &self.unmatched_conformances {
            tracing::warn!(%name, "conformance request was not matched by any declaration");
        }
        for prefix in &self.unused_mappers {
            tracing::warn!(%prefix, "function mapper did not match any function");
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerationOutput {
    pub declarations: Vec<Declaration>,
    pub report: GenerationReport,
}

/// Collect, generate, document, merge and synthesize declarations for `ast`.
///
/// A header with no matching symbols is not an error; the output is empty.
///
/// # Errors
///
/// Returns [`GeneratorError`] when the configuration holds an invalid filter
/// or formatting pattern, or when two generated declarations cannot be
/// merged.
pub fn run(ast: &CAst, config: &GeneratorConfig) -> Result<GenerationOutput, GeneratorError> {
    let generator = DeclGenerator::from_config(&config.declarations)?;
    let docs = DocCommentManager::new(config.doc_comments.collect, config.doc_comments.format)?;

    let candidates = collect_candidates(ast, generator.prefixes());
    tracing::info!(count = candidates.len(), "collected declaration candidates");

    let (mut decls, usage) = generator.generate_all(ast, &candidates);
    let generated = DeclCounts::count(&decls);
    generated.log("generated");

    let mut report = GenerationReport {
        candidates: candidates.len(),
        generated,
        unmatched_conformances: generator.unmatched_conformances(&usage),
        unused_mappers: generator.unused_mappers(&usage),
        ..GenerationReport::default()
    };

    if generated.total() == 0 {
        tracing::info!("no declarations matched the configured prefixes and filters");
        report.log_unmatched();
        return Ok(GenerationOutput {
            declarations: decls,
            report,
        });
    }

    docs.populate(&mut decls);

    let mut decls = DeclMerger::new(ast).merge(decls)?;
    DeclGenerator::post_merge(ast, &mut decls);
    if config.declarations.auto_property {
        fold_accessors(&mut decls);
    }

    report.merged = DeclCounts::count(&decls);
    report.merged.log("merged");

    docs.format(&mut decls);
    report.log_unmatched();

    Ok(GenerationOutput {
        declarations: decls,
        report,
    })
}
