//! Explain operation - pipeline explanation.

use std::path::Path;

use eyre::{Context, Result};
use trellis_codegen::pipeline::Pipeline;
use trellis_ir::CatalogSnapshot;
use trellis_manifest::Manifest;

use super::entry_counts;
use crate::{
    language::LanguageSupport,
    reports::{CatalogInfo, ClassInfo, ExplainReport, LintInfo, PhaseInfo},
};

/// Execute the explain operation.
///
/// Runs the pipeline and returns information about what it does.
pub fn explain(
    snapshot: CatalogSnapshot,
    manifest: &Manifest,
    lang: &LanguageSupport,
    config_path: &Path,
) -> Result<ExplainReport> {
    let pipeline = Pipeline::new();

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let lints = pipeline
        .validation()
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let counts = entry_counts(&snapshot);
    let mut ctx = pipeline.run(snapshot).wrap_err("Pipeline failed")?;
    let model = ctx.take_model()?;

    let classes = model
        .classes
        .iter()
        .map(|class| ClassInfo {
            name: class.name.clone(),
            kind: class.kind.to_string(),
            path: class.dotted_path(),
            method_count: class.methods.len(),
            has_default: class.default_accessor().is_some(),
        })
        .collect();

    let files = lang
        .generator(&model, &manifest.output.package)
        .preview()
        .into_iter()
        .map(|f| f.path)
        .collect();

    Ok(ExplainReport {
        config_path: config_path.to_path_buf(),
        catalog: CatalogInfo {
            name: model.catalog.clone(),
            root_class: model.root.clone(),
            language: lang.display_name.to_string(),
            package: manifest.output.package.clone(),
            counts,
        },
        phases,
        lints,
        classes,
        files,
    })
}
