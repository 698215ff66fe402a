//! Check operation - catalog validation.

use std::path::Path;

use trellis_codegen::pipeline::{CompilationContext, Pipeline, Severity};
use trellis_ir::CatalogSnapshot;

use super::{entry_counts, format_diagnostic};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the whole pipeline and keeps its diagnostics even when a phase fails.
pub fn check(snapshot: CatalogSnapshot, config_path: &Path) -> CheckReport {
    let catalog = snapshot.name.clone();
    let counts = entry_counts(&snapshot);

    let pipeline = Pipeline::new();
    let mut ctx = CompilationContext::new(snapshot);
    let failure = pipeline.run_in(&mut ctx).err();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = format_diagnostic(diag);
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    // A phase may bail without recording a diagnostic.
    if let Some(err) = failure
        && errors.is_empty()
    {
        errors.push(err.to_string());
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        catalog,
        counts,
        class_count: ctx.model.as_ref().map(|m| m.classes.len()),
        errors,
        warnings,
        infos,
    }
}
