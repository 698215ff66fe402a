//! Generate operation - accessor sources from a catalog snapshot.

use std::path::Path;

use eyre::{Context, Result};
use trellis_codegen::pipeline::{Pipeline, SnapshotPlugin};
use trellis_ir::CatalogSnapshot;
use trellis_manifest::Manifest;

use super::{entry_counts, format_diagnostic};
use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated sources.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Directory for per-phase pipeline snapshots.
    pub visualize: Option<&'a Path>,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the snapshot and renders the model for the target language.
pub fn generate(
    snapshot: CatalogSnapshot,
    manifest: &Manifest,
    lang: LanguageSupport,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let counts = entry_counts(&snapshot);

    let mut pipeline = Pipeline::new();
    if let Some(dir) = opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }
    let mut ctx = pipeline.run(snapshot).wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx.warnings().map(format_diagnostic).collect();
    let model = ctx.take_model()?;

    let generator = lang.generator(&model, &manifest.output.package);
    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate accessors")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: written.written,
            unchanged: written.unchanged,
            debug_dir: opts.visualize.map(Path::to_path_buf),
        })
    };

    tracing::info!(
        catalog = %model.catalog,
        classes = model.classes.len(),
        dry_run = opts.dry_run,
        "generated accessors"
    );

    Ok(GenerateReport {
        root_class: model.root.clone(),
        language: lang.display_name.to_string(),
        warnings,
        counts,
        class_count: model.classes.len(),
        method_count: model.method_count(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use trellis_ir::CatalogEntry;
    use trellis_manifest::{CatalogConfig, Language, OutputConfig};

    use super::*;

    fn manifest() -> Manifest {
        Manifest {
            catalog: CatalogConfig {
                name: "libs".into(),
                entries: "catalog.json".into(),
            },
            output: OutputConfig {
                language: Language::Java,
                package: "org.gradle.accessors.dm".into(),
                dir: "build/generated/accessors".into(),
            },
        }
    }

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot::new(
            "libs",
            vec![
                CatalogEntry::library("androidx.ui", "androidx.compose.ui:ui"),
                CatalogEntry::version("compose.plugin", "1.6.11"),
            ],
        )
    }

    #[test]
    fn test_generate_dry_run() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(
            snapshot(),
            &manifest(),
            LanguageSupport::get(Language::Java),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: true,
                visualize: None,
            },
        )
        .unwrap();

        assert_eq!(report.root_class, "LibrariesForLibs");
        let GenerationResult::Preview(preview) = &report.result else {
            panic!("expected a preview");
        };
        assert_eq!(preview.files.len(), 1);
        assert!(!dir.path().join("org").exists());
    }

    #[test]
    fn test_generate_writes_sources_and_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let debug_dir = dir.path().join("debug");
        let report = generate(
            snapshot(),
            &manifest(),
            LanguageSupport::get(Language::Java),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
                visualize: Some(&debug_dir),
            },
        )
        .unwrap();

        let GenerationResult::Written(written) = &report.result else {
            panic!("expected written files");
        };
        assert_eq!(
            written.written,
            vec!["org/gradle/accessors/dm/LibrariesForLibs.java"]
        );
        assert!(debug_dir.join("build.json").exists());
    }

    #[test]
    fn test_generate_fails_on_invalid_alias() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = CatalogSnapshot::new(
            "libs",
            vec![CatalogEntry::library("bundles.core", "com.example:core")],
        );
        let result = generate(
            snapshot,
            &manifest(),
            LanguageSupport::get(Language::Java),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
                visualize: None,
            },
        );

        assert!(result.is_err());
    }
}
