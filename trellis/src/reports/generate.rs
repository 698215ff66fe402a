//! Generate command report data structures.

use std::path::PathBuf;

use super::{
    EntryCounts,
    output::{Output, Report},
};

/// Report data from accessor generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Name of the catalog root class.
    pub root_class: String,

    /// Target language display name.
    pub language: String,

    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// Entries per kind.
    pub counts: EntryCounts,

    /// Number of accessor classes.
    pub class_count: usize,

    /// Number of accessor methods.
    pub method_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of accessor generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files whose content changed.
    pub written: Vec<String>,
    /// Files already up to date.
    pub unchanged: Vec<String>,
    /// Path to pipeline snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        if let Some(debug_dir) = &written.debug_dir {
            out.key_value(
                "Pipeline snapshots written to",
                &debug_dir.display().to_string(),
            );
            out.newline();
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        out.preformatted(&format!(
            "{} ({}, {} entries)",
            self.root_class,
            self.language,
            self.counts.total()
        ));
        self.counts.render(out);
        out.newline();

        out.key_value(
            "Accessors",
            &format!(
                "{} classes, {} methods",
                self.class_count, self.method_count
            ),
        );
        out.key_value("Generated", &written.output_dir.display().to_string());

        for path in &written.written {
            out.added_item(path);
        }
        for path in &written.unchanged {
            out.list_item(&format!("{} (unchanged)", path));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            preview.files.len(),
            if preview.files.len() == 1 { "" } else { "s" }
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            root_class: "LibrariesForLibs".into(),
            language: "Java".into(),
            warnings: Vec::new(),
            counts: EntryCounts {
                libraries: 3,
                ..Default::default()
            },
            class_count: 5,
            method_count: 9,
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Written(WrittenResult {
            output_dir: "build/generated".into(),
            written: vec!["org/gradle/accessors/dm/LibrariesForLibs.java".into()],
            unchanged: Vec::new(),
            debug_dir: None,
        }))
        .render(&mut out);

        let text = out.text();
        assert!(text.starts_with("LibrariesForLibs (Java, 3 entries)"));
        assert!(text.contains("Accessors: 5 classes, 9 methods"));
        assert!(text.contains("  + org/gradle/accessors/dm/LibrariesForLibs.java"));
    }

    #[test]
    fn test_render_preview() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "LibrariesForLibs.java".into(),
                content: "package x;".into(),
            }],
        }))
        .render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "── LibrariesForLibs.java ──",
                "package x;",
                "── Summary ──",
                "1 file would be generated",
            ]
        );
    }
}
