//! Explain command report data structures.

use std::path::PathBuf;

use super::{
    EntryCounts,
    output::{Output, Report},
};

/// Report data from pipeline explanation.
#[derive(Debug)]
pub struct ExplainReport {
    /// Path to the manifest file.
    pub config_path: PathBuf,
    /// Catalog information.
    pub catalog: CatalogInfo,
    /// Pipeline phases.
    pub phases: Vec<PhaseInfo>,
    /// Validation lints.
    pub lints: Vec<LintInfo>,
    /// Accessor classes, in emission order.
    pub classes: Vec<ClassInfo>,
    /// Files the renderer produces, relative to the output directory.
    pub files: Vec<String>,
}

/// Information extracted from the manifest and snapshot.
#[derive(Debug)]
pub struct CatalogInfo {
    pub name: String,
    pub root_class: String,
    pub language: String,
    pub package: String,
    pub counts: EntryCounts,
}

/// Information about a pipeline phase.
#[derive(Debug)]
pub struct PhaseInfo {
    /// Phase name.
    pub name: String,
    /// Phase description.
    pub description: String,
}

/// Information about a validation lint.
#[derive(Debug)]
pub struct LintInfo {
    /// Lint name.
    pub name: String,
    /// Lint description.
    pub description: String,
}

/// Summary of one accessor class.
#[derive(Debug)]
pub struct ClassInfo {
    pub name: String,
    pub kind: String,
    /// Dotted group path, empty for namespace roots.
    pub path: String,
    pub method_count: usize,
    /// Whether the group is itself an entry.
    pub has_default: bool,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Trellis Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.key_value_indented("Catalog", &self.catalog.name);
        out.key_value_indented("Root class", &self.catalog.root_class);
        out.key_value_indented("Language", &self.catalog.language);
        out.key_value_indented("Package", &self.catalog.package);
        out.newline();

        out.section(&format!("Entries ({})", self.catalog.counts.total()));
        self.catalog.counts.render(out);
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        out.section(&format!("Accessor Classes ({})", self.classes.len()));
        for class in &self.classes {
            let mut line = format!("{} [{}]", class.name, class.kind);
            if !class.path.is_empty() {
                line.push_str(&format!(" {}", class.path));
            }
            line.push_str(&format!(
                ", {} method{}",
                class.method_count,
                if class.method_count == 1 { "" } else { "s" }
            ));
            if class.has_default {
                line.push_str(", asProvider");
            }
            out.list_item(&line);
        }
        out.newline();

        out.section("Files to Generate");
        for file in &self.files {
            out.list_item(file);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render_class_lines() {
        let report = ExplainReport {
            config_path: "trellis.toml".into(),
            catalog: CatalogInfo {
                name: "libs".into(),
                root_class: "LibrariesForLibs".into(),
                language: "Java".into(),
                package: "org.gradle.accessors.dm".into(),
                counts: EntryCounts::default(),
            },
            phases: vec![PhaseInfo {
                name: "resolve".into(),
                description: "Resolve dotted aliases into namespace trees".into(),
            }],
            lints: Vec::new(),
            classes: vec![ClassInfo {
                name: "AndroidxUiLibraryAccessors".into(),
                kind: "library".into(),
                path: "androidx.ui".into(),
                method_count: 2,
                has_default: true,
            }],
            files: vec!["org/gradle/accessors/dm/LibrariesForLibs.java".into()],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        let text = out.text();
        assert!(text.contains("  1. resolve - Resolve dotted aliases into namespace trees"));
        assert!(text.contains(
            "  - AndroidxUiLibraryAccessors [library] androidx.ui, 2 methods, asProvider"
        ));
        assert!(text.contains("  - org/gradle/accessors/dm/LibrariesForLibs.java"));
    }
}
