//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Number of entries per kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryCounts {
    pub libraries: usize,
    pub versions: usize,
    pub bundles: usize,
    pub plugins: usize,
}

impl EntryCounts {
    pub fn total(&self) -> usize {
        self.libraries + self.versions + self.bundles + self.plugins
    }

    pub(crate) fn render(&self, out: &mut dyn Output) {
        out.key_value_indented("Libraries", &self.libraries.to_string());
        out.key_value_indented("Versions", &self.versions.to_string());
        out.key_value_indented("Bundles", &self.bundles.to_string());
        out.key_value_indented("Plugins", &self.plugins.to_string());
    }
}

/// Report data from catalog validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Catalog name.
    pub catalog: String,
    /// Entries per kind.
    pub counts: EntryCounts,
    /// Number of accessor classes, if the model was built.
    pub class_count: Option<usize>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section(&format!(
            "Catalog '{}' ({} entries)",
            self.catalog,
            self.counts.total()
        ));
        self.counts.render(out);
        if let Some(classes) = self.class_count {
            out.key_value_indented("Accessor classes", &classes.to_string());
        }
    }
}
