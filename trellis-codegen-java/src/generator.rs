use std::path::Path;

use eyre::Result;
use trellis_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use trellis_core::{GeneratedFile, WriteResult};
use trellis_ir::AccessorModel;

use crate::files::AccessorsJava;

/// Package the accessor classes are generated into unless configured otherwise.
pub const DEFAULT_PACKAGE: &str = "org.gradle.accessors.dm";

/// Java renderer producing one source file per catalog.
pub struct Generator<'a> {
    model: &'a AccessorModel,
    package: String,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let file = self.file();
        vec![PreviewFile {
            path: file.relative_path(),
            content: file.render(),
        }]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let file = self.file();
        let path = file.relative_path();
        let mut result = GenerateResult::default();

        match file.write(output_dir)? {
            WriteResult::Written => {
                tracing::info!(path = %path, "wrote accessor source");
                result.written.push(path);
            }
            WriteResult::Unchanged => {
                tracing::debug!(path = %path, "accessor source unchanged");
                result.unchanged.push(path);
            }
        }

        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a AccessorModel) -> Self {
        Self {
            model,
            package: DEFAULT_PACKAGE.to_string(),
        }
    }

    /// Generate into a different Java package.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    fn file(&self) -> AccessorsJava<'_> {
        AccessorsJava::new(self.model, &self.package)
    }
}
