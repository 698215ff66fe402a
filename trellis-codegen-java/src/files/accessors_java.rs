use std::path::{Path, PathBuf};

use trellis_core::GeneratedFile;
use trellis_ir::AccessorModel;

use crate::render::render_file;

/// The Java source file holding the catalog root class and its nested
/// accessor classes.
pub struct AccessorsJava<'a> {
    pub model: &'a AccessorModel,
    pub package: &'a str,
}

impl<'a> AccessorsJava<'a> {
    pub fn new(model: &'a AccessorModel, package: &'a str) -> Self {
        Self { model, package }
    }

    /// Path relative to the output directory (`org/gradle/accessors/dm/LibrariesForLibs.java`).
    pub fn relative_path(&self) -> String {
        format!("{}/{}.java", self.package.replace('.', "/"), self.model.root)
    }
}

impl GeneratedFile for AccessorsJava<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn render(&self) -> String {
        render_file(self.model, self.package)
    }
}
