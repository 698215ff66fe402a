use std::path::{Path, PathBuf};

use trellis_ir::CatalogSnapshot;

use super::Manifest;
use crate::{Result, snapshot};

/// Represents a trellis.toml file with both raw content and parsed manifest.
pub struct TrellisToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl TrellisToml {
    /// Open and parse a trellis.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory relative paths in the manifest are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Absolute-or-relative path of the entry snapshot.
    pub fn entries_path(&self) -> PathBuf {
        self.base_dir().join(&self.manifest.catalog.entries)
    }

    /// Output directory for generated files.
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir().join(&self.manifest.output.dir)
    }

    /// Load the catalog snapshot the manifest points at.
    pub fn load_snapshot(&self) -> Result<CatalogSnapshot> {
        snapshot::load(&self.entries_path(), &self.manifest.catalog.name)
    }
}
