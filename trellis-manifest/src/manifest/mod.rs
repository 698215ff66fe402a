//! Manifest types and parsing for trellis.toml files.

mod file;
mod language;
mod parse;
mod validate;

use std::path::PathBuf;

pub use file::TrellisToml;
pub use language::Language;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for trellis.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Catalog to generate accessors for
    pub catalog: CatalogConfig,

    /// Where and how to render the accessors
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[catalog]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Catalog name; the root accessor class is `LibrariesFor<Name>`
    #[serde(default = "default_catalog_name")]
    pub name: String,

    /// Path to the JSON entry snapshot, relative to trellis.toml
    pub entries: PathBuf,
}

/// `[output]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Target language
    #[serde(default)]
    pub language: Language,

    /// Package (namespace) of the generated accessors
    #[serde(default = "default_package")]
    pub package: String,

    /// Output directory, relative to trellis.toml
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            package: default_package(),
            dir: default_output_dir(),
        }
    }
}

fn default_catalog_name() -> String {
    "libs".to_string()
}

fn default_package() -> String {
    "org.gradle.accessors.dm".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build/generated/accessors")
}
