//! Language-specific abstractions.

use std::path::Path;

use eyre::Result;

/// Trait for language-specific accessor renderers.
///
/// Implement this trait to render the accessor model in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content changed, relative to the output directory
    pub written: Vec<String>,
    /// Files that already had the rendered content
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    /// Total number of files produced.
    pub fn file_count(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
