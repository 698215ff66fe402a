use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// A file produced by a renderer.
///
/// Generated accessors are regenerated wholesale on every run, so writing
/// always replaces the previous content. A file whose rendered content is
/// byte-identical to what is on disk is left untouched to keep mtimes stable
/// for the host build tool.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();

        if let Ok(existing) = std::fs::read_to_string(&path)
            && existing == content
        {
            return Ok(WriteResult::Unchanged);
        }

        write_file(&path, &content)?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the rendered content
    Unchanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixture(&'static str);

    impl GeneratedFile for Fixture {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("org").join("example").join("Accessors.java")
        }

        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_generated_file_written_then_unchanged() {
        let temp = TempDir::new().unwrap();

        let first = Fixture("class A {}").write(temp.path()).unwrap();
        assert_eq!(first, WriteResult::Written);

        let second = Fixture("class A {}").write(temp.path()).unwrap();
        assert_eq!(second, WriteResult::Unchanged);
    }

    #[test]
    fn test_generated_file_overwrites_changed_content() {
        let temp = TempDir::new().unwrap();
        Fixture("class A {}").write(temp.path()).unwrap();

        let result = Fixture("class B {}").write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        let path = temp.path().join("org/example/Accessors.java");
        assert_eq!(fs::read_to_string(path).unwrap(), "class B {}");
    }
}
