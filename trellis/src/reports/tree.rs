//! Tree command report data structures.

use super::output::{Output, Report};

/// Resolved namespace trees of a catalog.
#[derive(Debug)]
pub struct TreeReport {
    pub catalog: String,
    pub sections: Vec<TreeSection>,
}

/// One namespace.
#[derive(Debug)]
pub struct TreeSection {
    /// Namespace name (e.g. "plugins").
    pub title: String,
    pub entry_count: usize,
    /// Rendered tree.
    pub tree: String,
}

impl Report for TreeReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!(
                "{}.{} ({})",
                self.catalog, section.title, section.entry_count
            ));
            if section.tree.is_empty() {
                out.list_item("(empty)");
            } else {
                out.preformatted(section.tree.trim_end());
            }
        }
    }
}
