//! Tree operation - resolved namespace display.

use eyre::{Context, Result};
use trellis_codegen::{
    NameResolver,
    display::{DisplayStyle, TreeDisplay},
};
use trellis_ir::{CatalogSnapshot, EntryKind};

use crate::reports::{TreeReport, TreeSection};

/// Resolve the snapshot and render the requested namespaces.
pub fn tree(snapshot: CatalogSnapshot, kinds: &[EntryKind]) -> Result<TreeReport> {
    let resolved = NameResolver::resolve(&snapshot.entries).wrap_err("Resolution failed")?;

    let sections = kinds
        .iter()
        .map(|&kind| {
            let root = resolved.group(kind);
            TreeSection {
                title: kind.plural().to_string(),
                entry_count: root.entry_count(),
                tree: TreeDisplay::new(root)
                    .style(DisplayStyle::TreeBox)
                    .render(),
            }
        })
        .collect();

    Ok(TreeReport {
        catalog: snapshot.name,
        sections,
    })
}

#[cfg(test)]
mod tests {
    use trellis_ir::CatalogEntry;

    use super::*;

    #[test]
    fn test_tree_single_kind() {
        let snapshot = CatalogSnapshot::new(
            "libs",
            vec![
                CatalogEntry::library("junit", "junit:junit"),
                CatalogEntry::plugin("kotlin.jvm", "org.jetbrains.kotlin.jvm"),
            ],
        );
        let report = tree(snapshot, &[EntryKind::Plugin]).unwrap();

        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].title, "plugins");
        assert_eq!(report.sections[0].entry_count, 1);
        assert!(report.sections[0].tree.contains("kotlin"));
    }
}
