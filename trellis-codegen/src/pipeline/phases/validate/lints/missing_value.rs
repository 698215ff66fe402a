//! Lint for entries without a value.

use trellis_ir::{CatalogSnapshot, EntryKind};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about libraries and plugins without coordinates, bundles
/// without members and versions without a value.
pub struct MissingValueLint;

impl Lint for MissingValueLint {
    fn name(&self) -> &'static str {
        "missing-value"
    }

    fn description(&self) -> &'static str {
        "Check that every entry declares a coordinate or value"
    }

    fn check(&self, snapshot: &CatalogSnapshot, diagnostics: &mut Vec<Diagnostic>) {
        for entry in &snapshot.entries {
            let missing = match entry.kind {
                EntryKind::Library if entry.coordinate.trim().is_empty() => Some("no coordinates"),
                EntryKind::Plugin if entry.coordinate.trim().is_empty() => Some("no plugin id"),
                EntryKind::Bundle if entry.coordinate.trim().is_empty() => Some("no members"),
                EntryKind::Version if entry.literal_value.is_none() => Some("no value"),
                _ => None,
            };

            if let Some(what) = missing {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("{} '{}' has {}", entry.kind, entry.alias, what),
                    )
                    .at(entry.alias.as_str()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use trellis_ir::CatalogEntry;

    use super::*;

    #[test]
    fn test_missing_values() {
        let snapshot = CatalogSnapshot::new(
            "libs",
            vec![
                CatalogEntry::library("junit", ""),
                CatalogEntry::plugin("kotlin.jvm", " "),
                CatalogEntry::bundle("compose", &[]),
                CatalogEntry::new(EntryKind::Version, "agp", ""),
                CatalogEntry::version("kotlin", "2.0.0"),
                CatalogEntry::library("okhttp", "com.squareup.okhttp3:okhttp"),
            ],
        );
        let mut diagnostics = Vec::new();
        MissingValueLint.check(&snapshot, &mut diagnostics);

        let locations: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| d.location.as_deref())
            .collect();
        assert_eq!(locations, vec!["junit", "kotlin.jvm", "compose", "agp"]);
        assert_eq!(diagnostics[3].message, "version 'agp' has no value");
    }
}
