//! Lint for aliases that only differ in case or separators.

use std::collections::HashMap;

use trellis_core::normalize_key;
use trellis_ir::{CatalogEntry, CatalogSnapshot, EntryKind};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when two aliases of one kind normalize to the same
/// accessor path (`androidx.UI` and `androidx.ui`, `ktor.client-cio` and
/// `ktor.clientCio`).
pub struct CaseVariantLint;

impl Lint for CaseVariantLint {
    fn name(&self) -> &'static str {
        "case-variant"
    }

    fn description(&self) -> &'static str {
        "Detect aliases that differ only in case or separators"
    }

    fn check(&self, snapshot: &CatalogSnapshot, diagnostics: &mut Vec<Diagnostic>) {
        let mut sorted: Vec<&CatalogEntry> = snapshot.entries.iter().collect();
        sorted.sort_by(|a, b| (a.kind, &a.alias).cmp(&(b.kind, &b.alias)));

        let mut seen: HashMap<(EntryKind, String), &str> = HashMap::new();

        for entry in sorted {
            let key = (entry.kind, normalized_path(&entry.alias));
            match seen.get(&key) {
                Some(first) if *first != entry.alias => {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "{} alias '{}' differs from '{}' only in case or separators",
                                entry.kind, entry.alias, first
                            ),
                        )
                        .at(entry.alias.as_str())
                        .with_help("both aliases resolve to the same accessor; keep one spelling"),
                    );
                }
                Some(_) => {}
                None => {
                    seen.insert(key, &entry.alias);
                }
            }
        }
    }
}

fn normalized_path(alias: &str) -> String {
    alias
        .split('.')
        .map(normalize_key)
        .collect::<Vec<_>>()
        .join(".")
}
