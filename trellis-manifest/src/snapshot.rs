//! Catalog snapshot loading.
//!
//! The snapshot is the already-parsed entry set, stored as a JSON array of
//! [`CatalogEntry`] records. Reading the host build tool's own catalog format
//! happens upstream of Trellis.

use std::path::Path;

use trellis_ir::{CatalogEntry, CatalogSnapshot};

use crate::{Error, Result};

/// Load a snapshot from a JSON file.
pub fn load(path: &Path, catalog_name: &str) -> Result<CatalogSnapshot> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    let entries = parse(&content).map_err(|e| {
        Box::new(Error::Snapshot {
            path: path.to_path_buf(),
            source: e,
        })
    })?;

    tracing::debug!(
        path = %path.display(),
        entries = entries.len(),
        "loaded catalog snapshot"
    );

    Ok(CatalogSnapshot::new(catalog_name, entries))
}

/// Decode a snapshot from JSON text.
pub fn parse(content: &str) -> std::result::Result<Vec<CatalogEntry>, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use trellis_ir::EntryKind;

    use super::*;

    #[test]
    fn test_parse_all_kinds() {
        let entries = parse(
            r#"[
                {"alias": "androidx.ui", "kind": "library", "coordinate": "androidx.compose.ui:ui"},
                {"alias": "ktor.client.cio", "kind": "library", "coordinate": "io.ktor:ktor-client-cio", "version_ref": "ktor.client"},
                {"alias": "compose.plugin", "kind": "version", "literal_value": "1.6.11"},
                {"alias": "compose", "kind": "bundle", "coordinate": "androidx.ui, androidx.ui.graphics"},
                {"alias": "kotlin.jvm", "kind": "plugin", "coordinate": "org.jetbrains.kotlin.jvm", "version_ref": "kotlin"}
            ]"#,
        )
        .unwrap();

        let kinds: Vec<_> = entries.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntryKind::Library,
                EntryKind::Library,
                EntryKind::Version,
                EntryKind::Bundle,
                EntryKind::Plugin
            ]
        );
        assert_eq!(entries[1].version_ref.as_deref(), Some("ktor.client"));
        assert_eq!(entries[2].literal_value.as_deref(), Some("1.6.11"));
    }

    #[test]
    fn test_parse_unknown_kind_fails() {
        assert!(parse(r#"[{"alias": "x", "kind": "module"}]"#).is_err());
    }
}
