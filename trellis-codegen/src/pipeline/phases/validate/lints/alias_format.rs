//! Lint for alias spelling.

use trellis_ir::CatalogSnapshot;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about aliases outside `[a-z][a-zA-Z0-9_.-]*` and aliases
/// with empty segments.
pub struct AliasFormatLint;

impl Lint for AliasFormatLint {
    fn name(&self) -> &'static str {
        "alias-format"
    }

    fn description(&self) -> &'static str {
        "Check that aliases start with a lowercase letter and have no empty segments"
    }

    fn check(&self, snapshot: &CatalogSnapshot, diagnostics: &mut Vec<Diagnostic>) {
        for entry in &snapshot.entries {
            let alias = entry.alias.as_str();

            if alias.split('.').any(str::is_empty) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("{} alias '{}' contains an empty segment", entry.kind, alias),
                    )
                    .at(alias),
                );
                continue;
            }

            if !is_well_formed(alias) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "{} alias '{}' should start with a lowercase letter and contain only letters, digits, '.', '-' or '_'",
                            entry.kind, alias
                        ),
                    )
                    .at(alias)
                    .with_help("aliases are matched case-insensitively; prefer lowercase dotted names"),
                );
            }
        }
    }
}

fn is_well_formed(alias: &str) -> bool {
    let mut chars = alias.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

#[cfg(test)]
mod tests {
    use trellis_ir::CatalogEntry;

    use super::*;

    fn check(aliases: &[&str]) -> Vec<Diagnostic> {
        let snapshot = CatalogSnapshot::new(
            "libs",
            aliases
                .iter()
                .map(|alias| CatalogEntry::library(*alias, "g:a"))
                .collect(),
        );
        let mut diagnostics = Vec::new();
        AliasFormatLint.check(&snapshot, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_well_formed_aliases() {
        assert!(check(&["androidx.core.ktx", "slf4j_nop", "activity-compose", "junitVersion"]).is_empty());
    }

    #[test]
    fn test_uppercase_start() {
        let diagnostics = check(&["Androidx.UI"]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("Androidx.UI"));
        assert!(diagnostics[0].help.is_some());
    }

    #[test]
    fn test_empty_segment() {
        let diagnostics = check(&["androidx..ui", "androidx.ui."]);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("empty segment"));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(check(&["androidx.ui+graphics"]).len(), 1);
    }
}
