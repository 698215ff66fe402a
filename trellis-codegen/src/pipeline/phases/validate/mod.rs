//! Validate phase - runs lints on the catalog snapshot.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{AliasFormatLint, CaseVariantLint, MissingValueLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the snapshot using configurable lints.
///
/// The built-in lints only warn. Resolution reports the fatal problems.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(AliasFormatLint),
                Box::new(CaseVariantLint),
                Box::new(MissingValueLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get the names of all lints that will be run.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Lint catalog aliases and values"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.snapshot, &mut ctx.diagnostics);
        }

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use trellis_ir::{CatalogEntry, CatalogSnapshot};

    use super::*;
    use crate::pipeline::Diagnostic;

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _snapshot: &CatalogSnapshot, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("validate", "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(CatalogSnapshot::default());
        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);

        assert!(phase.run(&mut ctx).is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let snapshot = CatalogSnapshot::new(
            "libs",
            vec![
                CatalogEntry::library("Junit", ""),
                CatalogEntry::version("kotlin", "2.0.0"),
            ],
        );
        let mut ctx = CompilationContext::new(snapshot);

        assert!(ValidatePhase::new().run(&mut ctx).is_ok());
        assert_eq!(ctx.warning_count(), 2);
    }

    #[test]
    fn test_lint_names() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            vec!["alias-format", "case-variant", "missing-value"]
        );
        assert!(ValidatePhase::empty().lint_names().is_empty());
    }
}
