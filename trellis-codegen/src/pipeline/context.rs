//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use trellis_ir::{AccessorModel, CatalogSnapshot};

use super::diagnostic::{Diagnostic, Severity};
use crate::resolve::ResolvedCatalog;

/// Context passed through all pipeline phases.
///
/// Carries the state of compilation through each phase, accumulating results
/// and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The catalog being compiled.
    pub snapshot: CatalogSnapshot,
    /// Resolved namespace trees (populated by ResolvePhase).
    pub resolved: Option<ResolvedCatalog>,
    /// Accessor model (populated by BuildPhase).
    pub model: Option<AccessorModel>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a snapshot.
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot,
            resolved: None,
            model: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a prepared diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the accessor model out of the context.
    ///
    /// # Errors
    ///
    /// Fails if BuildPhase hasn't run.
    pub fn take_model(&mut self) -> Result<AccessorModel> {
        self.model
            .take()
            .ok_or_else(|| eyre!("accessor model not set - did BuildPhase run?"))
    }

    /// Take the resolved trees out of the context.
    ///
    /// # Errors
    ///
    /// Fails if ResolvePhase hasn't run.
    pub fn take_resolved(&mut self) -> Result<ResolvedCatalog> {
        self.resolved
            .take()
            .ok_or_else(|| eyre!("resolved catalog not set - did ResolvePhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_snapshot() -> CatalogSnapshot {
        CatalogSnapshot::new("libs", Vec::new())
    }

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(make_test_snapshot());

        assert!(ctx.resolved.is_none());
        assert!(ctx.model.is_none());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(make_test_snapshot());

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");
        ctx.add_info("test", "just info");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_take_model_before_build() {
        let mut ctx = CompilationContext::new(make_test_snapshot());
        assert!(ctx.take_model().is_err());
        assert!(ctx.take_resolved().is_err());
    }
}
