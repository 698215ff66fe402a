//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints the snapshot and collects diagnostics
//! - [`ResolvePhase`] - resolves aliases into namespace trees
//! - [`BuildPhase`] - builds the accessor model

mod build;
mod resolve;
mod validate;

pub use build::BuildPhase;
pub use resolve::ResolvePhase;
pub use validate::{
    AliasFormatLint, CaseVariantLint, Lint, LintInfo, MissingValueLint, ValidatePhase,
};
