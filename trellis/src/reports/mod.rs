//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod explain;
mod generate;
mod output;
mod tree;

pub use check::{CheckReport, EntryCounts};
pub use explain::{CatalogInfo, ClassInfo, ExplainReport, LintInfo, PhaseInfo};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
pub use tree::{TreeReport, TreeSection};

#[cfg(test)]
pub(crate) use output::tests::RecordingOutput;
