//! Core operations.
//!
//! This module contains the business logic for trellis commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod explain;
pub mod generate;
pub mod tree;

pub use check::check;
pub use explain::explain;
pub use generate::{GenerateOptions, generate};
pub use tree::tree;

use trellis_codegen::pipeline::Diagnostic;
use trellis_ir::{CatalogSnapshot, EntryKind};

use crate::reports::EntryCounts;

/// Format a diagnostic with its location and help, rustc style.
fn format_diagnostic(diag: &Diagnostic) -> String {
    let mut msg = diag.message.clone();
    if let Some(loc) = &diag.location {
        msg.push_str(&format!("\n  --> {}", loc));
    }
    if let Some(help) = &diag.help {
        msg.push_str(&format!("\n  = help: {}", help));
    }
    msg
}

fn entry_counts(snapshot: &CatalogSnapshot) -> EntryCounts {
    EntryCounts {
        libraries: snapshot.count(EntryKind::Library),
        versions: snapshot.count(EntryKind::Version),
        bundles: snapshot.count(EntryKind::Bundle),
        plugins: snapshot.count(EntryKind::Plugin),
    }
}
