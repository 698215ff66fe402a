//! Compilation pipeline for accessor generation.
//!
//! This module provides a [`Pipeline`] orchestrator that runs the phases from
//! catalog snapshot to accessor model:
//!
//! - Explicit phase boundaries (validate → resolve → build)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use trellis_codegen::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! let mut ctx = pipeline.run(snapshot)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let model = ctx.take_model()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
