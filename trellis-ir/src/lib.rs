//! Intermediate representation types for the Trellis catalog accessor generator.
//!
//! This crate provides the type definitions shared across the Trellis
//! pipeline: the flat catalog entries that go in and the accessor classes that
//! come out.
//!
//! # Architecture
//!
//! ```text
//! catalog snapshot → trellis-codegen (resolve + build) → trellis-ir (AccessorModel) → renderer
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no Java/Kotlin-specific concerns)
//! - Immutable once built (regenerated wholesale on catalog change)
//! - Serializable (pipeline snapshots, `--json` output)

mod accessor;
mod entry;

pub use accessor::{AccessorClass, AccessorModel, ClassRef, Method, MethodTarget, ReturnKind};
pub use entry::{CatalogEntry, CatalogSnapshot, EntryKind};
