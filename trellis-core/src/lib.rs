//! Core utilities for the Trellis catalog accessor generator.
//!
//! This crate provides identifier normalization and generated-file writing
//! used across the Trellis workspace.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, WriteResult};
// String utilities
pub use utils::{capitalize, getter_name, normalize_key, to_identifier};
