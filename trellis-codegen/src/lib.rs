//! Namespace resolution and accessor tree building for Trellis.
//!
//! This crate turns a flat set of dotted catalog aliases into accessor trees
//! and provides the language-agnostic pieces used by renderers.
//!
//! # Module Organization
//!
//! - [`resolve`] - Name resolution (NameResolver, Group, Leaf)
//! - [`accessors`] - Accessor class building (AccessorTreeBuilder, build_model)
//! - [`pipeline`] - Compilation pipeline (Pipeline, Phase, Plugin, lints)
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`language`] - Language-specific abstractions (LanguageCodegen)
//! - [`display`] - Resolved tree formatting

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod accessors;
pub mod builder;
pub mod display;
mod error;
pub mod language;
pub mod naming;
pub mod pipeline;
pub mod resolve;

pub use accessors::{AccessorTreeBuilder, build_model};
pub use error::{Error, Result};
pub use resolve::{Group, Leaf, NameResolver, ResolvedCatalog};
