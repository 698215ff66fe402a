//! trellis.toml configuration and catalog snapshot loading.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
pub mod snapshot;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    CatalogConfig, Language, Manifest, OutputConfig, ParseContext, TrellisToml,
};
