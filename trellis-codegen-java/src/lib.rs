//! Java renderer for Trellis accessor models.
//!
//! Emits one source file holding the catalog root class with every accessor
//! class nested inside it as a static class.

mod generator;
mod render;
mod types;

pub mod files;

pub use generator::{DEFAULT_PACKAGE, Generator};
pub use trellis_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use types::JavaKind;
