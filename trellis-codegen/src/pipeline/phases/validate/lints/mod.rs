//! Built-in lints for snapshot validation.

mod alias_format;
mod case_variant;
mod missing_value;

pub use alias_format::AliasFormatLint;
pub use case_variant::CaseVariantLint;
pub use missing_value::MissingValueLint;
