//! Unified language dispatch.

use trellis_codegen::language::LanguageCodegen;
use trellis_codegen_java::Generator as JavaGenerator;
use trellis_ir::AccessorModel;
use trellis_manifest::Language;

/// Language-specific support for accessor generation.
pub struct LanguageSupport {
    language: Language,
    /// Display name (e.g., "Java").
    pub display_name: &'static str,
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        match language {
            Language::Java => Self {
                language,
                display_name: "Java",
            },
        }
    }

    /// Create a generator for this language.
    pub fn generator<'a>(
        &self,
        model: &'a AccessorModel,
        package: &str,
    ) -> Box<dyn LanguageCodegen + 'a> {
        match self.language {
            Language::Java => Box::new(JavaGenerator::new(model).with_package(package)),
        }
    }
}
