//! Validation utilities for catalog names and Java packages

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Keeps the source content and the current section path together so
/// validation errors can point at the offending value.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "trellis.toml");
/// ctx.push("output").validate_package("com.example")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    /// Section path (e.g., ["output"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the underlying source context.
    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "package segment in 'output'" or just "package segment" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a key or quoted value in the source.
    pub fn find_span(&self, needle: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), needle)
    }

    /// Validate a catalog name (`libs`, `testLibs`).
    pub fn validate_catalog_name(&self, name: &str) -> Result<()> {
        if let Some(reason) = validate_catalog_name(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for("catalog name"),
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    /// Validate a dotted Java package name.
    pub fn validate_package(&self, package: &str) -> Result<()> {
        for segment in package.split('.') {
            if is_java_keyword(segment) {
                return Err(self.source.reserved_keyword_error(
                    segment,
                    self.context_for("package segment"),
                    self.find_span(package),
                ));
            }

            if let Some(reason) = validate_java_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    segment,
                    self.context_for("package segment"),
                    reason,
                    self.find_span(package),
                ));
            }
        }
        Ok(())
    }
}

/// Java reserved keywords and literals that cannot be used as identifiers
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

/// Check if a name is a Java reserved keyword
pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find the span of a quoted value, falling back to a bare key.
pub(crate) fn find_value_span(src: &str, needle: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{needle}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, needle.len())));
        }
    }

    let key_pattern = format!("{} =", needle);
    src.find(&key_pattern)
        .map(|pos| SourceSpan::from((pos, needle.len())))
}

/// Gradle requires catalog names to start with a lowercase letter and
/// contain only ASCII letters and digits.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_catalog_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        Some(_) => return Some("catalog names must start with a lowercase letter"),
        None => return Some("catalog name cannot be empty"),
    }

    if chars.any(|c| !c.is_ascii_alphanumeric()) {
        return Some("catalog names must contain only letters and digits");
    }

    None
}

/// Validate one Java identifier (package segment).
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_java_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, digits, and underscores");
    }

    None
}
