//! Identifier normalization shared by the resolver and the renderers.
//!
//! Resolution compares segments with [`normalize_key`] and renderers emit
//! names built from [`to_identifier`]. Both go through the same tokenizer so a
//! resolved name and the generated identifier never diverge.

/// Characters that separate words inside one alias segment.
const WORD_SEPARATORS: [char; 3] = ['-', '_', '.'];

/// Convert an alias segment to a camelCase identifier.
///
/// The segment is split on `-`, `_` and `.`, non-alphanumeric characters are
/// stripped from every token and empty tokens are dropped. The first letter of
/// the first token is lower-cased and the first letter of every following
/// token upper-cased; all other characters keep their casing.
///
/// ```
/// use trellis_core::to_identifier;
///
/// assert_eq!(to_identifier("activity-compose"), "activityCompose");
/// assert_eq!(to_identifier("junitVersion"), "junitVersion");
/// assert_eq!(to_identifier("slf4j_nop"), "slf4jNop");
/// ```
pub fn to_identifier(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let tokens = segment
        .split(WORD_SEPARATORS)
        .map(|token| {
            token
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
        })
        .filter(|token| !token.is_empty());

    for (i, token) in tokens.enumerate() {
        if i == 0 {
            out.push_str(&decapitalize(&token));
        } else {
            out.push_str(&capitalize(&token));
        }
    }
    out
}

/// Case-insensitive comparison key for an alias segment.
pub fn normalize_key(segment: &str) -> String {
    to_identifier(segment).to_ascii_lowercase()
}

/// Getter name for an identifier (e.g., "plugin" -> "getPlugin")
pub fn getter_name(identifier: &str) -> String {
    format!("get{}", capitalize(identifier))
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_identifier() {
        assert_eq!(to_identifier("ui"), "ui");
        assert_eq!(to_identifier("Androidx"), "androidx");
        assert_eq!(to_identifier("UI"), "uI");
        assert_eq!(to_identifier("lifecycle-runtime-ktx"), "lifecycleRuntimeKtx");
        assert_eq!(to_identifier("junit4"), "junit4");
        assert_eq!(to_identifier("a--b"), "aB");
        assert_eq!(to_identifier("ktor+client"), "ktorclient");
    }

    #[test]
    fn test_to_identifier_empty() {
        assert_eq!(to_identifier(""), "");
        assert_eq!(to_identifier("-_-"), "");
        assert_eq!(to_identifier("@!"), "");
    }

    #[test]
    fn test_normalize_key_ignores_case_and_separators() {
        assert_eq!(normalize_key("ui-test"), "uitest");
        assert_eq!(normalize_key("uiTest"), "uitest");
        assert_eq!(normalize_key("UI_TEST"), "uitest");
    }

    #[test]
    fn test_getter_name() {
        assert_eq!(getter_name("plugin"), "getPlugin");
        assert_eq!(getter_name("junitVersion"), "getJunitVersion");
        assert_eq!(getter_name("junit4"), "getJunit4");
    }
}
