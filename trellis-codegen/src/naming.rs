//! Accessor naming rules.

use trellis_core::{capitalize, getter_name, normalize_key, to_identifier};
use trellis_ir::EntryKind;

use crate::{Error, Result};

/// Method name of a group's default accessor.
pub const DEFAULT_ACCESSOR: &str = "asProvider";

/// Identifiers that clash with members every generated class inherits.
pub const RESERVED_IDENTIFIERS: &[&str] = &[DEFAULT_ACCESSOR, "class", "convention", "extensions"];

/// First library segments taken by the namespaces on the catalog root.
pub const RESERVED_LIBRARY_PREFIXES: &[&str] = &["bundles", "plugins", "versions"];

/// One normalized alias segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Segment as written in the alias.
    pub name: String,
    /// camelCase identifier.
    pub identifier: String,
    /// Case-insensitive comparison key.
    pub key: String,
}

/// Split and normalize an alias, rejecting segments that cannot become accessors.
pub fn segments(kind: EntryKind, alias: &str) -> Result<Vec<Segment>> {
    alias
        .split('.')
        .enumerate()
        .map(|(position, name)| segment(kind, alias, position, name))
        .collect()
}

fn segment(kind: EntryKind, alias: &str, position: usize, name: &str) -> Result<Segment> {
    if let Some(c) = name.chars().find(|c| c.is_whitespace() || c.is_control()) {
        return Err(Error::invalid(
            alias,
            name,
            format!("contains the whitespace or control character {:?}", c),
        ));
    }

    let identifier = to_identifier(name);
    if identifier.is_empty() {
        return Err(Error::invalid(
            alias,
            name,
            "normalizes to an empty identifier",
        ));
    }

    // The first segment names a top-level class.
    if position == 0 && identifier.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(Error::invalid(
            alias,
            name,
            format!("'{}' starts with a digit; aliases must start with a letter", identifier),
        ));
    }

    let key = normalize_key(name);
    if RESERVED_IDENTIFIERS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(&key))
    {
        return Err(Error::invalid(
            alias,
            name,
            format!("'{}' is a reserved accessor name", identifier),
        ));
    }

    if kind == EntryKind::Library && position == 0 && RESERVED_LIBRARY_PREFIXES.contains(&key.as_str())
    {
        return Err(Error::invalid(
            alias,
            name,
            format!("'{}' is reserved for the {} namespace of the catalog root", key, key),
        ));
    }

    Ok(Segment {
        name: name.to_string(),
        identifier,
        key,
    })
}

/// Getter name for a named leaf or child group.
pub fn method_name(identifier: &str) -> String {
    getter_name(identifier)
}

/// Accessor class name for a group path.
///
/// An empty path names the namespace root (`VersionAccessors`), otherwise the
/// path identifiers are concatenated in PascalCase (`AndroidxUiLibraryAccessors`).
pub fn class_name(kind: EntryKind, path: &[String]) -> String {
    if path.is_empty() {
        return kind.root_class_name();
    }
    let prefix: String = path.iter().map(|id| capitalize(id)).collect();
    format!("{}{}Accessors", prefix, kind.class_infix())
}

/// Name of the catalog root class (`libs` -> `LibrariesForLibs`).
pub fn catalog_class_name(catalog: &str) -> String {
    format!("LibrariesFor{}", capitalize(catalog))
}
