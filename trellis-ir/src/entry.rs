//! Flat catalog entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a catalog entry.
///
/// Every kind is its own namespace: a library and a plugin sharing a dotted
/// prefix never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Library,
    Version,
    Bundle,
    Plugin,
}

impl EntryKind {
    /// All kinds in emission order.
    pub const ALL: [EntryKind; 4] = [
        EntryKind::Library,
        EntryKind::Version,
        EntryKind::Bundle,
        EntryKind::Plugin,
    ];

    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Library => "library",
            EntryKind::Version => "version",
            EntryKind::Bundle => "bundle",
            EntryKind::Plugin => "plugin",
        }
    }

    /// Plural form, used for group descriptions (e.g. "Group of plugins at ...").
    pub fn plural(&self) -> &'static str {
        match self {
            EntryKind::Library => "libraries",
            EntryKind::Version => "versions",
            EntryKind::Bundle => "bundles",
            EntryKind::Plugin => "plugins",
        }
    }

    /// Infix used in accessor class names (e.g. `AndroidxUiLibraryAccessors`).
    pub fn class_infix(&self) -> &'static str {
        match self {
            EntryKind::Library => "Library",
            EntryKind::Version => "Version",
            EntryKind::Bundle => "Bundle",
            EntryKind::Plugin => "Plugin",
        }
    }

    /// Name of the root accessor class of this namespace.
    pub fn root_class_name(&self) -> String {
        format!("{}Accessors", self.class_infix())
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One declaration of the flat catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Dotted key (e.g. `androidx.ui.tooling.preview`).
    pub alias: String,
    /// Entry kind.
    pub kind: EntryKind,
    /// Module coordinates (`group:name`), plugin id, or bundle members.
    #[serde(default)]
    pub coordinate: String,
    /// Name of the version alias this entry refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_ref: Option<String>,
    /// Literal version value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal_value: Option<String>,
}

impl CatalogEntry {
    /// Create an entry of the given kind.
    pub fn new(kind: EntryKind, alias: impl Into<String>, coordinate: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            kind,
            coordinate: coordinate.into(),
            version_ref: None,
            literal_value: None,
        }
    }

    /// Create a library entry.
    pub fn library(alias: impl Into<String>, coordinate: impl Into<String>) -> Self {
        Self::new(EntryKind::Library, alias, coordinate)
    }

    /// Create a version entry holding a literal value.
    pub fn version(alias: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(EntryKind::Version, alias, "").with_literal_value(value)
    }

    /// Create a bundle entry; `members` are library aliases.
    pub fn bundle(alias: impl Into<String>, members: &[&str]) -> Self {
        Self::new(EntryKind::Bundle, alias, members.join(", "))
    }

    /// Create a plugin entry.
    pub fn plugin(alias: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(EntryKind::Plugin, alias, id)
    }

    /// Set the version reference.
    pub fn with_version_ref(mut self, version_ref: impl Into<String>) -> Self {
        self.version_ref = Some(version_ref.into());
        self
    }

    /// Set the literal version value.
    pub fn with_literal_value(mut self, value: impl Into<String>) -> Self {
        self.literal_value = Some(value.into());
        self
    }

    /// Dotted segments of the alias.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.alias.split('.')
    }

    /// Last segment of the alias.
    pub fn local_name(&self) -> &str {
        self.alias.rsplit('.').next().unwrap_or(&self.alias)
    }

    /// Whether two entries declare the same thing (ignoring the alias spelling).
    pub fn same_payload(&self, other: &CatalogEntry) -> bool {
        self.kind == other.kind
            && self.coordinate == other.coordinate
            && self.version_ref == other.version_ref
            && self.literal_value == other.literal_value
    }
}

/// An immutable, already-parsed catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Catalog name (e.g. `libs`).
    pub name: String,
    /// Flat, order-independent entry set.
    pub entries: Vec<CatalogEntry>,
}

impl CatalogSnapshot {
    /// Create a snapshot.
    pub fn new(name: impl Into<String>, entries: Vec<CatalogEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Entries of one kind.
    pub fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    /// Count the entries of one kind.
    pub fn count(&self, kind: EntryKind) -> usize {
        self.of_kind(kind).count()
    }
}
