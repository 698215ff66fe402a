//! Accessor IR.
//!
//! The accessor model is the output of a build pass: an ordered list of
//! [`AccessorClass`] descriptors, one per namespace node, each holding the
//! getters a renderer has to emit. Classes are ordered so that every class
//! appears after all classes it references.

use serde::{Deserialize, Serialize};

use crate::{CatalogEntry, EntryKind};

/// What a getter hands back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnKind {
    /// Dependency handle.
    Library,
    /// Version string.
    Version,
    /// Dependency bundle.
    Bundle,
    /// Plugin handle.
    Plugin,
    /// Nested accessor class.
    Group,
}

impl From<EntryKind> for ReturnKind {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Library => ReturnKind::Library,
            EntryKind::Version => ReturnKind::Version,
            EntryKind::Bundle => ReturnKind::Bundle,
            EntryKind::Plugin => ReturnKind::Plugin,
        }
    }
}

/// Reference to another accessor class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRef {
    /// Class name.
    pub name: String,
    /// Namespace of the referenced class.
    pub kind: EntryKind,
    /// Display path of the referenced group (e.g. `["androidx", "ui"]`).
    pub path: Vec<String>,
}

/// Target of a getter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MethodTarget {
    /// A catalog entry.
    Leaf(CatalogEntry),
    /// A nested accessor class.
    Group(ClassRef),
}

/// A getter on an accessor class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// Method name (e.g. `getPlugin`, `asProvider`).
    pub name: String,
    /// Normalized identifier the name was derived from.
    pub identifier: String,
    /// Return kind.
    pub return_kind: ReturnKind,
    /// What the getter resolves to.
    pub target: MethodTarget,
    /// Whether this is the group's default accessor.
    #[serde(default)]
    pub is_default: bool,
}

impl Method {
    /// The catalog entry behind this getter, if it is a leaf.
    pub fn entry(&self) -> Option<&CatalogEntry> {
        match &self.target {
            MethodTarget::Leaf(entry) => Some(entry),
            MethodTarget::Group(_) => None,
        }
    }

    /// The referenced class, if this getter returns a group.
    pub fn class_ref(&self) -> Option<&ClassRef> {
        match &self.target {
            MethodTarget::Group(class) => Some(class),
            MethodTarget::Leaf(_) => None,
        }
    }
}

/// One accessor class: the getters exposed by one namespace node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorClass {
    /// Class name (e.g. `AndroidxUiLibraryAccessors`).
    pub name: String,
    /// Namespace the class belongs to.
    pub kind: EntryKind,
    /// Display path of the group (empty for namespace roots).
    pub path: Vec<String>,
    /// Whether this is a namespace root or the catalog root.
    pub is_root: bool,
    /// Getters in emission order.
    pub methods: Vec<Method>,
}

impl AccessorClass {
    /// Dotted display path (e.g. `androidx.ui`).
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    /// The default accessor, if the group is itself an entry.
    pub fn default_accessor(&self) -> Option<&Method> {
        self.methods.iter().find(|m| m.is_default)
    }

    /// Look up a getter by method name.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Getters that return catalog entries (including the default accessor).
    pub fn leaf_methods(&self) -> impl Iterator<Item = &Method> {
        self.methods
            .iter()
            .filter(|m| matches!(m.target, MethodTarget::Leaf(_)))
    }

    /// Getters that return nested classes.
    pub fn group_methods(&self) -> impl Iterator<Item = &Method> {
        self.methods
            .iter()
            .filter(|m| matches!(m.target, MethodTarget::Group(_)))
    }
}

/// The complete output of a build pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorModel {
    /// Catalog name (e.g. `libs`).
    pub catalog: String,
    /// Name of the catalog root class.
    pub root: String,
    /// Classes, each after every class it references; the root class is last.
    pub classes: Vec<AccessorClass>,
}

impl AccessorModel {
    /// Look up a class by name.
    pub fn class(&self, name: &str) -> Option<&AccessorClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// The catalog root class.
    pub fn root_class(&self) -> Option<&AccessorClass> {
        self.class(&self.root)
    }

    /// Classes of one namespace.
    pub fn classes_of(&self, kind: EntryKind) -> impl Iterator<Item = &AccessorClass> {
        self.classes.iter().filter(move |c| c.kind == kind)
    }

    /// Total number of getters across all classes.
    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.methods.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, entry: CatalogEntry, is_default: bool) -> Method {
        Method {
            name: name.into(),
            identifier: entry.local_name().into(),
            return_kind: entry.kind.into(),
            target: MethodTarget::Leaf(entry),
            is_default,
        }
    }

    #[test]
    fn test_class_accessors() {
        let class = AccessorClass {
            name: "AndroidxUiLibraryAccessors".into(),
            kind: EntryKind::Library,
            path: vec!["androidx".into(), "ui".into()],
            is_root: false,
            methods: vec![
                leaf(
                    "asProvider",
                    CatalogEntry::library("androidx.ui", "androidx.compose.ui:ui"),
                    true,
                ),
                leaf(
                    "getGraphics",
                    CatalogEntry::library("androidx.ui.graphics", "androidx.compose.ui:ui-graphics"),
                    false,
                ),
                Method {
                    name: "getTest".into(),
                    identifier: "test".into(),
                    return_kind: ReturnKind::Group,
                    target: MethodTarget::Group(ClassRef {
                        name: "AndroidxUiTestLibraryAccessors".into(),
                        kind: EntryKind::Library,
                        path: vec!["androidx".into(), "ui".into(), "test".into()],
                    }),
                    is_default: false,
                },
            ],
        };

        assert_eq!(class.dotted_path(), "androidx.ui");
        assert_eq!(
            class.default_accessor().and_then(Method::entry).map(|e| e.alias.as_str()),
            Some("androidx.ui")
        );
        assert_eq!(class.leaf_methods().count(), 2);
        assert_eq!(class.group_methods().count(), 1);
        assert_eq!(
            class.method("getTest").and_then(Method::class_ref).map(|c| c.name.as_str()),
            Some("AndroidxUiTestLibraryAccessors")
        );
    }

    #[test]
    fn test_return_kind_from_entry_kind() {
        assert_eq!(ReturnKind::from(EntryKind::Bundle), ReturnKind::Bundle);
        assert_eq!(ReturnKind::from(EntryKind::Version), ReturnKind::Version);
    }
}
