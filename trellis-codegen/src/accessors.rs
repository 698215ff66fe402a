//! Accessor class building.
//!
//! Walks a resolved namespace tree and flattens it into [`AccessorClass`]
//! descriptors. Classes are emitted depth-first, post-order, so every class
//! comes after all the classes it references.

use std::collections::HashMap;

use trellis_ir::{AccessorClass, AccessorModel, ClassRef, EntryKind, Method, MethodTarget, ReturnKind};

use crate::{
    Error, Result,
    naming::{self, DEFAULT_ACCESSOR},
    resolve::{Group, Leaf, ResolvedCatalog},
};

/// Builds the accessor classes of one namespace.
#[derive(Debug, Clone, Copy)]
pub struct AccessorTreeBuilder {
    kind: EntryKind,
}

impl AccessorTreeBuilder {
    pub fn new(kind: EntryKind) -> Self {
        Self { kind }
    }

    /// The namespace this builder emits classes for.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Build every class of the tree; the namespace root class comes last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AmbiguousKey`] when two distinct groups map to the
    /// same class name (the groups of `foo.bar.x` and `fooBar.y`).
    pub fn build(&self, root: &Group) -> Result<Vec<AccessorClass>> {
        let mut classes = self.build_descendants(root)?;
        classes.push(self.class_for(root));
        Ok(classes)
    }

    /// Build the classes of every group below `root`, but not `root` itself.
    pub fn build_descendants(&self, root: &Group) -> Result<Vec<AccessorClass>> {
        let mut classes = Vec::new();
        let mut seen = HashMap::new();
        for child in root.children.values() {
            self.emit(child, &mut classes, &mut seen)?;
        }
        Ok(classes)
    }

    fn emit(
        &self,
        group: &Group,
        classes: &mut Vec<AccessorClass>,
        seen: &mut HashMap<String, String>,
    ) -> Result<()> {
        for child in group.children.values() {
            self.emit(child, classes, seen)?;
        }

        let class = self.class_for(group);
        let path = group.dotted_path();
        if let Some(other) = seen.get(&class.name) {
            return Err(Error::ambiguous(
                path,
                other.clone(),
                format!("both groups map to accessor class '{}'", class.name),
            ));
        }
        seen.insert(class.name.clone(), path);
        classes.push(class);
        Ok(())
    }

    /// The class for a single group.
    pub fn class_for(&self, group: &Group) -> AccessorClass {
        let mut methods = Vec::with_capacity(
            usize::from(group.default.is_some()) + group.leaves.len() + group.children.len(),
        );

        if let Some(leaf) = &group.default {
            methods.push(self.leaf_method(DEFAULT_ACCESSOR.to_string(), leaf, true));
        }
        for leaf in group.leaves.values() {
            methods.push(self.leaf_method(naming::method_name(&leaf.identifier), leaf, false));
        }
        for child in group.children.values() {
            methods.push(Method {
                name: naming::method_name(&child.identifier),
                identifier: child.identifier.clone(),
                return_kind: ReturnKind::Group,
                target: MethodTarget::Group(self.class_ref(child)),
                is_default: false,
            });
        }

        AccessorClass {
            name: naming::class_name(self.kind, &group.path),
            kind: self.kind,
            path: group.path.clone(),
            is_root: group.is_root(),
            methods,
        }
    }

    fn leaf_method(&self, name: String, leaf: &Leaf, is_default: bool) -> Method {
        Method {
            name,
            identifier: leaf.identifier.clone(),
            return_kind: self.kind.into(),
            target: MethodTarget::Leaf(leaf.entry.clone()),
            is_default,
        }
    }

    fn class_ref(&self, group: &Group) -> ClassRef {
        ClassRef {
            name: naming::class_name(self.kind, &group.path),
            kind: self.kind,
            path: group.path.clone(),
        }
    }
}

/// Build the complete accessor model of a catalog.
///
/// The library root is replaced by the catalog root class
/// (`LibrariesFor<Name>`), which additionally exposes the version, bundle and
/// plugin namespace roots. Namespace roots are emitted even when empty.
pub fn build_model(catalog: &str, resolved: &ResolvedCatalog) -> Result<AccessorModel> {
    let libraries = AccessorTreeBuilder::new(EntryKind::Library);
    let mut classes = libraries.build_descendants(&resolved.libraries)?;
    let mut root = libraries.class_for(&resolved.libraries);

    for kind in [EntryKind::Version, EntryKind::Bundle, EntryKind::Plugin] {
        classes.extend(AccessorTreeBuilder::new(kind).build(resolved.group(kind))?);

        let identifier = kind.plural();
        root.methods.push(Method {
            name: naming::method_name(identifier),
            identifier: identifier.to_string(),
            return_kind: ReturnKind::Group,
            target: MethodTarget::Group(ClassRef {
                name: kind.root_class_name(),
                kind,
                path: Vec::new(),
            }),
            is_default: false,
        });
    }

    root.name = naming::catalog_class_name(catalog);
    let root_name = root.name.clone();
    classes.push(root);

    tracing::debug!(
        catalog,
        classes = classes.len(),
        "built accessor model"
    );

    Ok(AccessorModel {
        catalog: catalog.to_string(),
        root: root_name,
        classes,
    })
}
