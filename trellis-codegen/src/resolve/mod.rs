//! Namespace resolution.
//!
//! [`NameResolver`] turns the flat, dotted aliases of one catalog into one
//! tree per entry kind. Resolution runs in two passes over the entries sorted
//! by alias:
//!
//! 1. create the groups for every alias prefix, named after the first
//!    spelling of that path in any alias, including a leaf's own last segment
//! 2. attach every entry to the group of its prefix, either as a named leaf or,
//!    when a child group with the same name exists, as that child's default
//!
//! Sorting first makes the result independent of input order, including which
//! spelling of a differently-cased segment is kept for display.

mod group;

use indexmap::IndexMap;
use serde::Serialize;
use trellis_ir::{CatalogEntry, EntryKind};

pub use group::{Group, Leaf};

use crate::{
    Error, Result,
    naming::{self, Segment},
};

/// One resolved tree per entry kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedCatalog {
    pub libraries: Group,
    pub versions: Group,
    pub bundles: Group,
    pub plugins: Group,
}

impl ResolvedCatalog {
    /// The tree of one kind.
    pub fn group(&self, kind: EntryKind) -> &Group {
        match kind {
            EntryKind::Library => &self.libraries,
            EntryKind::Version => &self.versions,
            EntryKind::Bundle => &self.bundles,
            EntryKind::Plugin => &self.plugins,
        }
    }

    /// Resolve an alias of the given kind.
    pub fn lookup(&self, kind: EntryKind, alias: &str) -> Option<&Leaf> {
        self.group(kind).lookup(alias)
    }

    /// Number of entries across all trees.
    pub fn entry_count(&self) -> usize {
        EntryKind::ALL
            .iter()
            .map(|kind| self.group(*kind).entry_count())
            .sum()
    }
}

/// Resolves flat catalog aliases into namespace trees.
pub struct NameResolver;

impl NameResolver {
    /// Resolve every kind of the catalog into its own tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for a segment that cannot become an
    /// accessor and [`Error::AmbiguousKey`] for two entries that would share
    /// one accessor with different values.
    pub fn resolve(entries: &[CatalogEntry]) -> Result<ResolvedCatalog> {
        Ok(ResolvedCatalog {
            libraries: Self::resolve_namespace(EntryKind::Library, entries)?,
            versions: Self::resolve_namespace(EntryKind::Version, entries)?,
            bundles: Self::resolve_namespace(EntryKind::Bundle, entries)?,
            plugins: Self::resolve_namespace(EntryKind::Plugin, entries)?,
        })
    }

    /// Resolve the entries of one kind. Entries of other kinds are ignored.
    pub fn resolve_namespace(kind: EntryKind, entries: &[CatalogEntry]) -> Result<Group> {
        let mut sorted: Vec<&CatalogEntry> = entries.iter().filter(|e| e.kind == kind).collect();
        sorted.sort_by(|a, b| a.alias.cmp(&b.alias));

        let prepared = sorted
            .into_iter()
            .map(|entry| Ok((entry, naming::segments(kind, &entry.alias)?)))
            .collect::<Result<Vec<_>>>()?;

        let spellings = first_spellings(&prepared);
        let mut root = Group::root();

        for (_, segments) in &prepared {
            let mut group = &mut root;
            for depth in 0..segments.len() - 1 {
                let segment = spellings
                    .get(&path_keys(&segments[..=depth]))
                    .copied()
                    .unwrap_or(&segments[depth]);
                group = child_mut(group, segment);
            }
        }

        for (entry, segments) in &prepared {
            let Some((last, parents)) = segments.split_last() else {
                continue;
            };
            let mut group = &mut root;
            for segment in parents {
                group = child_mut(group, segment);
            }
            attach(group, last, entry)?;
        }

        root.sort_recursive();

        tracing::debug!(
            kind = %kind,
            entries = root.entry_count(),
            groups = root.descendant_count(),
            defaults = root.default_count(),
            "resolved namespace"
        );

        Ok(root)
    }
}

/// First spelling of every key path across all aliases, in sorted alias order.
fn first_spellings<'a>(
    prepared: &'a [(&CatalogEntry, Vec<Segment>)],
) -> IndexMap<Vec<&'a str>, &'a Segment> {
    let mut spellings = IndexMap::new();
    for (_, segments) in prepared {
        for depth in 0..segments.len() {
            spellings
                .entry(path_keys(&segments[..=depth]))
                .or_insert(&segments[depth]);
        }
    }
    spellings
}

fn path_keys(segments: &[Segment]) -> Vec<&str> {
    segments.iter().map(|s| s.key.as_str()).collect()
}

/// Get or create the child for a segment, keeping the first-seen spelling.
fn child_mut<'a>(group: &'a mut Group, segment: &Segment) -> &'a mut Group {
    let parent_path = group.path.clone();
    group
        .children
        .entry(segment.key.clone())
        .or_insert_with(|| Group::new(&segment.name, &segment.identifier, &parent_path))
}

fn attach(group: &mut Group, segment: &Segment, entry: &CatalogEntry) -> Result<()> {
    let leaf = Leaf {
        name: segment.name.clone(),
        identifier: segment.identifier.clone(),
        entry: entry.clone(),
    };

    if let Some(child) = group.children.get_mut(&segment.key) {
        if let Some(existing) = &child.default {
            return merge(existing, &leaf, "both claim the default accessor of the same group");
        }
        tracing::trace!(alias = %entry.alias, group = %child.dotted_path(), "attached default leaf");
        child.default = Some(leaf);
        return Ok(());
    }

    if let Some(existing) = group.leaves.get(&segment.key) {
        return merge(existing, &leaf, "both normalize to the same accessor");
    }

    tracing::trace!(alias = %entry.alias, group = %group.dotted_path(), "attached leaf");
    group.leaves.insert(segment.key.clone(), leaf);
    Ok(())
}

/// Two entries competing for one slot: identical payloads collapse to the
/// one already attached, anything else is ambiguous.
fn merge(existing: &Leaf, incoming: &Leaf, reason: &str) -> Result<()> {
    if existing.entry.same_payload(&incoming.entry) {
        tracing::debug!(
            alias = %incoming.entry.alias,
            kept = %existing.entry.alias,
            "collapsed duplicate alias"
        );
        return Ok(());
    }

    Err(Error::ambiguous(
        &incoming.entry.alias,
        &existing.entry.alias,
        format!("{} with {}", reason, payload_difference(&existing.entry, &incoming.entry)),
    ))
}

fn payload_difference(a: &CatalogEntry, b: &CatalogEntry) -> &'static str {
    if a.coordinate != b.coordinate {
        "different coordinates"
    } else if a.version_ref != b.version_ref {
        "different version references"
    } else {
        "different values"
    }
}
