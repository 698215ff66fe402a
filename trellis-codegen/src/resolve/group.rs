//! Resolved namespace nodes.

use indexmap::IndexMap;
use serde::Serialize;
use trellis_core::normalize_key;
use trellis_ir::CatalogEntry;

/// Terminal accessor for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaf {
    /// Last alias segment, as first seen.
    pub name: String,
    /// camelCase identifier of the segment.
    pub identifier: String,
    /// The entry this accessor resolves to.
    pub entry: CatalogEntry,
}

/// A node of a resolved namespace tree.
///
/// A group owns its child groups and its named leaves, both keyed by the
/// normalized segment. When an alias is both a value and a prefix of other
/// aliases (`androidx.ui` next to `androidx.ui.graphics`) its entry becomes
/// the group's `default` leaf instead of a named one. A leaf and a child
/// never share a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Group {
    /// Segment as first seen (empty for the namespace root).
    pub name: String,
    /// camelCase identifier (empty for the namespace root).
    pub identifier: String,
    /// Identifiers from the namespace root down to this group.
    pub path: Vec<String>,
    /// Entry whose alias is exactly this group's path.
    pub default: Option<Leaf>,
    /// Named leaves keyed by normalized segment.
    pub leaves: IndexMap<String, Leaf>,
    /// Child groups keyed by normalized segment.
    pub children: IndexMap<String, Group>,
}

impl Group {
    /// Create an empty namespace root.
    pub fn root() -> Self {
        Self::default()
    }

    pub(crate) fn new(name: &str, identifier: &str, parent_path: &[String]) -> Self {
        let mut path = parent_path.to_vec();
        path.push(identifier.to_string());
        Self {
            name: name.to_string(),
            identifier: identifier.to_string(),
            path,
            ..Self::default()
        }
    }

    /// Whether this is a namespace root.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Dotted identifier path (e.g. `androidx.ui`).
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    /// Whether the group holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.leaves.is_empty() && self.children.is_empty()
    }

    /// Get a child group by segment (compared case-insensitively).
    pub fn child(&self, segment: &str) -> Option<&Group> {
        self.children.get(&normalize_key(segment))
    }

    /// Find the accessor an alias resolves to by walking its own segments.
    ///
    /// Returns the named leaf for the last segment, or the default leaf of the
    /// child group with that name.
    pub fn lookup(&self, alias: &str) -> Option<&Leaf> {
        let segments: Vec<&str> = alias.split('.').collect();
        let (last, parents) = segments.split_last()?;

        let mut group = self;
        for segment in parents {
            group = group.child(segment)?;
        }

        let key = normalize_key(last);
        group
            .leaves
            .get(&key)
            .or_else(|| group.children.get(&key).and_then(|c| c.default.as_ref()))
    }

    /// Number of entries reachable from this group, including its default.
    pub fn entry_count(&self) -> usize {
        usize::from(self.default.is_some())
            + self.leaves.len()
            + self.children.values().map(Group::entry_count).sum::<usize>()
    }

    /// Number of default leaves in this subtree.
    pub fn default_count(&self) -> usize {
        usize::from(self.default.is_some())
            + self
                .children
                .values()
                .map(Group::default_count)
                .sum::<usize>()
    }

    /// Number of groups in this subtree, excluding this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// All leaves of this subtree, depth-first.
    pub fn all_leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Leaf>) {
        out.extend(self.default.iter());
        out.extend(self.leaves.values());
        for child in self.children.values() {
            child.collect_leaves(out);
        }
    }

    /// Sort leaves and children by key, recursively.
    pub(crate) fn sort_recursive(&mut self) {
        self.leaves.sort_keys();
        self.children.sort_keys();
        for child in self.children.values_mut() {
            child.sort_recursive();
        }
    }
}
