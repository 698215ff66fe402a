//! Resolved tree display formatting.
//!
//! # Example
//!
//! ```ignore
//! use trellis_codegen::display::{DisplayStyle, TreeDisplay};
//!
//! let display = TreeDisplay::new(&resolved.libraries).style(DisplayStyle::TreeBox);
//! println!("{}", display.render());
//! ```

use std::fmt;

use crate::resolve::{Group, Leaf};

/// Display style for resolved trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Indented names; leaves show the alias they resolve to.
    ///
    /// ```text
    /// junit = junit
    /// androidx
    ///   ui [androidx.ui]
    ///     graphics = androidx.ui.graphics
    /// ```
    #[default]
    Simple,

    /// Tree structure with box-drawing characters.
    ///
    /// ```text
    /// ├─ junit = junit
    /// └─ androidx
    ///    └─ ui [androidx.ui]
    ///       └─ graphics = androidx.ui.graphics
    /// ```
    TreeBox,
}

/// Declarative tree display formatter.
///
/// Entries are listed in accessor order: named leaves first, then child
/// groups. A group that is itself an entry shows its alias in brackets.
#[derive(Debug, Clone)]
pub struct TreeDisplay<'a> {
    root: &'a Group,
    style: DisplayStyle,
    indent_str: &'a str,
}

enum Node<'a> {
    Leaf(&'a Leaf),
    Group(&'a Group),
}

impl<'a> TreeDisplay<'a> {
    /// Create a new display formatter for a resolved tree.
    pub fn new(root: &'a Group) -> Self {
        Self {
            root,
            style: DisplayStyle::default(),
            indent_str: "  ",
        }
    }

    /// Set the display style.
    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the indentation string for the simple style (default: two spaces).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    /// Render the tree to a string.
    pub fn render(&self) -> String {
        let mut output = String::new();
        if let Some(leaf) = &self.root.default {
            output.push_str(&format!("[{}]\n", leaf.entry.alias));
        }
        match self.style {
            DisplayStyle::Simple => self.render_simple(&mut output, self.root, 0),
            DisplayStyle::TreeBox => self.render_tree_box(&mut output, self.root, ""),
        }
        output
    }

    fn render_simple(&self, output: &mut String, group: &Group, depth: usize) {
        let indent = self.indent_str.repeat(depth);
        for node in nodes(group) {
            output.push_str(&indent);
            output.push_str(&label(&node));
            output.push('\n');
            if let Node::Group(child) = node {
                self.render_simple(output, child, depth + 1);
            }
        }
    }

    fn render_tree_box(&self, output: &mut String, group: &Group, prefix: &str) {
        let nodes = nodes(group);
        let count = nodes.len();

        for (i, node) in nodes.into_iter().enumerate() {
            let is_last = i == count - 1;
            let connector = if is_last { "└─ " } else { "├─ " };
            output.push_str(prefix);
            output.push_str(connector);
            output.push_str(&label(&node));
            output.push('\n');

            if let Node::Group(child) = node {
                let child_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
                self.render_tree_box(output, child, &child_prefix);
            }
        }
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

fn nodes(group: &Group) -> Vec<Node<'_>> {
    group
        .leaves
        .values()
        .map(Node::Leaf)
        .chain(group.children.values().map(Node::Group))
        .collect()
}

fn label(node: &Node<'_>) -> String {
    match node {
        Node::Leaf(leaf) => format!("{} = {}", leaf.identifier, leaf.entry.alias),
        Node::Group(group) => match &group.default {
            Some(leaf) => format!("{} [{}]", group.identifier, leaf.entry.alias),
            None => group.identifier.clone(),
        },
    }
}
