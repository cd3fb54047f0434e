//! Shared utility functions for output formatting

use crate::tree::{FileTree, TreeNode};

/// Output for a filter root that has no children, under every option combination.
pub const EMPTY_DIRECTORY: &str = "(empty directory)";

/// Connector glyph drawn before a nested entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Calculate the prefix for the children of a nested entry.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Per-node formatting policy for `format_tree`.
pub trait NodeLabel {
    /// Text for one node, without any prefix or connector.
    fn label(&self, node: &TreeNode) -> String;

    /// Whether the children of a directory are drawn.
    fn descend(&self, _node: &TreeNode) -> bool {
        true
    }
}

/// Draw a tree as box-drawing lines joined by `\n`.
///
/// Top-level entries are written without connectors; only their
/// descendants carry `├── `/`└── ` glyphs.
pub fn format_tree(tree: &FileTree, labels: &impl NodeLabel) -> String {
    let mut lines = Vec::new();
    for node in &tree.children {
        lines.push(labels.label(node));
        if node.is_dir() && labels.descend(node) {
            format_children(node.children(), "", labels, &mut lines);
        }
    }
    lines.join("\n")
}

fn format_children(
    nodes: &[TreeNode],
    prefix: &str,
    labels: &impl NodeLabel,
    lines: &mut Vec<String>,
) {
    for (i, child) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        lines.push(format!(
            "{}{}{}",
            prefix,
            connector(is_last),
            labels.label(child)
        ));
        if child.is_dir() && labels.descend(child) {
            let new_prefix = continuation_prefix(prefix, is_last);
            format_children(child.children(), &new_prefix, labels, lines);
        }
    }
}

/// Split a rendered line into its line-art prefix and its label.
pub fn split_line_prefix(line: &str) -> (&str, &str) {
    let idx = line
        .char_indices()
        .find(|(_, c)| !matches!(c, '│' | '├' | '└' | '─' | ' '))
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    line.split_at(idx)
}

/// Whether a rendered label names a directory (`name/` or `name/ (...)`).
pub fn is_dir_label(label: &str) -> bool {
    label.ends_with('/') || label.contains("/ (")
}
