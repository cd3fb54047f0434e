//! Flat listing to tree reconstruction
//!
//! Hosts list repository contents as a flat set of paths. Intermediate
//! directories may or may not have their own entry, so the builder merges
//! every path segment by name and promotes a node to a directory as soon
//! as any entry implies it has descendants. Promotion is one-way.

use std::collections::BTreeMap;

use crate::entry::{Entry, EntryKind};
use crate::path::normalize_path;

use super::config::{BuildOptions, SortOrder};
use super::node::{FileTree, TreeNode};

/// Mutable node used while merging entries, keyed by segment name.
#[derive(Debug, Default)]
struct PendingNode {
    is_dir: bool,
    size: Option<u64>,
    children: BTreeMap<String, PendingNode>,
}

impl PendingNode {
    fn promote(&mut self) {
        self.is_dir = true;
        self.size = None;
    }

    fn insert(&mut self, segments: &[&str], leaf_is_dir: bool, size: Option<u64>) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };
        let child = self.children.entry((*first).to_string()).or_default();

        if !rest.is_empty() {
            child.promote();
            child.insert(rest, leaf_is_dir, size);
        } else if leaf_is_dir {
            child.promote();
        } else if !child.is_dir {
            child.size = size;
        }
    }

    /// Apply a directory marker without creating nodes.
    ///
    /// A file lying on the marker's path is really a directory, and one
    /// with no surviving files beneath it, so it is dropped.
    fn drop_shadowed_file(&mut self, segments: &[&str]) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };
        let Some(child) = self.children.get_mut(*first) else {
            return;
        };
        if child.is_dir {
            child.drop_shadowed_file(rest);
        } else {
            self.children.remove(*first);
        }
    }

    fn into_node(self, name: String, depth: usize, order: SortOrder) -> TreeNode {
        if self.is_dir {
            TreeNode::Dir {
                name,
                depth,
                children: into_nodes(self.children, depth + 1, order),
            }
        } else {
            TreeNode::File {
                name,
                depth,
                size: self.size,
            }
        }
    }
}

fn into_nodes(
    children: BTreeMap<String, PendingNode>,
    depth: usize,
    order: SortOrder,
) -> Vec<TreeNode> {
    // BTreeMap iteration is already name-ordered; the stable sort below
    // only groups directories and files.
    let mut nodes: Vec<TreeNode> = children
        .into_iter()
        .map(|(name, pending)| pending.into_node(name, depth, order))
        .collect();
    sort_nodes(&mut nodes, order);
    nodes
}

fn sort_nodes(nodes: &mut [TreeNode], order: SortOrder) {
    match order {
        SortOrder::DirsLast => nodes.sort_by_key(|n| n.is_dir()),
        SortOrder::DirsFirst => nodes.sort_by_key(|n| !n.is_dir()),
    }
}

/// Strip the filter prefix from an entry path.
///
/// Returns `None` for entries outside the filter and for the filter
/// directory's own marker entry.
fn relative_path<'a>(path: &'a str, filter: &str) -> Option<&'a str> {
    if filter.is_empty() {
        return Some(path);
    }
    path.strip_prefix(filter)?.strip_prefix('/')
}

/// Build a tree of the entries beneath `filter_path`.
///
/// `filter_path` is normalized first; an empty filter selects every entry.
pub fn build_tree(entries: &[Entry], filter_path: &str, options: &BuildOptions) -> FileTree {
    let filter = normalize_path(filter_path);
    let mut root = PendingNode::default();
    let mut markers: Vec<Vec<&str>> = Vec::new();
    let mut selected = 0usize;

    for entry in entries {
        let Some(relative) = relative_path(&entry.path, &filter) else {
            continue;
        };
        let mut segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        let Some(leaf) = segments.last() else {
            continue;
        };

        let mut leaf_is_dir = entry.kind.is_dir_like();
        let mut size = match entry.kind {
            EntryKind::File => entry.size,
            _ => None,
        };

        if options.has_extension_filter() {
            if leaf_is_dir {
                // Directories only appear through a surviving file
                markers.push(segments);
                continue;
            }
            if !options.keeps_file(leaf) {
                continue;
            }
        }

        if let Some(max_depth) = options.max_depth {
            if segments.len() > max_depth {
                segments.truncate(max_depth);
                leaf_is_dir = true;
                size = None;
            }
        }

        selected += 1;
        root.insert(&segments, leaf_is_dir, size);
    }

    // Markers go last so the result does not depend on entry order
    for marker in &markers {
        root.drop_shadowed_file(marker);
    }

    tracing::debug!(
        filter = %filter,
        total = entries.len(),
        selected,
        "built tree from flat listing"
    );

    FileTree {
        children: into_nodes(root.children, 1, options.order),
    }
}
