//! Plain tree listing
//!
//! Files are listed before directories and nothing is annotated.

use crate::entry::Entry;
use crate::tree::{BuildOptions, FileTree, TreeNode, build_tree};

use super::utils::{EMPTY_DIRECTORY, NodeLabel, format_tree};

/// Formatter for the unannotated listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, tree: &FileTree) -> String {
        if tree.is_empty() {
            return EMPTY_DIRECTORY.to_string();
        }
        format_tree(tree, self)
    }
}

impl NodeLabel for PlainFormatter {
    fn label(&self, node: &TreeNode) -> String {
        if node.is_dir() {
            format!("{}/", node.name())
        } else {
            node.name().to_string()
        }
    }
}

/// Render every entry beneath `filter_path` as a plain listing.
pub fn render_plain(entries: &[Entry], filter_path: &str) -> String {
    let tree = build_tree(entries, filter_path, &BuildOptions::plain());
    PlainFormatter::new().format(&tree)
}
