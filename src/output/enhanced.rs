//! Annotated tree listing
//!
//! Directories are listed before files. Depth bounds and extension filters
//! are applied while the tree is built, so excluded entries never show up
//! in the listing or in any count.

use crate::entry::Entry;
use crate::stats::{collect_stats, subtree_totals};
use crate::tree::{FileTree, RenderOptions, TreeNode, build_tree, format_size, pluralize};

use super::utils::{EMPTY_DIRECTORY, NodeLabel, format_tree};

/// Formatter for the annotated listing.
pub struct EnhancedFormatter {
    options: RenderOptions,
}

impl EnhancedFormatter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Build the tree for `entries` with this formatter's filters.
    pub fn build(&self, entries: &[Entry], filter_path: &str) -> FileTree {
        build_tree(entries, filter_path, &self.options.build_options())
    }

    pub fn format(&self, tree: &FileTree) -> String {
        if tree.is_empty() {
            return EMPTY_DIRECTORY.to_string();
        }

        let mut output = format_tree(tree, self);
        if self.options.show_stats {
            let stats = collect_stats(tree, &self.options);
            output.push_str("\n\n");
            output.push_str(&stats.summary());
        }
        output
    }

    fn directory_suffix(&self, children: &[TreeNode]) -> Option<String> {
        let totals = subtree_totals(children, self.options.max_depth);
        if totals.files == 0 {
            return None;
        }
        Some(format!(
            " ({} {}, {})",
            totals.files,
            pluralize(totals.files, "file", "files"),
            format_size(totals.size)
        ))
    }
}

impl NodeLabel for EnhancedFormatter {
    fn label(&self, node: &TreeNode) -> String {
        match node {
            TreeNode::File { name, size, .. } => {
                if self.options.show_size {
                    format!("{} ({})", name, format_size(size.unwrap_or(0)))
                } else {
                    name.clone()
                }
            }
            TreeNode::Dir { name, children, .. } => {
                let mut label = format!("{}/", name);
                if self.options.show_size {
                    if let Some(suffix) = self.directory_suffix(children) {
                        label.push_str(&suffix);
                    }
                }
                label
            }
        }
    }

    fn descend(&self, node: &TreeNode) -> bool {
        self.options
            .max_depth
            .is_none_or(|max| node.depth() < max)
    }
}

/// Render the entries beneath `filter_path` with annotations and a summary.
pub fn render_enhanced(entries: &[Entry], filter_path: &str, options: &RenderOptions) -> String {
    let formatter = EnhancedFormatter::new(options.clone());
    let tree = formatter.build(entries, filter_path);
    formatter.format(&tree)
}
