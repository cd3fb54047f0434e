//! Tree statistics collection and display
//!
//! Totals are computed by one depth-aware walk, `subtree_totals`. The global
//! summary runs it from the root and directory annotations run it from each
//! directory, so the two numbers always agree.

use serde::Serialize;

use crate::tree::{FileTree, RenderOptions, TreeNode, format_size, pluralize};

/// Aggregate counts beneath one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubtreeTotals {
    pub files: usize,
    pub dirs: usize,
    /// Sum of file sizes, missing sizes counted as 0
    pub size: u64,
}

impl SubtreeTotals {
    fn record_file(&mut self, size: Option<u64>) {
        self.files += 1;
        self.size += size.unwrap_or(0);
    }

    fn record_directory(&mut self) {
        self.dirs += 1;
    }
}

/// Count every node in `nodes` (recursively) whose depth is within `max_depth`.
///
/// Nodes past the bound are skipped together with their subtrees.
pub fn subtree_totals(nodes: &[TreeNode], max_depth: Option<usize>) -> SubtreeTotals {
    let mut totals = SubtreeTotals::default();
    visit(nodes, max_depth, &mut totals);
    totals
}

fn visit(nodes: &[TreeNode], max_depth: Option<usize>, totals: &mut SubtreeTotals) {
    for node in nodes {
        if max_depth.is_some_and(|max| node.depth() > max) {
            continue;
        }
        match node {
            TreeNode::File { size, .. } => totals.record_file(*size),
            TreeNode::Dir { children, .. } => {
                totals.record_directory();
                visit(children, max_depth, totals);
            }
        }
    }
}

/// Statistics for one rendered tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub total_files: usize,
    pub total_dirs: usize,
    pub total_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered_extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_limited: Option<usize>,
}

impl TreeStats {
    /// The one-line summary appended below an annotated tree.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "📊 Summary: {} {}, {} {}",
            self.total_dirs,
            pluralize(self.total_dirs, "directory", "directories"),
            self.total_files,
            pluralize(self.total_files, "file", "files"),
        );
        if self.total_size > 0 {
            line.push_str(&format!(", {} total", format_size(self.total_size)));
        }
        if let Some(extensions) = &self.filtered_extensions {
            line.push_str(&format!(", (filtered: {})", extensions.join(", ")));
        }
        if let Some(depth) = self.depth_limited {
            line.push_str(&format!(", (depth limited to {})", depth));
        }
        line
    }
}

/// Collect statistics over a built tree, echoing the filters that shaped it.
pub fn collect_stats(tree: &FileTree, options: &RenderOptions) -> TreeStats {
    let totals = subtree_totals(&tree.children, options.max_depth);

    TreeStats {
        total_files: totals.files,
        total_dirs: totals.dirs,
        total_size: totals.size,
        filtered_extensions: if options.file_ext_filter.is_empty() {
            None
        } else {
            Some(options.file_ext_filter.clone())
        },
        depth_limited: options.max_depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, depth: usize, size: Option<u64>) -> TreeNode {
        TreeNode::File {
            name: name.to_string(),
            depth,
            size,
        }
    }

    fn dir(name: &str, depth: usize, children: Vec<TreeNode>) -> TreeNode {
        TreeNode::Dir {
            name: name.to_string(),
            depth,
            children,
        }
    }

    fn sample_tree() -> FileTree {
        FileTree {
            children: vec![
                dir(
                    "src",
                    1,
                    vec![
                        file("main.rs", 2, Some(100)),
                        dir("util", 2, vec![file("fmt.rs", 3, Some(24))]),
                    ],
                ),
                file("README.md", 1, None),
            ],
        }
    }

    #[test]
    fn test_subtree_totals_unbounded() {
        let tree = sample_tree();
        let totals = subtree_totals(&tree.children, None);
        assert_eq!(
            totals,
            SubtreeTotals {
                files: 3,
                dirs: 2,
                size: 124,
            }
        );
    }

    #[test]
    fn test_subtree_totals_depth_cutoff() {
        let tree = sample_tree();
        let totals = subtree_totals(&tree.children, Some(2));
        assert_eq!(totals.files, 2);
        assert_eq!(totals.dirs, 2);
        assert_eq!(totals.size, 100);

        let totals = subtree_totals(&tree.children, Some(1));
        assert_eq!(totals.files, 1);
        assert_eq!(totals.dirs, 1);
        assert_eq!(totals.size, 0);
    }

    #[test]
    fn test_subtree_totals_from_directory() {
        let tree = sample_tree();
        let src = &tree.children[0];
        let totals = subtree_totals(src.children(), None);
        assert_eq!(totals.files, 2);
        assert_eq!(totals.size, 124);
    }

    #[test]
    fn test_collect_stats_echoes_filters() {
        let options = RenderOptions::default()
            .with_max_depth(Some(3))
            .with_extensions([".rs"]);
        let stats = collect_stats(&sample_tree(), &options);
        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.total_dirs, 2);
        assert_eq!(stats.filtered_extensions, Some(vec![".rs".to_string()]));
        assert_eq!(stats.depth_limited, Some(3));
    }

    #[test]
    fn test_collect_stats_empty_tree() {
        let stats = collect_stats(&FileTree::default(), &RenderOptions::default());
        assert_eq!(stats, TreeStats::default());
    }

    #[test]
    fn test_summary_line() {
        let stats = TreeStats {
            total_files: 1,
            total_dirs: 1,
            total_size: 0,
            filtered_extensions: None,
            depth_limited: None,
        };
        assert_eq!(stats.summary(), "📊 Summary: 1 directory, 1 file");

        let stats = TreeStats {
            total_files: 4,
            total_dirs: 0,
            total_size: 2048,
            filtered_extensions: Some(vec![".ts".to_string(), ".js".to_string()]),
            depth_limited: Some(2),
        };
        assert_eq!(
            stats.summary(),
            "📊 Summary: 0 directories, 4 files, 2.0KB total, (filtered: .ts, .js), (depth limited to 2)"
        );
    }
}
