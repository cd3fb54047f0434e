//! repotree - render flat repository listings as directory trees

pub mod entry;
pub mod error;
pub mod output;
pub mod path;
pub mod repo;
pub mod source;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use entry::{Entry, EntryKind, TreeListing};
pub use error::{Result, SourceError};
pub use output::{
    EMPTY_DIRECTORY, EnhancedFormatter, JsonReport, PlainFormatter, print_json, print_rendered,
    render_enhanced, render_plain,
};
pub use path::normalize_path;
pub use repo::RepoCoordinate;
pub use source::{ContentSource, DirSource, GitSource, ListingSource, TreeSource};
pub use stats::{SubtreeTotals, TreeStats, collect_stats, subtree_totals};
pub use tree::{BuildOptions, FileTree, RenderOptions, SortOrder, TreeNode, build_tree, format_size};
