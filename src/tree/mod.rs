//! Directory tree reconstruction
//!
//! This module turns a flat repository listing into an ordered tree:
//!
//! - `builder` - merges flat paths into nodes, applying depth and extension filters
//! - `node` - the `TreeNode`/`FileTree` types shared by both renderers
//! - `config` - build and render options

mod builder;
mod config;
mod node;
mod utils;

pub use builder::build_tree;
pub use config::{BuildOptions, RenderOptions, SortOrder};
pub use node::{FileTree, TreeNode};
pub use utils::{format_size, pluralize};
