//! Tree node types produced by the builder

use serde::Serialize;

/// One node of a reconstructed directory tree.
///
/// `depth` counts path segments from the filter root, so immediate
/// children of the root have depth 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        depth: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<u64>,
    },
    Dir {
        name: String,
        depth: usize,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn depth(&self) -> usize {
        match self {
            TreeNode::File { depth, .. } | TreeNode::Dir { depth, .. } => *depth,
        }
    }

    /// Children of a directory; files have none.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }
}

/// The synthetic root of a tree scoped to a filter path.
///
/// The root itself is not a node and has no name or depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileTree {
    pub children: Vec<TreeNode>,
}

impl FileTree {
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
