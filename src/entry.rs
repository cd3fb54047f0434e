//! Flat entry records as listed by a repository host

use serde::{Deserialize, Serialize};

/// Kind of a listed path.
///
/// Serialized with the git object type names used by tree listings
/// (`blob`, `tree`, `commit`), and also accepts the plain `file` and
/// `dir`/`directory` spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "blob", alias = "file")]
    File,
    #[serde(rename = "tree", alias = "dir", alias = "directory")]
    Dir,
    /// A submodule link; rendered like an (empty) directory.
    #[serde(rename = "commit")]
    Submodule,
}

impl EntryKind {
    pub fn is_dir_like(self) -> bool {
        matches!(self, EntryKind::Dir | EntryKind::Submodule)
    }
}

/// One flat record of a path beneath a repository root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default)]
    pub sha: String,
}

impl Entry {
    pub fn file(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            size: Some(size),
            sha: String::new(),
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Dir,
            size: None,
            sha: String::new(),
        }
    }

    pub fn with_sha(mut self, sha: impl Into<String>) -> Self {
        self.sha = sha.into();
        self
    }
}

/// A complete recursive tree listing, as returned in one upstream response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeListing {
    #[serde(default)]
    pub sha: String,
    pub tree: Vec<Entry>,
    /// Set by the host when the listing was cut short.
    #[serde(default)]
    pub truncated: bool,
}
