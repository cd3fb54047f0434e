//! Sources of flat repository listings and file content
//!
//! - `GitSource` - a local git repository at a revision (or its index)
//! - `DirSource` - a plain directory, honouring `.gitignore`
//! - `ListingSource` - a recursive tree listing saved as JSON

mod dir;
mod git;
mod listing;

pub use dir::DirSource;
pub use git::GitSource;
pub use listing::ListingSource;

use crate::entry::Entry;
use crate::error::Result;

/// Something that can list every path beneath a repository root.
pub trait TreeSource {
    fn entries(&self) -> Result<Vec<Entry>>;
}

/// Something that can return the text of one file.
pub trait ContentSource {
    /// Read a file by its repository-relative path.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    fn read_file(&self, path: &str) -> Result<String>;
}
