//! Saved tree listings (JSON)

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::entry::{Entry, TreeListing};
use crate::error::Result;

use super::TreeSource;

/// Either a full listing document or a bare array of entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListingDocument {
    Listing(TreeListing),
    Entries(Vec<Entry>),
}

/// Entries read from a JSON tree listing.
#[derive(Debug, Clone)]
pub struct ListingSource {
    listing: TreeListing,
}

impl ListingSource {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let document: ListingDocument = serde_json::from_reader(reader)?;
        let listing = match document {
            ListingDocument::Listing(listing) => listing,
            ListingDocument::Entries(tree) => TreeListing {
                tree,
                ..Default::default()
            },
        };
        if listing.truncated {
            tracing::warn!(
                count = listing.tree.len(),
                "listing was truncated upstream, tree is incomplete"
            );
        }
        Ok(Self { listing })
    }

    /// Read a listing from a file, or from stdin when `path` is `-`.
    pub fn from_path(path: &Path) -> Result<Self> {
        if path == Path::new("-") {
            return Self::from_reader(io::stdin().lock());
        }
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn is_truncated(&self) -> bool {
        self.listing.truncated
    }
}

impl TreeSource for ListingSource {
    fn entries(&self) -> Result<Vec<Entry>> {
        Ok(self.listing.tree.clone())
    }
}
