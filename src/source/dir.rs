//! Plain directory listing

use std::fs::{self, Metadata};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;

use crate::entry::{Entry, EntryKind};
use crate::error::{Result, SourceError};
use crate::path::normalize_path;

use super::{ContentSource, TreeSource};

/// Lists a directory on disk as if it were a repository root.
pub struct DirSource {
    root: PathBuf,
    show_all: bool,
}

impl DirSource {
    /// Walk `root`, skipping hidden and `.gitignore`d paths.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            show_all: false,
        }
    }

    /// Include hidden and ignored paths (`.git` is still skipped).
    pub fn show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    fn walker(&self) -> ignore::Walk {
        let respect_ignores = !self.show_all;
        WalkBuilder::new(&self.root)
            .hidden(respect_ignores)
            .ignore(respect_ignores)
            .git_ignore(respect_ignores)
            .git_global(respect_ignores)
            .git_exclude(respect_ignores)
            .filter_entry(|entry| entry.file_name() != ".git")
            .build()
    }

    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let segments: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        if segments.is_empty() {
            None
        } else {
            Some(segments.join("/"))
        }
    }
}

/// A file entry, or `None` when the file vanished or cannot be read.
fn file_entry(path: String, metadata: std::result::Result<Metadata, ignore::Error>) -> Option<Entry> {
    match metadata {
        Ok(metadata) => Some(Entry::file(path, metadata.len())),
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "skipping unreadable file");
            None
        }
    }
}

impl TreeSource for DirSource {
    fn entries(&self) -> Result<Vec<Entry>> {
        if !self.root.is_dir() {
            return Err(SourceError::NotFound(self.root.display().to_string()));
        }

        let mut entries = Vec::new();
        for result in self.walker() {
            let item = match result {
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable path");
                    continue;
                }
            };
            // The root itself has no relative path
            let Some(path) = self.relative_path(item.path()) else {
                continue;
            };
            let Some(file_type) = item.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                entries.push(Entry {
                    path,
                    kind: EntryKind::Dir,
                    size: None,
                    sha: String::new(),
                });
            } else if file_type.is_file() {
                entries.extend(file_entry(path, item.metadata()));
            }
        }

        tracing::debug!(root = %self.root.display(), count = entries.len(), "listed directory");
        Ok(entries)
    }
}

impl ContentSource for DirSource {
    fn read_file(&self, path: &str) -> Result<String> {
        let relative = normalize_path(path);
        if relative.is_empty() || relative.split('/').any(|s| s == "..") {
            return Err(SourceError::NotFound(path.to_string()));
        }

        let full_path = self.root.join(&relative);
        if full_path.is_dir() {
            return Err(SourceError::NotAFile(relative));
        }
        match fs::read(&full_path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SourceError::NotFound(relative)),
            Err(e) => Err(e.into()),
        }
    }
}
