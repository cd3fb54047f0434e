//! Git repository integration

use std::path::Path;

use git2::{ErrorCode, ObjectType, Oid, Repository, Tree, TreeWalkMode, TreeWalkResult};

use crate::entry::{Entry, EntryKind};
use crate::error::{Result, SourceError};
use crate::path::normalize_path;
use crate::repo::RepoCoordinate;

use super::{ContentSource, TreeSource};

/// File mode git records for submodule links.
const SUBMODULE_MODE: u32 = 0o160000;

/// Lists a revision of a local git repository.
///
/// Without an explicit revision, `HEAD` is used; a repository with no
/// commits yet is listed from its index.
pub struct GitSource {
    repo: Repository,
    revision: Option<String>,
}

impl GitSource {
    /// Open the repository containing `path`.
    pub fn open(path: &Path, revision: Option<&str>) -> Result<Self> {
        let repo = Repository::discover(path)?;
        tracing::debug!(
            workdir = ?repo.workdir(),
            revision = revision.unwrap_or("HEAD"),
            "opened git repository"
        );
        Ok(Self {
            repo,
            revision: revision.map(str::to_string),
        })
    }

    /// Owner and name from the `origin` remote, when it points at a host.
    pub fn coordinate(&self) -> Option<RepoCoordinate> {
        let remote = self.repo.find_remote("origin").ok()?;
        RepoCoordinate::parse(remote.url()?).ok()
    }

    fn tree(&self) -> Result<Option<Tree<'_>>> {
        if let Some(rev) = &self.revision {
            return Ok(Some(self.repo.revparse_single(rev)?.peel_to_tree()?));
        }
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_tree()?)),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                tracing::debug!("HEAD is unborn, listing the index");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn tree_entries(&self, tree: &Tree<'_>) -> Result<Vec<Entry>> {
        let odb = self.repo.odb()?;
        let mut entries = Vec::new();
        let mut failure = None;

        let walked = tree.walk(TreeWalkMode::PreOrder, |root, item| {
            let Some(name) = item.name() else {
                return TreeWalkResult::Skip;
            };
            let kind = match item.kind() {
                Some(ObjectType::Tree) => EntryKind::Dir,
                Some(ObjectType::Blob) => EntryKind::File,
                Some(ObjectType::Commit) => EntryKind::Submodule,
                _ => return TreeWalkResult::Skip,
            };
            let size = if kind == EntryKind::File {
                match odb.read_header(item.id()) {
                    Ok((size, _)) => Some(size as u64),
                    Err(e) => {
                        failure = Some(e);
                        return TreeWalkResult::Abort;
                    }
                }
            } else {
                None
            };
            entries.push(Entry {
                path: format!("{}{}", root, name),
                kind,
                size,
                sha: item.id().to_string(),
            });
            TreeWalkResult::Ok
        });

        if let Some(e) = failure {
            return Err(e.into());
        }
        walked?;
        Ok(entries)
    }

    fn index_entries(&self) -> Result<Vec<Entry>> {
        let index = self.repo.index()?;
        Ok(index
            .iter()
            .map(|item| {
                let kind = if item.mode == SUBMODULE_MODE {
                    EntryKind::Submodule
                } else {
                    EntryKind::File
                };
                Entry {
                    path: String::from_utf8_lossy(&item.path).into_owned(),
                    kind,
                    size: (kind == EntryKind::File).then_some(u64::from(item.file_size)),
                    sha: item.id.to_string(),
                }
            })
            .collect())
    }

    fn blob_id(&self, path: &str) -> Result<Oid> {
        let Some(tree) = self.tree()? else {
            let index = self.repo.index()?;
            return index
                .get_path(Path::new(path), 0)
                .map(|item| item.id)
                .ok_or_else(|| SourceError::NotFound(path.to_string()));
        };

        let item = match tree.get_path(Path::new(path)) {
            Ok(item) => item,
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(SourceError::NotFound(path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        if item.kind() != Some(ObjectType::Blob) {
            return Err(SourceError::NotAFile(path.to_string()));
        }
        Ok(item.id())
    }
}

impl TreeSource for GitSource {
    fn entries(&self) -> Result<Vec<Entry>> {
        let entries = match self.tree()? {
            Some(tree) => self.tree_entries(&tree)?,
            None => self.index_entries()?,
        };
        tracing::debug!(count = entries.len(), "listed git entries");
        Ok(entries)
    }
}

impl ContentSource for GitSource {
    fn read_file(&self, path: &str) -> Result<String> {
        let path = normalize_path(path);
        if path.is_empty() {
            return Err(SourceError::NotAFile(path));
        }
        let blob = self.repo.find_blob(self.blob_id(&path)?)?;
        Ok(String::from_utf8_lossy(blob.content()).into_owned())
    }
}
