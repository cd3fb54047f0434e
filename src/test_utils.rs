//! Test utilities for creating temporary git repositories and listings.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use crate::entry::Entry;

/// A temporary git repository for testing.
///
/// Provides methods for creating files, git initialization, and staging files.
/// The repository is automatically cleaned up when dropped.
pub struct TestRepo {
    dir: TempDir,
    git_initialized: bool,
}

impl TestRepo {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            git_initialized: false,
        }
    }

    /// Create a new temporary directory with git initialized.
    pub fn with_git() -> Self {
        let mut repo = Self::new();
        repo.init_git();
        repo
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run a git command inside the repository.
    pub fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Initialize a git repository in the temporary directory.
    ///
    /// Also configures user.email and user.name for commits.
    pub fn init_git(&mut self) {
        self.git(&["init", "--quiet"]);
        self.git(&["config", "user.email", "test@test.com"]);
        self.git(&["config", "user.name", "Test"]);
        self.git(&["config", "commit.gpgsign", "false"]);
        self.git_initialized = true;
    }

    /// Add a file and stage it if git is initialized.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.add_untracked(path, content);
        if self.git_initialized {
            self.git(&["add", path]);
        }
        full_path
    }

    /// Add a file without staging it.
    ///
    /// Creates parent directories as needed.
    pub fn add_untracked(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a commit with the given message.
    pub fn commit(&self, message: &str) {
        assert!(self.git_initialized, "Git not initialized");
        self.git(&["commit", "--quiet", "-m", message, "--allow-empty"]);
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

/// A synthetic listing of `dirs` top-level directories, each holding
/// `files_per_dir` files spread over two nesting levels.
pub fn synthetic_entries(dirs: usize, files_per_dir: usize) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(dirs * (files_per_dir + 2));
    for d in 0..dirs {
        let dir = format!("pkg{:03}", d);
        entries.push(Entry::dir(dir.clone()));
        entries.push(Entry::dir(format!("{}/nested", dir)));
        for f in 0..files_per_dir {
            let ext = if f % 3 == 0 { "md" } else { "rs" };
            let path = if f % 2 == 0 {
                format!("{}/file{:04}.{}", dir, f, ext)
            } else {
                format!("{}/nested/file{:04}.{}", dir, f, ext)
            };
            entries.push(Entry::file(path, (f as u64 + 1) * 128));
        }
    }
    entries
}
