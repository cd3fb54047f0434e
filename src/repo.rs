//! Repository identifier parsing

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SourceError};

// owner/repo, https://host/owner/repo(.git)(/...), git@host:owner/repo(.git)
static SHORT_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$").expect("valid regex"));
static HTTP_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^/]+/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?(?:/.*)?$")
        .expect("valid regex")
});
static SSH_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:ssh://)?git@[^:/]+[:/]([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?/?$")
        .expect("valid regex")
});

/// Owner and name of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinate {
    pub owner: String,
    pub repo: String,
}

impl RepoCoordinate {
    /// Parse `owner/repo`, an HTTP(S) clone or browse URL, or an SSH remote.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let short = input.strip_suffix(".git").unwrap_or(input);

        let caps = SHORT_FORM
            .captures(short)
            .or_else(|| HTTP_FORM.captures(input))
            .or_else(|| SSH_FORM.captures(input))
            .ok_or_else(|| SourceError::InvalidRepository(input.to_string()))?;

        let owner = caps[1].to_string();
        let repo = caps[2].to_string();
        if owner == "." || owner == ".." || repo == "." || repo == ".." {
            return Err(SourceError::InvalidRepository(input.to_string()));
        }
        Ok(Self { owner, repo })
    }
}

impl fmt::Display for RepoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
