//! Core types for depgate

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A GitHub repository identity (`owner/repo`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoId {
    /// Create a repository identity from its parts
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self::new(owner, repo))
            }
            _ => Err(Error::Config(format!(
                "repository must look like 'owner/repo', got '{s}'"
            ))),
        }
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Which textual form a dependency reference was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceForm {
    /// `#42`, resolved against the current repository
    Number,
    /// `owner/repo#42`
    Shorthand,
    /// `owner/repo/issues/42` or `owner/repo/pull/42`
    PartialPath,
    /// `https://github.com/owner/repo/pull/42`
    FullUrl,
    /// `[label](https://github.com/owner/repo/issues/42)`
    Markdown,
}

impl std::fmt::Display for ReferenceForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Shorthand => write!(f, "shorthand"),
            Self::PartialPath => write!(f, "partial path"),
            Self::FullUrl => write!(f, "full URL"),
            Self::Markdown => write!(f, "markdown link"),
        }
    }
}

/// A dependency named in a pull request body
///
/// References are never deduplicated: the same dependency mentioned twice
/// yields two references and two lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyReference {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Pull request or issue number (always >= 1)
    pub number: u64,
    /// Form the reference was written in
    pub form: ReferenceForm,
}

impl std::fmt::Display for DependencyReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

/// Whether a resolved dependency turned out to be a PR or an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Found via the pull request endpoint
    PullRequest,
    /// Found via the issue endpoint
    Issue,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PullRequest => write!(f, "pull request"),
            Self::Issue => write!(f, "issue"),
        }
    }
}

/// State of a pull request as returned by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestState {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR body/description
    pub body: Option<String>,
    /// Whether the PR has been merged
    pub merged: bool,
    /// When the PR was closed (merged PRs are closed too)
    pub closed_at: Option<DateTime<Utc>>,
}

/// State of an issue as returned by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueState {
    /// Issue number
    pub number: u64,
    /// Issue title
    pub title: String,
    /// When the issue was closed
    pub closed_at: Option<DateTime<Utc>>,
}

/// A dependency reference after looking it up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedItem {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Number reported by the platform
    pub number: u64,
    /// PR or issue
    pub kind: ItemKind,
    /// Title reported by the platform
    pub title: String,
    /// Whether the dependency still blocks the merge
    pub is_open: bool,
}

impl std::fmt::Display for ResolvedItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} - {}", self.number, self.title)
    }
}
