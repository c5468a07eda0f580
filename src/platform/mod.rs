//! Platform services
//!
//! The hosting API is consumed through the [`PlatformService`] trait so the
//! resolver can be driven by GitHub in production and by a mock in tests.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{IssueState, PullRequestState};
use async_trait::async_trait;

/// Read-only pull request and issue lookups
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Fetch a pull request by number
    ///
    /// Fails when no such pull request exists.
    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestState>;

    /// Fetch an issue by number
    ///
    /// Fails when no such issue exists.
    async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<IssueState>;
}
