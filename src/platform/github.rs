//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{IssueState, PullRequestState};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct PullResponse {
    number: u64,
    title: Option<String>,
    body: Option<String>,
    merged: Option<bool>,
    merged_at: Option<DateTime<Utc>>,
    closed_at: Option<DateTime<Utc>>,
}

impl From<PullResponse> for PullRequestState {
    fn from(pr: PullResponse) -> Self {
        Self {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            body: pr.body,
            merged: pr.merged.unwrap_or(pr.merged_at.is_some()),
            closed_at: pr.closed_at,
        }
    }
}

#[derive(Deserialize)]
struct IssueResponse {
    number: u64,
    title: String,
    closed_at: Option<DateTime<Utc>>,
}

impl From<IssueResponse> for IssueState {
    fn from(issue: IssueResponse) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
            closed_at: issue.closed_at,
        }
    }
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `api_url` overrides the API base (GitHub Enterprise, test servers).
    /// Without a token the client is unauthenticated and any auth failure
    /// surfaces from the API itself.
    pub fn new(token: Option<&str>, api_url: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder();

        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }

        if let Some(url) = api_url {
            let base_url = url.trim_end_matches('/');
            builder = builder
                .base_uri(base_url)
                .map_err(|e| Error::GitHubApi(format!("invalid API URL '{url}': {e}")))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestState> {
        debug!(owner, repo, number, "getting pull request");
        let route = format!("/repos/{owner}/{repo}/pulls/{number}");
        let pr: PullResponse = self.client.get(route, None::<&()>).await?;

        let state = PullRequestState::from(pr);
        debug!(number, merged = state.merged, closed_at = ?state.closed_at, "got pull request");
        Ok(state)
    }

    async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<IssueState> {
        debug!(owner, repo, number, "getting issue");
        let route = format!("/repos/{owner}/{repo}/issues/{number}");
        let issue: IssueResponse = self.client.get(route, None::<&()>).await?;

        let state = IssueState::from(issue);
        debug!(number, closed_at = ?state.closed_at, "got issue");
        Ok(state)
    }
}
