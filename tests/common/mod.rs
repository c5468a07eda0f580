//! Shared test helpers

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::MockPlatformService;

use chrono::{DateTime, TimeZone, Utc};
use depgate::extract::ReferenceExtractor;
use depgate::settings::{CheckSettings, TrustedDomains};
use depgate::types::{IssueState, PullRequestState, RepoId};

/// The repository the scanned pull request lives in
pub fn acme_repo() -> RepoId {
    RepoId::new("acme", "widgets")
}

/// Extractor for `acme/widgets` trusting only github.com
pub fn default_extractor() -> ReferenceExtractor {
    ReferenceExtractor::new(acme_repo(), &TrustedDomains::default()).unwrap()
}

/// Settings checking `acme/widgets#pr_number`
pub fn acme_settings(pr_number: u64) -> CheckSettings {
    CheckSettings {
        repo: acme_repo(),
        pr_number,
        trusted_domains: TrustedDomains::default(),
    }
}

/// A fixed close timestamp
pub fn closed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// An open, unmerged pull request
pub fn open_pr(number: u64, title: &str) -> PullRequestState {
    PullRequestState {
        number,
        title: title.to_string(),
        body: None,
        merged: false,
        closed_at: None,
    }
}

/// A merged pull request
pub fn merged_pr(number: u64, title: &str) -> PullRequestState {
    PullRequestState {
        merged: true,
        closed_at: Some(closed_at()),
        ..open_pr(number, title)
    }
}

/// A pull request carrying a body, used as the PR under check
pub fn pr_with_body(number: u64, body: Option<&str>) -> PullRequestState {
    PullRequestState {
        body: body.map(ToString::to_string),
        ..open_pr(number, "PR under check")
    }
}

/// An issue, closed or not
pub fn issue(number: u64, title: &str, closed: bool) -> IssueState {
    IssueState {
        number,
        title: title.to_string(),
        closed_at: closed.then(closed_at),
    }
}
