//! Mock platform service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use depgate::error::{Error, Result};
use depgate::platform::PlatformService;
use depgate::types::{IssueState, PullRequestState};
use std::collections::HashMap;
use std::sync::Mutex;

/// Key for a PR or issue: (owner, repo, number)
pub type ItemKey = (String, String, u64);

fn key(owner: &str, repo: &str, number: u64) -> ItemKey {
    (owner.to_string(), repo.to_string(), number)
}

/// Simple mock platform service for testing
///
/// Features:
/// - Configurable pull request and issue responses
/// - Call tracking for verification
/// - Error injection for failure path testing
///
/// Anything without a configured response fails like a 404.
#[derive(Default)]
pub struct MockPlatformService {
    pull_requests: Mutex<HashMap<ItemKey, PullRequestState>>,
    issues: Mutex<HashMap<ItemKey, IssueState>>,
    // Call tracking
    pr_calls: Mutex<Vec<ItemKey>>,
    issue_calls: Mutex<Vec<ItemKey>>,
    // Error injection
    error_on_pr: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    // === Response setup ===

    /// Set the response for `get_pull_request`
    pub fn set_pull_request(&self, owner: &str, repo: &str, pr: PullRequestState) {
        self.pull_requests
            .lock()
            .unwrap()
            .insert(key(owner, repo, pr.number), pr);
    }

    /// Set the response for `get_issue`
    pub fn set_issue(&self, owner: &str, repo: &str, issue: IssueState) {
        self.issues
            .lock()
            .unwrap()
            .insert(key(owner, repo, issue.number), issue);
    }

    /// Make every `get_pull_request` call fail
    pub fn fail_pull_requests(&self, msg: &str) {
        *self.error_on_pr.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification ===

    /// All `get_pull_request` calls
    pub fn get_pr_calls(&self) -> Vec<ItemKey> {
        self.pr_calls.lock().unwrap().clone()
    }

    /// All `get_issue` calls
    pub fn get_issue_calls(&self) -> Vec<ItemKey> {
        self.issue_calls.lock().unwrap().clone()
    }

    /// Total number of API calls
    pub fn call_count(&self) -> usize {
        self.pr_calls.lock().unwrap().len() + self.issue_calls.lock().unwrap().len()
    }

    /// Assert that `get_pull_request` was called for an item
    pub fn assert_pr_called(&self, owner: &str, repo: &str, number: u64) {
        let calls = self.get_pr_calls();
        assert!(
            calls.contains(&key(owner, repo, number)),
            "Expected get_pull_request({owner}, {repo}, {number}) but got: {calls:?}"
        );
    }

    /// Assert that `get_issue` was never called
    pub fn assert_no_issue_calls(&self) {
        let calls = self.get_issue_calls();
        assert!(
            calls.is_empty(),
            "Expected no get_issue calls but got: {calls:?}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<PullRequestState> {
        self.pr_calls.lock().unwrap().push(key(owner, repo, number));

        // Check for injected error
        if let Some(msg) = self.error_on_pr.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        let responses = self.pull_requests.lock().unwrap();
        responses
            .get(&key(owner, repo, number))
            .cloned()
            .ok_or_else(|| Error::GitHubApi(format!("Not Found: pull {owner}/{repo}#{number}")))
    }

    async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<IssueState> {
        self.issue_calls
            .lock()
            .unwrap()
            .push(key(owner, repo, number));

        let responses = self.issues.lock().unwrap();
        responses
            .get(&key(owner, repo, number))
            .cloned()
            .ok_or_else(|| Error::GitHubApi(format!("Not Found: issue {owner}/{repo}#{number}")))
    }
}
