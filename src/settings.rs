//! Check configuration
//!
//! Everything the extractor and resolver need is gathered into a
//! [`CheckSettings`] value up front, so the core never reads the
//! environment while it runs.

use crate::error::{Error, Result};
use crate::types::RepoId;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Host that is always trusted for full URLs and markdown links
pub const DEFAULT_DOMAIN: &str = "github.com";

/// Hosts whose URLs are accepted as dependency references
///
/// Always starts with [`DEFAULT_DOMAIN`]; extra hosts keep the order
/// they were given in, lower-cased and without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedDomains(Vec<String>);

impl Default for TrustedDomains {
    fn default() -> Self {
        Self(vec![DEFAULT_DOMAIN.to_string()])
    }
}

impl TrustedDomains {
    /// Build from a whitespace-delimited list of extra hosts
    ///
    /// Entries may be bare hosts (`ghe.example.com`) or URLs
    /// (`https://ghe.example.com/`), in which case only the host is kept.
    pub fn from_input(input: &str) -> Result<Self> {
        let mut domains = Self::default();
        for entry in input.split_whitespace() {
            domains.push(&normalize_domain(entry)?);
        }
        Ok(domains)
    }

    /// Add a host unless it is already trusted
    pub fn push(&mut self, domain: &str) {
        let domain = domain.to_ascii_lowercase();
        if !self.0.contains(&domain) {
            self.0.push(domain);
        }
    }

    /// Trusted hosts in order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

fn normalize_domain(entry: &str) -> Result<String> {
    if !entry.contains("://") {
        return Ok(entry.trim_end_matches('/').to_string());
    }

    let url = Url::parse(entry)
        .map_err(|e| Error::Config(format!("invalid custom domain '{entry}': {e}")))?;
    url.host_str()
        .map(ToString::to_string)
        .ok_or_else(|| Error::Config(format!("custom domain '{entry}' has no host")))
}

/// Configuration for one dependency check
#[derive(Debug, Clone)]
pub struct CheckSettings {
    /// Repository containing the pull request; bare `#N` references point here
    pub repo: RepoId,
    /// Pull request whose body is scanned
    pub pr_number: u64,
    /// Hosts accepted in full URLs and markdown links
    pub trusted_domains: TrustedDomains,
}

/// Parse an optional PR number input; an empty value means "not given"
pub fn parse_pr_number(input: Option<&str>) -> Result<Option<u64>> {
    let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match raw.trim_start_matches('#').parse::<u64>() {
        Ok(0) | Err(_) => Err(Error::Config(format!(
            "pull request number must be a positive integer, got '{raw}'"
        ))),
        Ok(n) => Ok(Some(n)),
    }
}

#[derive(Deserialize)]
struct NumberedPayload {
    number: u64,
}

#[derive(Deserialize)]
struct EventPayload {
    pull_request: Option<NumberedPayload>,
    issue: Option<NumberedPayload>,
    number: Option<u64>,
}

/// Read the pull request number from a workflow event payload file
///
/// Looks at `pull_request.number`, then `issue.number`, then the top-level
/// `number`. Returns `None` when the payload carries none of them.
pub fn pr_number_from_event(path: &Path) -> Result<Option<u64>> {
    let content = fs::read_to_string(path)?;
    let payload: EventPayload = serde_json::from_str(&content)?;

    let number = payload
        .pull_request
        .map(|p| p.number)
        .or_else(|| payload.issue.map(|i| i.number))
        .or(payload.number);
    debug!(path = %path.display(), ?number, "read event payload");
    Ok(number)
}

/// Pick the PR number: explicit input first, then the event payload
pub fn resolve_pr_number(input: Option<&str>, event_path: Option<&Path>) -> Result<u64> {
    if let Some(number) = parse_pr_number(input)? {
        return Ok(number);
    }

    if let Some(path) = event_path
        && let Some(number) = pr_number_from_event(path)?
    {
        return Ok(number);
    }

    Err(Error::Config(
        "no pull request number given and none found in the event payload".to_string(),
    ))
}
