//! Two-step lookup: pull request first, then issue

use crate::platform::PlatformService;
use crate::types::{DependencyReference, IssueState, PullRequestState};
use tracing::{error, info, warn};

/// Outcome of looking up one dependency reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Found via the pull request endpoint
    PullRequest(PullRequestState),
    /// Not a pull request, found via the issue endpoint
    Issue(IssueState),
    /// Neither endpoint knows this number
    NotFound,
}

/// Look up a reference as a pull request, falling back to an issue
///
/// Platform errors are logged and never propagated: a failed pull request
/// lookup falls through to the issue lookup, and a failed issue lookup
/// yields [`Lookup::NotFound`]. Transient failures are treated the same
/// as missing items; there are no retries.
pub async fn lookup(platform: &dyn PlatformService, reference: &DependencyReference) -> Lookup {
    let DependencyReference {
        owner,
        repo,
        number,
        ..
    } = reference;

    info!("  Fetching pull request {reference}");
    match platform.get_pull_request(owner, repo, *number).await {
        Ok(pr) => return Lookup::PullRequest(pr),
        Err(e) => error!("  Pull request lookup for {reference} failed: {e}"),
    }

    info!("  Fetching issue {reference}");
    match platform.get_issue(owner, repo, *number).await {
        Ok(issue) => Lookup::Issue(issue),
        Err(e) => {
            error!("  Issue lookup for {reference} failed: {e}");
            warn!("    Could not locate {reference}. Will need to verify manually.");
            Lookup::NotFound
        }
    }
}
