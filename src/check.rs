//! Dependency check orchestration
//!
//! Fetches the pull request body, extracts references, resolves them and
//! produces a [`Verdict`]. Per-reference lookup failures are handled inside
//! the resolver; anything that escapes to this level is an unexpected error
//! and is logged before being returned.

use crate::error::Result;
use crate::extract::ReferenceExtractor;
use crate::platform::PlatformService;
use crate::resolve::{Verdict, resolve_dependencies};
use crate::settings::CheckSettings;
use tracing::{error, info};

/// Evaluate a body that has already been fetched
///
/// An absent or empty body short-circuits to [`Verdict::EmptyBody`] before
/// any extraction or lookup happens.
pub async fn evaluate_body(
    body: Option<&str>,
    extractor: &ReferenceExtractor,
    platform: &dyn PlatformService,
) -> Verdict {
    let Some(body) = body.filter(|b| !b.is_empty()) else {
        info!("Pull request body is empty");
        return Verdict::EmptyBody;
    };

    info!("Reading PR body...");
    let references = extractor.extract(body);
    info!("Found {} dependency reference(s)", references.len());

    info!("Analyzing dependencies...");
    let report = resolve_dependencies(&references, platform).await;
    Verdict::from_report(report)
}

/// Run the full check for the pull request named in `settings`
///
/// When `body` is given it is used as-is and the pull request itself is not
/// fetched.
pub async fn check_pull_request(
    settings: &CheckSettings,
    platform: &dyn PlatformService,
    body: Option<&str>,
) -> Result<Verdict> {
    run(settings, platform, body)
        .await
        .inspect_err(|e| error!("Dependency check failed: {e}"))
}

/// Fetch the body of the pull request named in `settings`
pub async fn fetch_body(
    settings: &CheckSettings,
    platform: &dyn PlatformService,
) -> Result<Option<String>> {
    let pr = platform
        .get_pull_request(&settings.repo.owner, &settings.repo.repo, settings.pr_number)
        .await?;
    info!("Checking {}#{}: {}", settings.repo, pr.number, pr.title);
    Ok(pr.body)
}

async fn run(
    settings: &CheckSettings,
    platform: &dyn PlatformService,
    body: Option<&str>,
) -> Result<Verdict> {
    info!("Initializing...");
    let extractor = ReferenceExtractor::new(settings.repo.clone(), &settings.trusted_domains)?;

    let verdict = if let Some(body) = body {
        evaluate_body(Some(body), &extractor, platform).await
    } else {
        let fetched = fetch_body(settings, platform).await?;
        evaluate_body(fetched.as_deref(), &extractor, platform).await
    };

    if let Some(report) = verdict.report()
        && !report.unresolved.is_empty()
    {
        info!(
            "{} of {} dependencies could not be located and need manual verification",
            report.unresolved.len(),
            report.checked
        );
    }

    Ok(verdict)
}
