//! Shared setup for the check command

use crate::cli::Cli;
use anyhow::{Context, Result};
use depgate::auth::get_github_auth;
use depgate::platform::{GitHubService, PlatformService};
use depgate::settings::{CheckSettings, TrustedDomains, resolve_pr_number};
use depgate::types::RepoId;
use tracing::{debug, warn};

/// Settings plus the platform service they are checked against
pub struct CheckContext {
    /// Explicit check configuration
    pub settings: CheckSettings,
    /// GitHub service
    pub platform: Box<dyn PlatformService>,
}

impl CheckContext {
    /// Build settings from the command line and create the GitHub client
    pub async fn new(args: &Cli) -> Result<Self> {
        let repo: RepoId = args.repo.parse()?;
        let pr_number = resolve_pr_number(args.pr_number.as_deref(), args.event_path.as_deref())
            .context("could not determine which pull request to check")?;
        let trusted_domains = TrustedDomains::from_input(&args.custom_domains)?;
        debug!(domains = ?trusted_domains.as_slice(), "trusted domains");

        let auth = get_github_auth(args.token.as_deref()).await;
        match &auth {
            Some(auth) => debug!(source = ?auth.source, "found GitHub token"),
            None => warn!("No GitHub token found; continuing unauthenticated"),
        }

        let platform = GitHubService::new(
            auth.as_ref().map(|a| a.token.as_str()),
            args.api_url.as_deref(),
        )
        .context("failed to create GitHub client")?;

        Ok(Self {
            settings: CheckSettings {
                repo,
                pr_number,
                trusted_domains,
            },
            platform: Box::new(platform),
        })
    }
}
