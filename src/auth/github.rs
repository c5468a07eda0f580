//! GitHub token discovery

use super::AuthSource;
use tokio::process::Command;
use tracing::debug;

/// Environment variables checked for a token, in order
const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// A discovered GitHub credential
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Bearer token
    pub token: String,
    /// Where the token came from
    pub source: AuthSource,
}

/// Find a GitHub token
///
/// Order: `explicit`, `GITHUB_TOKEN`, `GH_TOKEN`, then `gh auth token`.
/// Returns `None` when nothing is available; callers proceed
/// unauthenticated and let the API report any failure.
pub async fn get_github_auth(explicit: Option<&str>) -> Option<GitHubAuthConfig> {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("using explicit GitHub token");
        return Some(GitHubAuthConfig {
            token: token.to_string(),
            source: AuthSource::Explicit,
        });
    }

    if let Some(config) = token_from_env_with(|name| std::env::var(name).ok()) {
        return Some(config);
    }

    token_from_gh_cli().await
}

/// Token lookup over an arbitrary variable source
pub fn token_from_env_with(get: impl Fn(&str) -> Option<String>) -> Option<GitHubAuthConfig> {
    TOKEN_VARS.iter().find_map(|name| {
        let token = get(name)?.trim().to_string();
        if token.is_empty() {
            return None;
        }
        debug!(var = *name, "using GitHub token from environment");
        Some(GitHubAuthConfig {
            token,
            source: AuthSource::EnvVar,
        })
    })
}

async fn token_from_gh_cli() -> Option<GitHubAuthConfig> {
    let output = Command::new("gh").args(["auth", "token"]).output().await.ok()?;
    if !output.status.success() {
        debug!("gh auth token failed");
        return None;
    }

    let token = String::from_utf8(output.stdout).ok()?.trim().to_string();
    if token.is_empty() {
        return None;
    }

    debug!("using GitHub token from gh CLI");
    Some(GitHubAuthConfig {
        token,
        source: AuthSource::Cli,
    })
}
