//! Dependency reference extraction
//!
//! Finds "depends on" / "blocked by" phrases in a pull request body and
//! turns each one into a [`DependencyReference`]. Five forms are recognized:
//!
//! - `depends on #42` (current repository)
//! - `depends on owner/repo#42`
//! - `depends on owner/repo/pull/42`
//! - `depends on https://github.com/owner/repo/issues/42`
//! - `depends on [label](https://github.com/owner/repo/issues/42)`
//!
//! Matching is case-insensitive. Output lists all bare-number matches first,
//! then the qualified forms in the order above. Nothing is deduplicated.

mod patterns;

use crate::error::Result;
use crate::settings::TrustedDomains;
use crate::types::{DependencyReference, ReferenceForm, RepoId};
use patterns::{Pattern, build_patterns};
use regex::Captures;
use tracing::{info, warn};

/// Compiled extractor bound to a repository and a set of trusted hosts
pub struct ReferenceExtractor {
    repo: RepoId,
    patterns: Vec<Pattern>,
}

impl ReferenceExtractor {
    /// Compile the reference patterns
    ///
    /// `repo` is the repository containing the scanned text; bare `#N`
    /// references resolve against it.
    pub fn new(repo: RepoId, domains: &TrustedDomains) -> Result<Self> {
        Ok(Self {
            repo,
            patterns: build_patterns(domains)?,
        })
    }

    /// Extract all dependency references from `body`, in report order
    pub fn extract(&self, body: &str) -> Vec<DependencyReference> {
        self.patterns
            .iter()
            .flat_map(|pattern| {
                pattern
                    .regex
                    .captures_iter(body)
                    .filter_map(move |caps| self.normalize(pattern.form, &caps))
            })
            .collect()
    }

    fn normalize(&self, form: ReferenceForm, caps: &Captures<'_>) -> Option<DependencyReference> {
        let text = caps.get(0).map_or("", |m| m.as_str());
        info!("  Found {form} dependency in '{text}'");

        let raw_number = caps.name("number").map_or("", |m| m.as_str());
        let number = match raw_number.parse::<u64>() {
            Ok(n) if n >= 1 => n,
            _ => {
                warn!("  Ignoring '{text}': '{raw_number}' is not a valid number");
                return None;
            }
        };

        let (owner, repo) = match (caps.name("owner"), caps.name("repo")) {
            (Some(owner), Some(repo)) => (owner.as_str().to_string(), repo.as_str().to_string()),
            _ => (self.repo.owner.clone(), self.repo.repo.clone()),
        };

        Some(DependencyReference {
            owner,
            repo,
            number,
            form,
        })
    }
}

/// One-shot extraction without keeping the compiled patterns around
pub fn extract_references(
    body: &str,
    repo: &RepoId,
    domains: &TrustedDomains,
) -> Result<Vec<DependencyReference>> {
    Ok(ReferenceExtractor::new(repo.clone(), domains)?.extract(body))
}
