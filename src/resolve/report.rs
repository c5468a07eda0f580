//! Report and final verdict

use crate::types::{DependencyReference, ResolvedItem};

/// First line of the failure message
pub const BLOCKED_HEADER: &str =
    "The following issues need to be resolved before this PR can be merged:";

/// Message when every dependency is closed (or there were none)
const RESOLVED_MESSAGE: &str = "All dependencies have been resolved!";

/// Message when the pull request has no body to scan
const EMPTY_BODY_MESSAGE: &str = "Pull request body is empty; there are no dependencies to check.";

/// Aggregated resolution results, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Dependencies that are still open (duplicates kept)
    pub blockers: Vec<ResolvedItem>,
    /// References that were neither a PR nor an issue
    pub unresolved: Vec<DependencyReference>,
    /// Number of references looked up
    pub checked: usize,
}

impl Report {
    /// Whether nothing blocks the merge
    #[must_use]
    pub fn is_mergeable(&self) -> bool {
        self.blockers.is_empty()
    }
}

/// Overall outcome of a dependency check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Body was empty; nothing was extracted or looked up
    EmptyBody,
    /// No open dependencies
    Resolved(Report),
    /// At least one dependency is still open
    Blocked(Report),
}

impl Verdict {
    /// Pick `Resolved` or `Blocked` from a report
    #[must_use]
    pub fn from_report(report: Report) -> Self {
        if report.is_mergeable() {
            Self::Resolved(report)
        } else {
            Self::Blocked(report)
        }
    }

    /// Whether the pull request may be merged
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Blocked(_))
    }

    /// Report behind the verdict, if any lookups ran
    pub const fn report(&self) -> Option<&Report> {
        match self {
            Self::EmptyBody => None,
            Self::Resolved(report) | Self::Blocked(report) => Some(report),
        }
    }

    /// Human-readable message
    ///
    /// For `Blocked` this is the header followed by one `#<number> - <title>`
    /// line per open dependency.
    pub fn message(&self) -> String {
        match self {
            Self::EmptyBody => EMPTY_BODY_MESSAGE.to_string(),
            Self::Resolved(_) => RESOLVED_MESSAGE.to_string(),
            Self::Blocked(report) => {
                let lines: Vec<String> = report.blockers.iter().map(ToString::to_string).collect();
                format!("{BLOCKED_HEADER}\n\n{}", lines.join("\n"))
            }
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
