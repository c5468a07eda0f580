//! Classification and aggregation of looked-up references

use crate::platform::PlatformService;
use crate::resolve::lookup::{Lookup, lookup};
use crate::resolve::report::Report;
use crate::types::{DependencyReference, ItemKind, ResolvedItem};
use tracing::info;

/// Turn a lookup result into a resolved item (PURE)
///
/// A pull request is open when it is not merged and has no close
/// timestamp; an issue is open when it has no close timestamp.
/// Returns `None` for [`Lookup::NotFound`].
pub fn classify(reference: &DependencyReference, found: Lookup) -> Option<ResolvedItem> {
    let (kind, number, title, is_open) = match found {
        Lookup::PullRequest(pr) => (
            ItemKind::PullRequest,
            pr.number,
            pr.title,
            !pr.merged && pr.closed_at.is_none(),
        ),
        Lookup::Issue(issue) => (
            ItemKind::Issue,
            issue.number,
            issue.title,
            issue.closed_at.is_none(),
        ),
        Lookup::NotFound => return None,
    };

    Some(ResolvedItem {
        owner: reference.owner.clone(),
        repo: reference.repo.clone(),
        number,
        kind,
        title,
        is_open,
    })
}

/// Resolve every reference in order and collect the ones still open
///
/// References are processed sequentially; each lookup completes before the
/// next starts. Unlocatable references are recorded as unresolved but never
/// block on their own.
pub async fn resolve_dependencies(
    references: &[DependencyReference],
    platform: &dyn PlatformService,
) -> Report {
    let mut report = Report::default();

    for reference in references {
        let found = lookup(platform, reference).await;
        report.checked += 1;

        let Some(item) = classify(reference, found) else {
            report.unresolved.push(reference.clone());
            continue;
        };

        if item.is_open {
            info!("    {} is still open.", kind_label(item.kind));
            report.blockers.push(item);
        } else {
            info!("    {} has been closed.", kind_label(item.kind));
        }
    }

    report
}

fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::PullRequest => "PR",
        ItemKind::Issue => "Issue",
    }
}
