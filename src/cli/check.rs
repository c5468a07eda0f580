//! Check command - gate the pull request on its dependencies

use crate::cli::Cli;
use crate::cli::context::CheckContext;
use crate::cli::style::{CHECK, CROSS, Stylize};
use anstream::println;
use anyhow::Result;
use depgate::check::{check_pull_request, fetch_body};
use depgate::extract::ReferenceExtractor;
use depgate::resolve::Verdict;
use depgate::workflow::{error_command, is_github_actions};
use std::process::ExitCode;
use tracing::error;

/// How the run ended, short of a crash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Safe to merge (or nothing to check)
    Passed,
    /// Open dependencies remain
    Blocked,
}

impl Outcome {
    /// Process exit code: 0 passed, 1 blocked
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Passed => ExitCode::SUCCESS,
            Self::Blocked => ExitCode::from(1),
        }
    }
}

/// Run the check command
pub async fn run_check(args: &Cli) -> Result<Outcome> {
    let ctx = CheckContext::new(args)
        .await
        .inspect_err(|e| error!("{e:#}"))?;

    if args.dry_run {
        return run_dry(args, &ctx).await.inspect_err(|e| error!("{e:#}"));
    }

    let verdict =
        check_pull_request(&ctx.settings, ctx.platform.as_ref(), args.body.as_deref()).await?;
    print_verdict(&verdict);

    if verdict.is_success() {
        Ok(Outcome::Passed)
    } else {
        if is_github_actions() {
            println!("{}", error_command(&verdict.message()));
        }
        Ok(Outcome::Blocked)
    }
}

/// Annotate an unexpected failure
///
/// The error has already been logged where it was raised.
pub fn report_crash(err: &anyhow::Error) {
    if is_github_actions() {
        println!("{}", error_command(&format!("{err:#}")));
    }
}

/// List references without looking them up
async fn run_dry(args: &Cli, ctx: &CheckContext) -> Result<Outcome> {
    let body = match &args.body {
        Some(body) => Some(body.clone()),
        None => fetch_body(&ctx.settings, ctx.platform.as_ref()).await?,
    };

    let extractor =
        ReferenceExtractor::new(ctx.settings.repo.clone(), &ctx.settings.trusted_domains)?;
    let references = extractor.extract(body.as_deref().unwrap_or_default());

    if references.is_empty() {
        println!("{}", "No dependency references found".muted());
    } else {
        println!("{}:", "Dependency references".emphasis());
        for reference in &references {
            println!("  {} {}", reference.accent(), format!("({})", reference.form).muted());
        }
    }
    println!("{}", "Dry run complete".muted());

    Ok(Outcome::Passed)
}

fn print_verdict(verdict: &Verdict) {
    println!();
    match verdict {
        Verdict::EmptyBody => println!("{}", verdict.message().muted()),
        Verdict::Resolved(_) => {
            println!("{}", format!("{CHECK} {}", verdict.message()).success());
        }
        Verdict::Blocked(_) => {
            println!("{}", format!("{CROSS} {}", verdict.message()).failure());
        }
    }
}
