//! Command line interface

mod check;
mod context;
pub mod style;

pub use check::{report_crash, run_check};

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Block pull requests until the pull requests and issues they depend on are resolved
#[derive(Parser, Debug)]
#[command(name = "depgate", version, about, long_about = None)]
pub struct Cli {
    /// Repository containing the pull request (owner/repo)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: String,

    /// Pull request to check (defaults to the one in the workflow event)
    #[arg(long, env = "INPUT_PR-NUMBER")]
    pub pr_number: Option<String>,

    /// Workflow event payload used to find the default pull request
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Extra trusted hosts for full URLs and markdown links, separated by whitespace
    #[arg(long, env = "INPUT_CUSTOM-DOMAINS", default_value = "")]
    pub custom_domains: String,

    /// GitHub API base URL (GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// GitHub token (defaults to GITHUB_TOKEN, GH_TOKEN, then `gh auth token`)
    #[arg(long)]
    pub token: Option<String>,

    /// Check this text instead of the pull request body
    #[arg(long)]
    pub body: Option<String>,

    /// Only list the dependency references found, without looking them up
    #[arg(long)]
    pub dry_run: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Install the log subscriber
///
/// Output is plain line-oriented text on stderr; `RUST_LOG` overrides the
/// level chosen by `--verbose`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,depgate={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
