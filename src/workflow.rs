//! GitHub Actions workflow commands
//!
//! When running inside a workflow, failures are also emitted as `::error::`
//! commands so they show up as annotations on the run.

/// Whether the process runs inside GitHub Actions
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Escape a message for use as workflow command data
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format an `::error::` workflow command
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}
