//! depgate - gate pull requests on their declared dependencies
//!
//! Scans a pull request body for phrases such as "depends on #42" or
//! "blocked by org/repo#7", looks each reference up on GitHub (first as a
//! pull request, then as an issue) and reports the ones that are still open.

pub mod auth;
pub mod check;
pub mod error;
pub mod extract;
pub mod platform;
pub mod resolve;
pub mod settings;
pub mod types;
pub mod workflow;
