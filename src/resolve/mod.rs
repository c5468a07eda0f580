//! Dependency resolution
//!
//! Three parts:
//! 1. Lookup - ask the platform about one reference, PR first then issue (effectful)
//! 2. Classify - decide whether a lookup result still blocks the merge (pure)
//! 3. Aggregate - walk all references in order and build the report

mod lookup;
mod report;
mod resolver;

pub use lookup::{Lookup, lookup};
pub use report::{BLOCKED_HEADER, Report, Verdict};
pub use resolver::{classify, resolve_dependencies};
