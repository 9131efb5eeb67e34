//! Watcher core: the batch pipeline behind the `watcher` binary.
//!
//! One pass of work per invocation: list recently modified models, enrich
//! them with page-derived lineage signals, filter, format a summary, and
//! deliver it to the configured group chat. No state survives between runs;
//! recency is entirely the caller-supplied lookback window.

pub mod candidate;
pub mod config;
pub mod filter;
pub mod format;
pub mod run;
pub mod window;

pub use candidate::Candidate;
pub use config::Config;
pub use filter::{FilterCriteria, LEADING_ORGANIZATIONS};
pub use window::Window;
