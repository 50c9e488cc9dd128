mod summary;
mod types;


pub use summary::build_report;
pub use types::{LatencySummary, Outcome, OutputTokenSummary, RunReport};
