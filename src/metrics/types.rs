use std::time::Duration;

use serde::Serialize;

/// Result of executing one work item, as seen by the load driver.
///
/// Latency and output size only exist for successful calls; failures carry a
/// human-readable description instead.
#[derive(Debug, Clone)]
pub enum Outcome {
    Success { elapsed: Duration, output_tokens: u64 },
    Failure { error: String },
}

impl Outcome {
    #[must_use]
    pub const fn success(elapsed: Duration, output_tokens: u64) -> Self {
        Outcome::Success {
            elapsed,
            output_tokens,
        }
    }

    #[must_use]
    pub const fn failure(error: String) -> Self {
        Outcome::Failure { error }
    }
}

/// Latency distribution over successful requests, in seconds.
#[derive(Debug, Clone, Serialize)]
pub struct LatencySummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub p95: f64,
}

/// Output-token totals over successful requests.
///
/// Counts are whitespace-delimited word counts, not tokenizer counts.
#[derive(Debug, Clone, Serialize)]
pub struct OutputTokenSummary {
    pub total: u64,
    pub mean: f64,
}

/// Aggregate statistics for a completed run.
///
/// Computed once after the last outcome is collected; the latency and
/// output-token summaries are omitted entirely when nothing succeeded and the
/// `error` marker is set instead.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub total_time_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_second: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency: Option<LatencySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<OutputTokenSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
