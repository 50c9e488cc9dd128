use std::time::Duration;

use super::types::{LatencySummary, Outcome, OutputTokenSummary, RunReport};

/// Nearest-rank p95 needs at least this many successful samples; below the
/// threshold the p95 falls back to the maximum observed latency.
const P95_MIN_SAMPLES: usize = 20;
/// Percentile rank used for tail-latency selection.
const P95_RANK: usize = 95;
/// Divisor turning a rank into a sorted-sample index.
const PERCENT_DIVISOR: usize = 100;

const ALL_FAILED_MARKER: &str = "All requests failed";

/// Reduces the collected outcomes of a run into its aggregate report.
///
/// The reduction is order-agnostic: latencies are sorted internally, so any
/// permutation of the same outcome set yields an identical report.
#[must_use]
pub fn build_report(outcomes: &[Outcome], wall_clock: Duration, total_requests: u64) -> RunReport {
    let mut latencies: Vec<f64> = Vec::new();
    let mut token_counts: Vec<u64> = Vec::new();
    let mut failed_requests: u64 = 0;

    for outcome in outcomes {
        match outcome {
            Outcome::Success {
                elapsed,
                output_tokens,
            } => {
                latencies.push(elapsed.as_secs_f64());
                token_counts.push(*output_tokens);
            }
            Outcome::Failure { .. } => {
                failed_requests = failed_requests.saturating_add(1);
            }
        }
    }

    let successful_requests = u64::try_from(latencies.len()).unwrap_or(u64::MAX);
    let total_time_seconds = wall_clock.as_secs_f64();

    if latencies.is_empty() {
        return RunReport {
            total_requests,
            successful_requests: 0,
            failed_requests,
            total_time_seconds,
            requests_per_second: None,
            latency: None,
            output_tokens: None,
            error: Some(ALL_FAILED_MARKER.to_owned()),
        };
    }

    latencies.sort_by(f64::total_cmp);

    let requests_per_second = if total_time_seconds > 0.0 {
        successful_requests as f64 / total_time_seconds
    } else {
        0.0
    };

    RunReport {
        total_requests,
        successful_requests,
        failed_requests,
        total_time_seconds,
        requests_per_second: Some(requests_per_second),
        latency: Some(latency_summary(&latencies)),
        output_tokens: Some(token_summary(&token_counts)),
        error: None,
    }
}

/// Summarizes a non-empty, ascending-sorted latency list.
fn latency_summary(sorted: &[f64]) -> LatencySummary {
    LatencySummary {
        min: sorted.first().copied().unwrap_or(0.0),
        max: sorted.last().copied().unwrap_or(0.0),
        mean: mean(sorted),
        median: median(sorted),
        p95: nearest_rank_p95(sorted),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median with the midpoint of the two central samples for even counts.
fn median(sorted: &[f64]) -> f64 {
    let count = sorted.len();
    let mid = count.checked_div(2).unwrap_or(0);
    let upper = sorted.get(mid).copied().unwrap_or(0.0);
    if count.checked_rem(2) == Some(0) {
        let lower = sorted.get(mid.saturating_sub(1)).copied().unwrap_or(0.0);
        (lower + upper) / 2.0
    } else {
        upper
    }
}

/// Nearest-rank selection at index floor(0.95 x count) over the sorted
/// sample; tiny samples report the maximum instead of a meaningless tail
/// estimate.
fn nearest_rank_p95(sorted: &[f64]) -> f64 {
    let max = sorted.last().copied().unwrap_or(0.0);
    let count = sorted.len();
    if count < P95_MIN_SAMPLES {
        return max;
    }
    let index = count
        .saturating_mul(P95_RANK)
        .checked_div(PERCENT_DIVISOR)
        .unwrap_or(0);
    sorted.get(index).copied().unwrap_or(max)
}

fn token_summary(counts: &[u64]) -> OutputTokenSummary {
    let total = counts
        .iter()
        .fold(0u64, |acc, count| acc.saturating_add(*count));
    let mean = if counts.is_empty() {
        0.0
    } else {
        total as f64 / counts.len() as f64
    };
    OutputTokenSummary { total, mean }
}
