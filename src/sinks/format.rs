use crate::metrics::RunReport;

/// Width of the section rules around the report block.
const RULE_WIDTH: usize = 60;

pub(crate) fn section_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub(crate) fn summary_lines(report: &RunReport) -> Vec<String> {
    match (report.requests_per_second, report.latency.as_ref()) {
        (Some(rps), Some(latency)) => vec![
            format!("Throughput: {:.2} req/s", rps),
            format!("Mean latency: {:.3}s", latency.mean),
            format!("P95 latency: {:.3}s", latency.p95),
        ],
        (None, _) | (_, None) => vec!["FAILED: No successful requests".to_owned()],
    }
}
