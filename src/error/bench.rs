use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("All {failed_requests} requests failed.")]
    AllRequestsFailed { failed_requests: u64 },
}
