use reqwest::Client;

use crate::error::HttpError;

/// Default User-Agent stamped on every benchmark request.
const DEFAULT_USER_AGENT: &str = concat!("inferbench/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client for a run.
///
/// Timeouts are per-request (each work item carries its own), so the client
/// itself has none.
///
/// # Errors
///
/// Returns an error when the underlying TLS or connection-pool setup fails.
pub fn build_client() -> Result<Client, HttpError> {
    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .build()
        .map_err(|source| HttpError::BuildClientFailed { source })
}
