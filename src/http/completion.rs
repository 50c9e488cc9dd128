use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tokio::time::Instant;
use url::Url;

use crate::error::HttpError;
use crate::metrics::Outcome;

/// One unit of load-test work: a single completion request to issue.
///
/// Items are materialized once at run start and consumed exactly once by
/// exactly one worker.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub url: Url,
    pub model: String,
    pub prompt: String,
    pub max_tokens: u64,
    pub timeout: Duration,
}

/// JSON body of a completion request.
#[derive(Debug, Serialize)]
struct CompletionRequest<'req> {
    model: &'req str,
    prompt: &'req str,
    max_tokens: u64,
}

/// Resolves the completions endpoint from a base URL, trimming any trailing
/// slash before the fixed path is appended.
///
/// # Errors
///
/// Returns an error when the resulting URL is not syntactically valid.
pub fn completions_url(base: &str) -> Result<Url, HttpError> {
    let full = format!("{}/v1/completions", base.trim_end_matches('/'));
    Url::parse(&full).map_err(|source| HttpError::InvalidUrl {
        url: base.to_owned(),
        source,
    })
}

/// Executes one completion call and normalizes the result into an [`Outcome`].
///
/// Every transport error, timeout, non-2xx status, and unparseable body
/// becomes a failed outcome; this function never raises past its boundary and
/// never retries. Elapsed time spans dispatch to full response receipt,
/// connection setup included.
pub async fn execute_completion(client: &Client, item: &WorkItem) -> Outcome {
    let body = CompletionRequest {
        model: &item.model,
        prompt: &item.prompt,
        max_tokens: item.max_tokens,
    };

    let started = Instant::now();
    let response = match client
        .post(item.url.clone())
        .json(&body)
        .timeout(item.timeout)
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => return Outcome::failure(describe_request_error(&err, item.timeout)),
    };

    let status = response.status();
    if !status.is_success() {
        return Outcome::failure(format!("server returned HTTP {}", status));
    }

    let text = match response.text().await {
        Ok(text) => text,
        Err(err) => return Outcome::failure(describe_request_error(&err, item.timeout)),
    };
    let elapsed = started.elapsed();

    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(value) => Outcome::success(elapsed, count_output_tokens(&value)),
        Err(err) => Outcome::failure(format!("invalid JSON in response body: {}", err)),
    }
}

/// Approximate output size: whitespace-delimited words in the first choice's
/// text. Not a tokenizer count; a 2xx body without the expected shape counts
/// as zero.
pub(crate) fn count_output_tokens(value: &serde_json::Value) -> u64 {
    let text = value
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("text"))
        .and_then(|text| text.as_str())
        .unwrap_or("");
    u64::try_from(text.split_whitespace().count()).unwrap_or(u64::MAX)
}

/// Timeouts get a description distinct from other transport failures.
fn describe_request_error(err: &reqwest::Error, timeout: Duration) -> String {
    if err.is_timeout() {
        format!("request timed out after {}s", timeout.as_secs())
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        format!("request failed: {}", err)
    }
}
