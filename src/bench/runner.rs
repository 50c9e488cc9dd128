use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::{Mutex, mpsc};
use tokio::time::Instant;
use tracing::{info, warn};
use url::Url;

use crate::args::BenchArgs;
use crate::error::AppResult;
use crate::http::{WorkItem, completions_url, execute_completion};
use crate::metrics::{Outcome, RunReport, build_report};

/// Collected outcomes are announced at every multiple of this count.
const PROGRESS_EVERY: usize = 10;

/// Everything one run needs: the resolved target plus load shape.
#[derive(Debug, Clone)]
pub struct BenchPlan {
    pub url: Url,
    pub model: String,
    pub prompt: String,
    pub max_tokens: u64,
    pub timeout: Duration,
    pub total_requests: u64,
    pub concurrency: usize,
}

impl BenchPlan {
    /// Resolves CLI arguments into a run plan.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is not syntactically valid.
    pub fn from_args(args: &BenchArgs) -> AppResult<Self> {
        Ok(Self {
            url: completions_url(&args.url)?,
            model: args.model.clone(),
            prompt: args.prompt.clone(),
            max_tokens: args.max_tokens.get(),
            timeout: args.timeout,
            total_requests: args.requests.get(),
            concurrency: args.concurrent.get(),
        })
    }

    fn work_item(&self) -> WorkItem {
        WorkItem {
            url: self.url.clone(),
            model: self.model.clone(),
            prompt: self.prompt.clone(),
            max_tokens: self.max_tokens,
            timeout: self.timeout,
        }
    }
}

/// Drives the whole run: materializes the work queue, keeps exactly
/// `concurrency` workers pulling from it, collects outcomes as they complete
/// (completion order is not dispatch order), and reduces them into the final
/// report.
///
/// Individual failures never abort the run; callers decide what a fully
/// failed run means for the process exit status.
pub async fn run(client: &Client, plan: &BenchPlan) -> RunReport {
    let total = plan.total_requests;
    let capacity = usize::try_from(total).unwrap_or(0);

    let queue: VecDeque<WorkItem> = (0..total).map(|_| plan.work_item()).collect();
    let queue = Arc::new(Mutex::new(queue));
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<Outcome>(capacity.max(1));

    info!(
        "Running {} requests with {} concurrent...",
        total, plan.concurrency
    );

    let started = Instant::now();
    let mut workers = Vec::with_capacity(plan.concurrency);
    for _ in 0..plan.concurrency {
        let queue = Arc::clone(&queue);
        let outcome_tx = outcome_tx.clone();
        let client = client.clone();

        workers.push(tokio::spawn(async move {
            loop {
                let next = { queue.lock().await.pop_front() };
                let Some(item) = next else {
                    break;
                };
                let outcome = execute_completion(&client, &item).await;
                if outcome_tx.send(outcome).await.is_err() {
                    break;
                }
            }
        }));
    }
    drop(outcome_tx);

    let mut outcomes: Vec<Outcome> = Vec::with_capacity(capacity);
    let mut wall_clock = Duration::ZERO;
    while let Some(outcome) = outcome_rx.recv().await {
        wall_clock = started.elapsed();
        if let Outcome::Failure { error } = &outcome {
            warn!("Request failed: {}", error);
        }
        outcomes.push(outcome);
        if outcomes.len().checked_rem(PROGRESS_EVERY) == Some(0) {
            info!("Completed {}/{} requests", outcomes.len(), total);
        }
    }

    for worker in workers {
        if worker.await.is_err() {
            warn!("Benchmark worker exited abnormally");
        }
    }

    build_report(&outcomes, wall_clock, total)
}
