//! Bounded-concurrency request dispatch.
//!
//! Every domain becomes one spawned task. Tasks wait on a shared semaphore
//! before sending, so at most `max_concurrency` requests are in flight; the
//! rest queue in submission order. Each task hands its `(url, outcome)` pair
//! back through its join handle and the results are gathered here in
//! completion order, so no task touches a shared map.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, warn};

use crate::app::ensure_scheme;
use crate::fetch::{Outcome, StatusProbe};
use crate::initialization::init_semaphore;

/// Results of a batch, keyed by normalized URL.
///
/// Two input lines that normalize to the same URL share one entry; the later
/// completion wins.
pub type CheckResults = BTreeMap<String, Outcome>;

/// Checks every domain once and returns the collected outcomes.
///
/// Domains are normalized with `ensure_scheme` before dispatch. `on_complete`
/// is called once per finished task, in completion order, before the result
/// is stored. The call returns only after every task has finished; a failing
/// request or even a panicking task never stops the batch.
///
/// # Arguments
///
/// * `probe` - Performs the actual request
/// * `domains` - Domains as read from the input, in submission order
/// * `max_concurrency` - Worker pool size (values below 1 are treated as 1)
/// * `on_complete` - Called with each `(url, outcome)` as it completes
pub async fn dispatch<P, F>(
    probe: Arc<P>,
    domains: Vec<String>,
    max_concurrency: usize,
    mut on_complete: F,
) -> CheckResults
where
    P: StatusProbe,
    F: FnMut(&str, &Outcome),
{
    let semaphore = init_semaphore(max_concurrency);
    let mut tasks = FuturesUnordered::new();

    for domain in domains {
        let url = ensure_scheme(&domain);

        let probe = Arc::clone(&probe);
        let semaphore = Arc::clone(&semaphore);
        let task_url = url.clone();
        let handle = tokio::spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    return Outcome::Error(
                        "worker pool closed before the request started".to_string(),
                    )
                }
            };
            probe.probe(&task_url).await
        });

        tasks.push(async move { (url, handle.await) });
    }

    let mut results = CheckResults::new();
    while let Some((url, joined)) = tasks.next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(join_error) => {
                warn!("Check task for {} panicked: {}", url, join_error);
                Outcome::Error(format!("check task failed: {}", join_error))
            }
        };

        on_complete(&url, &outcome);

        if results.insert(url, outcome).is_some() {
            debug!("Duplicate normalized URL in input, kept the latest result");
        }
    }

    results
}
