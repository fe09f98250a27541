// Batched concurrent requests with a fixed window

use crate::application::cancel::{CancelToken, Cancelled};
use crate::domain::{Contest, Year};
use crate::error::AppError;
use crate::port::ContestApi;
use futures::future::join_all;
use std::future::Future;
use tracing::{debug, warn};

/// Run `f` over `items`, `batch_size` at a time.
///
/// Each batch runs concurrently and must finish before the next starts.
/// Output order matches input order. Cancellation abandons the batch in
/// flight and skips the rest.
pub async fn run_batched<I, T, F, Fut>(
    items: Vec<I>,
    batch_size: usize,
    cancel: &CancelToken,
    f: F,
) -> Result<Vec<T>, Cancelled>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = T>,
{
    let batch_size = batch_size.max(1);
    let mut output = Vec::with_capacity(items.len());
    let mut items = items.into_iter();

    loop {
        let batch: Vec<I> = items.by_ref().take(batch_size).collect();
        if batch.is_empty() {
            break;
        }
        let results = cancel.run(join_all(batch.into_iter().map(&f))).await?;
        output.extend(results);
    }

    Ok(output)
}

/// Contests fetched for a set of years, failures kept apart
#[derive(Debug, Default)]
pub struct ContestBatch {
    pub contests: Vec<(Year, Contest)>,
    pub failures: Vec<(Year, AppError)>,
}

impl ContestBatch {
    /// True when at least one request was made and none succeeded
    pub fn all_failed(&self) -> bool {
        self.contests.is_empty() && !self.failures.is_empty()
    }
}

/// Fetch the given years newest first, `batch_size` at a time
pub async fn fetch_contests(
    api: &dyn ContestApi,
    mut years: Vec<Year>,
    batch_size: usize,
    cancel: &CancelToken,
) -> Result<ContestBatch, Cancelled> {
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();

    debug!(
        contests = years.len(),
        batch_size = batch_size,
        "Fetching contests in batches"
    );

    let outcomes = run_batched(years, batch_size, cancel, |year| async move {
        (year, api.contest_by_year(year).await)
    })
    .await?;

    let mut batch = ContestBatch::default();
    for (year, outcome) in outcomes {
        match outcome {
            Ok(contest) => batch.contests.push((year, contest)),
            Err(e) => {
                if e.is_transient() {
                    warn!(year = %year, error = %e, "Contest request failed, skipping");
                } else {
                    debug!(year = %year, error = %e, "Contest unavailable, skipping");
                }
                batch.failures.push((year, e));
            }
        }
    }

    Ok(batch)
}
