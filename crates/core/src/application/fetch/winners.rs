// Winners of every contest (no filter selected)

use super::{fetch_contests, FetchError, ResultsPage};
use crate::application::cancel::CancelToken;
use crate::domain::{ContestSummary, CountryDirectory, EntryResult};
use crate::port::ContestApi;
use tracing::{debug, info, warn};

pub async fn fetch_winners(
    api: &dyn ContestApi,
    contests: &[ContestSummary],
    countries: &CountryDirectory,
    batch_size: usize,
    cancel: &CancelToken,
) -> Result<ResultsPage, FetchError> {
    let years = contests.iter().map(|c| c.year).collect();
    let batch = fetch_contests(api, years, batch_size, cancel).await?;

    // Failed contests are skipped, even when none loaded
    if batch.all_failed() {
        warn!(failures = batch.failures.len(), "No contest could be loaded");
    }

    let mut winners: Vec<EntryResult> = batch
        .contests
        .iter()
        .filter_map(|(year, contest)| {
            let winner = EntryResult::winner_of(*year, contest, countries);
            if winner.is_none() {
                debug!(year = %year, "No winner recorded");
            }
            winner
        })
        .collect();
    EntryResult::sort_newest_first(&mut winners);

    info!(winners = winners.len(), "Winners loaded");

    Ok(ResultsPage {
        entries: winners,
        current_contest: None,
    })
}
