// Every entry of one country across all contests

use super::{fetch_contests, FetchError, ResultsPage};
use crate::application::cancel::CancelToken;
use crate::domain::{ContestSummary, CountryDirectory, EntryResult};
use crate::port::ContestApi;
use tracing::{info, warn};

pub async fn fetch_country_entries(
    api: &dyn ContestApi,
    country: &str,
    contests: &[ContestSummary],
    countries: &CountryDirectory,
    batch_size: usize,
    cancel: &CancelToken,
) -> Result<ResultsPage, FetchError> {
    let years = contests.iter().map(|c| c.year).collect();
    let batch = fetch_contests(api, years, batch_size, cancel).await?;

    if batch.all_failed() {
        warn!(
            country = %country,
            failures = batch.failures.len(),
            "No contest could be loaded"
        );
    }

    let mut entries: Vec<EntryResult> = batch
        .contests
        .iter()
        .filter_map(|(year, contest)| {
            contest
                .contestant_from(country)
                .map(|contestant| EntryResult::derive(*year, contest, contestant, countries))
        })
        .collect();
    EntryResult::sort_newest_first(&mut entries);

    info!(country = %country, entries = entries.len(), "Country entries loaded");

    Ok(ResultsPage {
        entries,
        current_contest: None,
    })
}
