// Every entry of one contest, including non-qualifiers

use super::{FetchError, ResultsPage};
use crate::application::cancel::CancelToken;
use crate::domain::{CountryDirectory, EntryResult, Year};
use crate::port::ContestApi;
use tracing::{info, warn};

pub async fn fetch_year_entries(
    api: &dyn ContestApi,
    year: Year,
    countries: &CountryDirectory,
    cancel: &CancelToken,
) -> Result<ResultsPage, FetchError> {
    let contest = cancel
        .run(api.contest_by_year(year))
        .await?
        .map_err(|source| {
            warn!(year = %year, error = %source, "Failed to load contest");
            FetchError::YearEntries { year, source }
        })?;

    let Some(contestants) = contest.contestants.as_ref() else {
        return Err(FetchError::NoData { year });
    };

    let mut entries: Vec<EntryResult> = contestants
        .iter()
        .map(|contestant| EntryResult::derive(year, &contest, contestant, countries))
        .collect();
    EntryResult::sort_for_year(&mut entries);

    info!(
        year = %year,
        entries = entries.len(),
        finalists = entries.iter().filter(|e| e.did_qualify).count(),
        "Year entries loaded"
    );

    Ok(ResultsPage {
        entries,
        current_contest: Some(contest),
    })
}
