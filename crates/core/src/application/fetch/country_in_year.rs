// One country's entry in one contest

use super::{FetchError, ResultsPage};
use crate::application::cancel::CancelToken;
use crate::domain::{CountryDirectory, EntryResult, Year};
use crate::port::ContestApi;
use tracing::{info, warn};

pub async fn fetch_country_in_year(
    api: &dyn ContestApi,
    year: Year,
    country: &str,
    countries: &CountryDirectory,
    cancel: &CancelToken,
) -> Result<ResultsPage, FetchError> {
    let country_name = countries.name_for(country).to_string();

    let contest = cancel
        .run(api.contest_by_year(year))
        .await?
        .map_err(|source| {
            warn!(year = %year, country = %country, error = %source, "Failed to load contest");
            FetchError::CountryInYear {
                country_name: country_name.clone(),
                year,
                source,
            }
        })?;

    if contest.contestants.is_none() {
        return Err(FetchError::NoData { year });
    }

    let Some(contestant) = contest.contestant_from(country) else {
        return Err(FetchError::DidNotParticipate {
            country_name,
            year,
            contest: Box::new(contest),
        });
    };

    let entry = EntryResult::derive(contest.year, &contest, contestant, countries);
    info!(
        year = %year,
        country = %country,
        place = ?entry.place,
        qualified = entry.did_qualify,
        "Entry loaded"
    );

    Ok(ResultsPage {
        entries: vec![entry],
        current_contest: Some(contest),
    })
}
