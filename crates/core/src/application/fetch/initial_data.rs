// Initial data: country directory and contest list, fetched together

use super::FetchError;
use crate::application::cancel::CancelToken;
use crate::domain::{ContestSummary, CountryDirectory, Year};
use crate::port::ContestApi;
use tracing::{error, info};

/// Data every strategy needs before it can run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialData {
    pub countries: CountryDirectory,
    pub contests: Vec<ContestSummary>,
}

impl InitialData {
    pub fn contest_years(&self) -> Vec<Year> {
        self.contests.iter().map(|c| c.year).collect()
    }
}

/// Fetch countries and contests concurrently
pub async fn fetch_initial_data(
    api: &dyn ContestApi,
    cancel: &CancelToken,
) -> Result<InitialData, FetchError> {
    let (countries, contests) = cancel
        .run(async { tokio::try_join!(api.countries(), api.contests()) })
        .await?
        .map_err(|e| {
            error!(error = %e, "Failed to load initial data");
            FetchError::InitialData(e)
        })?;

    info!(
        countries = countries.len(),
        contests = contests.len(),
        "Initial data loaded"
    );

    Ok(InitialData {
        countries: CountryDirectory::new(countries),
        contests,
    })
}
