// Fetch outcome errors
//
// Display text is the message shown to the user.

use crate::application::cancel::Cancelled;
use crate::domain::{Contest, Year};
use crate::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Fetch cancelled")]
    Cancelled,

    #[error("No data available for Eurovision {year}")]
    NoData { year: Year },

    #[error("{country_name} did not participate in Eurovision {year}")]
    DidNotParticipate {
        country_name: String,
        year: Year,
        /// The contest was loaded; only the country is missing from it
        contest: Box<Contest>,
    },

    #[error("Failed to load initial data. Please try again later.")]
    InitialData(#[source] AppError),

    #[error("Failed to load entries for Eurovision {year}. Please try again later.")]
    YearEntries {
        year: Year,
        #[source]
        source: AppError,
    },

    #[error("Failed to load entry for {country_name} in Eurovision {year}. Please try again later.")]
    CountryInYear {
        country_name: String,
        year: Year,
        #[source]
        source: AppError,
    },
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }

    /// Contest fetched before the failure, if any
    pub fn contest(&self) -> Option<&Contest> {
        match self {
            FetchError::DidNotParticipate { contest, .. } => Some(&**contest),
            _ => None,
        }
    }
}

impl From<Cancelled> for FetchError {
    fn from(_: Cancelled) -> Self {
        FetchError::Cancelled
    }
}
