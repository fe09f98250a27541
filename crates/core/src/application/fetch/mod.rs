//! Fetch strategies
//!
//! One strategy per filter combination, see [`FetchStrategy`]:
//! - winners of every contest (no filter)
//! - every entry of one country (country only)
//! - every entry of one contest (year only)
//! - one country's entry in one contest (both)
//!
//! Multi-year strategies fetch contests newest first, `batch_size` requests
//! at a time, and skip contests whose request fails.
//!
//! [`FetchStrategy`]: crate::domain::FetchStrategy

mod batch;
mod country_entries;
mod country_in_year;
mod error;
mod initial_data;
mod videos;
mod winners;
mod year_entries;

pub use batch::{fetch_contests, run_batched, ContestBatch};
pub use country_entries::fetch_country_entries;
pub use country_in_year::fetch_country_in_year;
pub use error::FetchError;
pub use initial_data::{fetch_initial_data, InitialData};
pub use videos::resolve_videos;
pub use winners::fetch_winners;
pub use year_entries::fetch_year_entries;

use crate::application::constants::{DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE};
use crate::domain::{Contest, EntryResult};
use crate::error::{AppError, Result};

/// Tunables shared by all strategies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Concurrent requests per batch
    pub batch_size: usize,
    /// Look up each entry's video after fetching
    pub resolve_videos: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            resolve_videos: false,
        }
    }
}

impl FetchOptions {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(AppError::Validation(format!(
                "batch size {} out of range (1-{})",
                self.batch_size, MAX_BATCH_SIZE
            )));
        }
        Ok(())
    }
}

/// Outcome of a successful strategy run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsPage {
    pub entries: Vec<EntryResult>,
    /// The contest fetched by single-year strategies
    pub current_contest: Option<Contest>,
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::contest::fixtures::{contestant, performance, round};
    use crate::domain::Contest;
    use crate::port::contest_api::mocks::InMemoryContestApi;

    /// Three contests:
    /// - 2021: IT wins, SE 14th, AU out in the semi
    /// - 2022: UA wins, SE 4th
    /// - 2023: SE wins, FI 2nd, AU out in the semi
    pub fn api() -> InMemoryContestApi {
        InMemoryContestApi::new()
            .with_country("SE", "Sweden")
            .with_country("IT", "Italy")
            .with_country("UA", "Ukraine")
            .with_country("FI", "Finland")
            .with_country("AU", "Australia")
            .with_contest(Contest {
                year: 2021,
                contestants: Some(vec![
                    contestant(1, "IT"),
                    contestant(2, "SE"),
                    contestant(3, "AU"),
                ]),
                rounds: Some(vec![
                    round("semifinal1", vec![performance(3, 14), performance(2, 7)]),
                    round("final", vec![performance(1, 1), performance(2, 14)]),
                ]),
            })
            .with_contest(Contest {
                year: 2022,
                contestants: Some(vec![contestant(1, "SE"), contestant(2, "UA")]),
                rounds: Some(vec![round(
                    "final",
                    vec![performance(2, 1), performance(1, 4)],
                )]),
            })
            .with_contest(Contest {
                year: 2023,
                contestants: Some(vec![
                    contestant(1, "AU"),
                    contestant(2, "FI"),
                    contestant(3, "SE"),
                ]),
                rounds: Some(vec![
                    round("semifinal2", vec![performance(1, 12)]),
                    round("final", vec![performance(3, 1), performance(2, 2)]),
                ]),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_size_validation() {
        assert!(FetchOptions::default().validate().is_ok());
        let zero = FetchOptions {
            batch_size: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());
        let huge = FetchOptions {
            batch_size: MAX_BATCH_SIZE + 1,
            ..Default::default()
        };
        assert!(huge.validate().is_err());
    }
}
