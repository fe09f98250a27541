// Contest API Port (Interface)

use crate::domain::{Contest, ContestSummary, ContestantDetails, ContestantId, Year};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Read-only access to the remote contest API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContestApi: Send + Sync {
    /// `GET /countries`: country code -> name
    async fn countries(&self) -> Result<HashMap<String, String>>;

    /// `GET /contests/years`
    async fn years(&self) -> Result<Vec<Year>>;

    /// `GET /contests`
    async fn contests(&self) -> Result<Vec<ContestSummary>>;

    /// `GET /contests/{year}`
    async fn contest_by_year(&self, year: Year) -> Result<Contest>;

    /// `GET /contests/{year}/contestants/{id}`
    async fn contestant_details(&self, year: Year, id: ContestantId) -> Result<ContestantDetails>;
}

// ============================================================================
// In-Memory Implementation for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::collections::{BTreeMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory contest API with optional latency and failures
    #[derive(Default)]
    pub struct InMemoryContestApi {
        countries: HashMap<String, String>,
        contests: BTreeMap<Year, Contest>,
        details: HashMap<(Year, ContestantId), ContestantDetails>,
        failing_years: HashSet<Year>,
        fail_directory: bool,
        delay: Option<Duration>,
        contest_calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        requested_years: Mutex<Vec<Year>>,
    }

    impl InMemoryContestApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_country(mut self, code: &str, name: &str) -> Self {
            self.countries.insert(code.to_string(), name.to_string());
            self
        }

        pub fn with_contest(mut self, contest: Contest) -> Self {
            self.contests.insert(contest.year, contest);
            self
        }

        pub fn with_details(mut self, year: Year, details: ContestantDetails) -> Self {
            self.details.insert((year, details.id), details);
            self
        }

        /// `contest_by_year` answers HTTP 500 for this year
        pub fn with_failing_year(mut self, year: Year) -> Self {
            self.failing_years.insert(year);
            self
        }

        /// `countries` and `contests` fail
        pub fn with_failing_directory(mut self) -> Self {
            self.fail_directory = true;
            self
        }

        /// Latency added to every contest request
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn contest_calls(&self) -> usize {
            self.contest_calls.load(Ordering::SeqCst)
        }

        /// Highest number of concurrent contest requests observed
        pub fn max_in_flight(&self) -> usize {
            self.max_in_flight.load(Ordering::SeqCst)
        }

        pub fn requested_years(&self) -> Vec<Year> {
            self.requested_years.lock().unwrap().clone()
        }

        async fn simulate_latency(&self) {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl ContestApi for InMemoryContestApi {
        async fn countries(&self) -> Result<HashMap<String, String>> {
            if self.fail_directory {
                return Err(AppError::Transport("connection refused".to_string()));
            }
            Ok(self.countries.clone())
        }

        async fn years(&self) -> Result<Vec<Year>> {
            Ok(self.contests.keys().copied().collect())
        }

        async fn contests(&self) -> Result<Vec<ContestSummary>> {
            if self.fail_directory {
                return Err(AppError::Transport("connection refused".to_string()));
            }
            Ok(self
                .contests
                .keys()
                .chain(self.failing_years.iter())
                .map(|year| ContestSummary { year: *year })
                .collect())
        }

        async fn contest_by_year(&self, year: Year) -> Result<Contest> {
            self.contest_calls.fetch_add(1, Ordering::SeqCst);
            self.requested_years.lock().unwrap().push(year);
            self.simulate_latency().await;

            if self.failing_years.contains(&year) {
                return Err(AppError::Http {
                    status: 500,
                    url: format!("/contests/{}", year),
                });
            }
            self.contests
                .get(&year)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("contest {}", year)))
        }

        async fn contestant_details(
            &self,
            year: Year,
            id: ContestantId,
        ) -> Result<ContestantDetails> {
            self.details
                .get(&(year, id))
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("contestant {} in {}", id, year)))
        }
    }
}
