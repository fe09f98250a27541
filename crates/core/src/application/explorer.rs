//! Explorer - filter-driven fetch orchestration
//!
//! Owns the observable result state. Every filter change cancels the fetch
//! still in flight, runs the strategy for the new filter and publishes the
//! outcome through a `watch` channel.

use crate::application::cancel::{cancel_channel, CancelSender, CancelToken};
use crate::application::fetch::{
    fetch_country_entries, fetch_country_in_year, fetch_initial_data, fetch_winners,
    fetch_year_entries, resolve_videos, FetchError, FetchOptions, InitialData, ResultsPage,
};
use crate::domain::{Contest, EntryResult, FetchStrategy, FilterState};
use crate::error::Result;
use crate::port::ContestApi;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{watch, OnceCell};
use tracing::{debug, info, warn};

/// Snapshot of what the user currently sees
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerState {
    pub filter: FilterState,
    pub loading: bool,
    pub error: Option<String>,
    pub results: Vec<EntryResult>,
    pub showing_winners: bool,
    pub current_contest: Option<Contest>,
    pub initial_data_loaded: bool,
}

pub struct Explorer {
    api: Arc<dyn ContestApi>,
    options: FetchOptions,
    initial: OnceCell<InitialData>,
    state: watch::Sender<ExplorerState>,
    /// Sender of the fetch currently in flight
    in_flight: Mutex<Option<CancelSender>>,
}

impl Explorer {
    pub fn new(api: Arc<dyn ContestApi>, options: FetchOptions) -> Result<Self> {
        options.validate()?;
        let (state, _) = watch::channel(ExplorerState::default());
        Ok(Self {
            api,
            options,
            initial: OnceCell::new(),
            state,
            in_flight: Mutex::new(None),
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<ExplorerState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ExplorerState {
        self.state.borrow().clone()
    }

    /// Load countries and contests once; later calls reuse the cached copy.
    /// A failed load is retried on the next call.
    pub async fn load_initial_data(&self) -> std::result::Result<&InitialData, FetchError> {
        let outcome = self.initial_data(&CancelToken::never()).await;
        if let Err(e) = &outcome {
            let message = e.to_string();
            self.state.send_modify(|s| s.error = Some(message));
        }
        outcome
    }

    async fn initial_data(
        &self,
        cancel: &CancelToken,
    ) -> std::result::Result<&InitialData, FetchError> {
        let api = self.api.as_ref();
        let data = self
            .initial
            .get_or_try_init(|| fetch_initial_data(api, cancel))
            .await?;
        self.state.send_if_modified(|s| {
            let changed = !s.initial_data_loaded;
            s.initial_data_loaded = true;
            changed
        });
        Ok(data)
    }

    /// Run the strategy for `filter`, superseding any fetch in flight.
    ///
    /// Returns `FetchError::Cancelled` when a newer filter (or `cancel`)
    /// superseded this one; in that case nothing is published.
    pub async fn apply_filter(
        &self,
        filter: FilterState,
    ) -> std::result::Result<ResultsPage, FetchError> {
        let strategy = filter.strategy();
        let token = self.begin(&filter, &strategy);

        info!(filter = %filter, "Applying filter");
        let outcome = self.run_strategy(&strategy, &token).await;
        self.finish(&token, &strategy, outcome)
    }

    /// Cancel the fetch in flight, if any
    pub fn cancel(&self) {
        let mut in_flight = self.lock_in_flight();
        if let Some(sender) = in_flight.take() {
            sender.cancel();
            self.state.send_modify(|s| s.loading = false);
            debug!("In-flight fetch cancelled");
        }
    }

    fn lock_in_flight(&self) -> MutexGuard<'_, Option<CancelSender>> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self, filter: &FilterState, strategy: &FetchStrategy) -> CancelToken {
        let (sender, token) = cancel_channel();
        let mut in_flight = self.lock_in_flight();

        if let Some(previous) = in_flight.replace(sender) {
            previous.cancel();
            debug!("Superseded previous fetch");
        }

        let showing_winners = matches!(strategy, FetchStrategy::Winners);
        self.state.send_modify(|s| {
            s.filter = filter.clone();
            s.loading = true;
            s.error = None;
            s.showing_winners = showing_winners;
        });

        token
    }

    async fn run_strategy(
        &self,
        strategy: &FetchStrategy,
        cancel: &CancelToken,
    ) -> std::result::Result<ResultsPage, FetchError> {
        let initial = self.initial_data(cancel).await?;
        let api = self.api.as_ref();
        let countries = &initial.countries;
        let batch_size = self.options.batch_size;

        let mut page = match strategy {
            FetchStrategy::Winners => {
                fetch_winners(api, &initial.contests, countries, batch_size, cancel).await?
            }
            FetchStrategy::CountryEntries(code) => {
                fetch_country_entries(
                    api,
                    code,
                    &initial.contests,
                    countries,
                    batch_size,
                    cancel,
                )
                .await?
            }
            FetchStrategy::YearEntries(year) => {
                fetch_year_entries(api, *year, countries, cancel).await?
            }
            FetchStrategy::CountryInYear(year, code) => {
                fetch_country_in_year(api, *year, code, countries, cancel).await?
            }
        };

        if self.options.resolve_videos {
            resolve_videos(api, &mut page.entries, batch_size, cancel).await?;
        }

        Ok(page)
    }

    fn finish(
        &self,
        token: &CancelToken,
        strategy: &FetchStrategy,
        outcome: std::result::Result<ResultsPage, FetchError>,
    ) -> std::result::Result<ResultsPage, FetchError> {
        // Held while publishing so a newer fetch cannot start in between
        let mut in_flight = self.lock_in_flight();

        if token.is_cancelled() || matches!(outcome, Err(FetchError::Cancelled)) {
            debug!("Discarding superseded fetch");
            return Err(FetchError::Cancelled);
        }
        *in_flight = None;

        match &outcome {
            Ok(page) => {
                let entries = page.entries.clone();
                let contest = page.current_contest.clone();
                self.state.send_modify(|s| {
                    s.loading = false;
                    s.error = None;
                    s.results = entries;
                    s.current_contest = contest;
                });
            }
            Err(e) => {
                warn!(error = %e, "Fetch failed");
                let message = e.to_string();
                let contest = e.contest().cloned();
                let winners = matches!(strategy, FetchStrategy::Winners);
                self.state.send_modify(|s| {
                    s.loading = false;
                    s.error = Some(message);
                    s.results.clear();
                    if contest.is_some() {
                        s.current_contest = contest;
                    }
                    if winners {
                        s.showing_winners = false;
                    }
                });
            }
        }

        outcome
    }
}
