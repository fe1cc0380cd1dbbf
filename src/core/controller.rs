use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::query::FilterState;
use crate::core::timer::{self, TimerHandle};
use crate::models::{Advocate, AdvocatesResponse};
use crate::services::{AdvocateFetcher, FetchError};

/// Default quiet period before a search term is applied
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Default upper bound on a single list request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Construction options for [`SearchDataController`]
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub search: String,
    pub city: String,
    pub degree: String,
    pub debounce: Duration,
    pub request_timeout: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            search: String::new(),
            city: String::new(),
            degree: String::new(),
            debounce: DEFAULT_DEBOUNCE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl SearchOptions {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_degree(mut self, degree: impl Into<String>) -> Self {
        self.degree = degree.into();
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Outcome of the most recent fetch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingState {
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

impl LoadingState {
    /// UI projection of the loading state
    pub fn view(&self) -> LoadingView {
        match self {
            LoadingState::Loading => LoadingView {
                is_loading: true,
                error: None,
            },
            LoadingState::Errored(message) => LoadingView {
                is_loading: false,
                error: Some(message.clone()),
            },
            LoadingState::Idle | LoadingState::Loaded => LoadingView::default(),
        }
    }
}

/// What the UI renders: a spinner, an error, or the data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingView {
    pub is_loading: bool,
    pub error: Option<String>,
}

/// State-machine view of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    Idle,
    Debouncing,
    Fetching,
    Loaded,
    Errored,
}

/// Everything the UI needs for one render
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSnapshot {
    pub advocates: Vec<Advocate>,
    pub loading: LoadingView,
    pub phase: ControllerPhase,
}

struct ControllerState {
    filters: FilterState,
    debounced_search: String,
    effective: FilterState,
    loading: LoadingState,
    advocates: Vec<Advocate>,
    request_token: u64,
    debounce_token: u64,
    debounce_timer: Option<TimerHandle>,
    in_flight: Option<JoinHandle<()>>,
    disposed: bool,
}

impl ControllerState {
    fn phase(&self) -> ControllerPhase {
        if self.debounce_timer.is_some() {
            return ControllerPhase::Debouncing;
        }
        match self.loading {
            LoadingState::Idle => ControllerPhase::Idle,
            LoadingState::Loading => ControllerPhase::Fetching,
            LoadingState::Loaded => ControllerPhase::Loaded,
            LoadingState::Errored(_) => ControllerPhase::Errored,
        }
    }

    fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            advocates: self.advocates.clone(),
            loading: self.loading.view(),
            phase: self.phase(),
        }
    }

    fn cancel_debounce(&mut self) {
        if let Some(timer) = self.debounce_timer.take() {
            timer.cancel();
        }
        self.debounce_token += 1;
    }
}

struct Shared {
    fetcher: Arc<dyn AdvocateFetcher>,
    debounce: Duration,
    request_timeout: Duration,
    state: Mutex<ControllerState>,
    updates: watch::Sender<ControllerSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &ControllerState) {
        self.updates.send_replace(state.snapshot());
    }

    /// Recompute the effective filter triple and fetch if it changed
    fn sync_effective(self: &Arc<Self>, state: &mut ControllerState) {
        let next = FilterState {
            search: state.debounced_search.clone(),
            city: state.filters.city.clone(),
            degree: state.filters.degree.clone(),
        };

        if next != state.effective {
            state.effective = next;
            self.start_fetch(state);
        }
    }

    /// Issue a fetch for the current effective filters
    ///
    /// Supersedes any in-flight request: its task is aborted and its token
    /// no longer matches, so a late result is never applied.
    fn start_fetch(self: &Arc<Self>, state: &mut ControllerState) {
        if let Some(task) = state.in_flight.take() {
            task.abort();
        }

        state.request_token += 1;
        state.loading = LoadingState::Loading;

        let token = state.request_token;
        let path = state.effective.advocates_path();
        let fetcher = Arc::clone(&self.fetcher);
        let timeout = self.request_timeout;
        let shared = Arc::downgrade(self);

        tracing::debug!(token, %path, "Fetching advocates");

        state.in_flight = Some(tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, fetcher.fetch(&path)).await {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout(timeout)),
            };

            if let Some(shared) = shared.upgrade() {
                shared.complete(token, result);
            }
        }));

        self.publish(state);
    }

    fn complete(&self, token: u64, result: Result<AdvocatesResponse, FetchError>) {
        let mut state = self.lock();

        if state.disposed || token != state.request_token {
            tracing::debug!(
                token,
                latest = state.request_token,
                "Discarding stale advocates response"
            );
            return;
        }

        state.in_flight = None;

        match result {
            Ok(body) => {
                tracing::debug!(token, count = body.data.len(), "Advocates loaded");
                state.advocates = body.data;
                state.loading = LoadingState::Loaded;
            }
            Err(e) => {
                tracing::error!("Error fetching advocates: {}", e);
                state.advocates.clear();
                state.loading = LoadingState::Errored(e.to_string());
            }
        }

        self.publish(&state);
    }

    fn debounce_fired(self: &Arc<Self>, token: u64, search: String) {
        let mut state = self.lock();

        if state.disposed || token != state.debounce_token {
            return;
        }

        state.debounce_timer = None;
        state.debounced_search = search;
        self.sync_effective(&mut state);
        self.publish(&state);
    }
}

/// Debounced, cancellation-safe advocate search
///
/// Holds the raw filter inputs, turns them into list requests and exposes the
/// latest result to a UI. Search text is applied after `debounce` of quiet
/// (immediately when cleared); city and degree apply at once. Only the
/// response to the most recently issued request ever reaches visible state.
///
/// Must be created inside a tokio runtime. Dropping the controller disposes
/// it.
pub struct SearchDataController {
    shared: Arc<Shared>,
}

impl SearchDataController {
    /// Create a controller and issue the initial fetch
    ///
    /// The initial options are the first effective filters as given; the
    /// initial search term is not debounced.
    pub fn new(fetcher: Arc<dyn AdvocateFetcher>, options: SearchOptions) -> Self {
        let filters = FilterState::new(options.search, options.city, options.degree);

        let state = ControllerState {
            debounced_search: filters.search.clone(),
            effective: filters.clone(),
            filters,
            loading: LoadingState::Idle,
            advocates: Vec::new(),
            request_token: 0,
            debounce_token: 0,
            debounce_timer: None,
            in_flight: None,
            disposed: false,
        };

        let (updates, _) = watch::channel(state.snapshot());

        let shared = Arc::new(Shared {
            fetcher,
            debounce: options.debounce,
            request_timeout: options.request_timeout,
            state: Mutex::new(state),
            updates,
        });

        {
            let mut state = shared.lock();
            shared.start_fetch(&mut state);
        }

        Self { shared }
    }

    /// Update the free-text search
    pub fn set_search(&self, search: impl Into<String>) {
        let search = search.into();
        let mut state = self.shared.lock();

        if state.disposed || state.filters.search == search {
            return;
        }

        state.filters.search = search.clone();
        state.cancel_debounce();

        if search.is_empty() {
            state.debounced_search.clear();
            self.shared.sync_effective(&mut state);
        } else {
            let token = state.debounce_token;
            let shared = Arc::downgrade(&self.shared);
            state.debounce_timer = Some(timer::schedule(self.shared.debounce, move || {
                if let Some(shared) = shared.upgrade() {
                    shared.debounce_fired(token, search);
                }
            }));
        }

        self.shared.publish(&state);
    }

    /// Update the city filter
    pub fn set_city(&self, city: impl Into<String>) {
        let city = city.into();
        let mut state = self.shared.lock();

        if state.disposed || state.filters.city == city {
            return;
        }

        state.filters.city = city;
        self.shared.sync_effective(&mut state);
    }

    /// Update the degree filter
    pub fn set_degree(&self, degree: impl Into<String>) {
        let degree = degree.into();
        let mut state = self.shared.lock();

        if state.disposed || state.filters.degree == degree {
            return;
        }

        state.filters.degree = degree;
        self.shared.sync_effective(&mut state);
    }

    /// Clear all three filters at once, issuing at most one fetch
    pub fn reset(&self) {
        let mut state = self.shared.lock();

        if state.disposed {
            return;
        }

        state.cancel_debounce();
        state.filters = FilterState::default();
        state.debounced_search.clear();
        self.shared.sync_effective(&mut state);
        self.shared.publish(&state);
    }

    /// Re-issue the fetch for the last-used effective filters
    pub fn retry(&self) {
        let mut state = self.shared.lock();

        if state.disposed {
            return;
        }

        tracing::info!(path = %state.effective.advocates_path(), "Retrying advocates fetch");
        self.shared.start_fetch(&mut state);
    }

    /// Same as [`SearchDataController::retry`]
    pub fn refetch(&self) {
        self.retry();
    }

    /// Current result set
    pub fn advocates(&self) -> Vec<Advocate> {
        self.shared.lock().advocates.clone()
    }

    /// `{is_loading, error}` projection for rendering
    pub fn loading_state(&self) -> LoadingView {
        self.shared.lock().loading.view()
    }

    pub fn state(&self) -> LoadingState {
        self.shared.lock().loading.clone()
    }

    pub fn phase(&self) -> ControllerPhase {
        self.shared.lock().phase()
    }

    /// Raw filter inputs
    pub fn filters(&self) -> FilterState {
        self.shared.lock().filters.clone()
    }

    /// Filters used for the most recent request
    pub fn effective_filters(&self) -> FilterState {
        self.shared.lock().effective.clone()
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        self.shared.lock().snapshot()
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<ControllerSnapshot> {
        self.shared.updates.subscribe()
    }

    /// Cancel the pending debounce timer and in-flight request
    ///
    /// After disposal no setter or async completion changes state. Safe to
    /// call more than once.
    pub fn dispose(&self) {
        let mut state = self.shared.lock();

        if state.disposed {
            return;
        }

        state.disposed = true;
        state.cancel_debounce();
        if let Some(task) = state.in_flight.take() {
            task.abort();
        }

        tracing::debug!("Search controller disposed");
    }
}

impl Drop for SearchDataController {
    fn drop(&mut self) {
        self.dispose();
    }
}
