mod exercise_detail;
mod history;
mod library;
mod workout_record;

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use tokio::sync::watch;

use crate::error::Result;

pub use exercise_detail::{ExerciseDetailScreen, GuidancePanel, GUIDANCE_ERROR_TEXT};
pub use history::WorkoutHistoryScreen;
pub use library::{filter_by_name, ExerciseLibraryScreen};
pub use workout_record::WorkoutRecordScreen;

#[derive(Debug)]
pub struct ScreenScope {
    tx: watch::Sender<bool>,
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenScope {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // an Err means the sender is gone, which only happens on teardown too
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    /// Drives `fut` unless the scope is cancelled first. `None` means abandoned.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }
        let output = tokio::select! {
            biased;
            _ = self.cancelled() => return None,
            output = fut => output,
        };
        if self.is_cancelled() {
            return None;
        }
        Some(output)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tracker {
    Load,
    Refresh,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    pub items: Vec<T>,
    pub derived: Vec<T>,
    pub loading: bool,
    pub refreshing: bool,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            derived: Vec::new(),
            loading: false,
            refreshing: false,
        }
    }
}

impl<T> ViewState<T> {
    fn track(&mut self, tracker: Tracker, active: bool) {
        match tracker {
            Tracker::Load => self.loading = active,
            Tracker::Refresh => self.refreshing = active,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState<T> {
    pub item: Option<T>,
    pub loading: bool,
    pub refreshing: bool,
}

impl<T> Default for DetailState<T> {
    fn default() -> Self {
        Self {
            item: None,
            loading: false,
            refreshing: false,
        }
    }
}

impl<T> DetailState<T> {
    fn track(&mut self, tracker: Tracker, active: bool) {
        match tracker {
            Tracker::Load => self.loading = active,
            Tracker::Refresh => self.refreshing = active,
        }
    }
}

struct Listing<T, Q> {
    view: ViewState<T>,
    query: Q,
}

/// Shared list-screen machinery. `Q` is whatever narrows `items` down to
/// `derived`; it lives under the same lock as the view.
pub(crate) struct ListScreen<T, Q = ()> {
    state: Mutex<Listing<T, Q>>,
    scope: ScreenScope,
}

impl<T: Clone, Q: Default> ListScreen<T, Q> {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(Listing {
                view: ViewState::default(),
                query: Q::default(),
            }),
            scope: ScreenScope::new(),
        }
    }

    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut ViewState<T>, &mut Q) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let Listing { view, query } = &mut *state;
        f(view, query)
    }

    pub(crate) fn snapshot(&self) -> ViewState<T> {
        self.update(|view, _| view.clone())
    }

    pub(crate) fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    /// On success replaces `items` and recomputes `derived`; on failure logs
    /// and keeps the previous data. The tracked flag is always cleared unless
    /// the screen was torn down meanwhile.
    pub(crate) async fn run<F, D>(&self, label: &str, tracker: Tracker, fetch: F, derive: D)
    where
        F: Future<Output = Result<Vec<T>>>,
        D: FnOnce(&[T], &Q) -> Vec<T>,
    {
        if self.scope.is_cancelled() {
            tracing::debug!("Skipping {} fetch on a torn-down screen", label);
            return;
        }

        self.update(|view, _| view.track(tracker, true));

        match self.scope.run(fetch).await {
            None => tracing::debug!("Abandoned {} fetch after teardown", label),
            Some(Ok(items)) => {
                tracing::debug!("Fetched {} {}", items.len(), label);
                self.update(|view, query| {
                    view.derived = derive(&items, query);
                    view.items = items;
                    view.track(tracker, false);
                });
            }
            Some(Err(e)) => {
                tracing::error!("Error fetching {}: {}", label, e);
                self.update(|view, _| view.track(tracker, false));
            }
        }
    }
}

#[derive(Debug)]
pub(crate) struct DetailScreen<T> {
    state: Mutex<DetailState<T>>,
    scope: ScreenScope,
}

impl<T: Clone> DetailScreen<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(DetailState::default()),
            scope: ScreenScope::new(),
        }
    }

    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut DetailState<T>) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    pub(crate) fn snapshot(&self) -> DetailState<T> {
        self.update(|state| state.clone())
    }

    pub(crate) fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub(crate) async fn run<F>(&self, label: &str, tracker: Tracker, fetch: F)
    where
        F: Future<Output = Result<Option<T>>>,
    {
        if self.scope.is_cancelled() {
            tracing::debug!("Skipping {} fetch on a torn-down screen", label);
            return;
        }

        self.update(|state| state.track(tracker, true));

        match self.scope.run(fetch).await {
            None => tracing::debug!("Abandoned {} fetch after teardown", label),
            Some(Ok(item)) => {
                if item.is_none() {
                    tracing::warn!("No {} found", label);
                }
                self.update(|state| {
                    state.item = item;
                    state.track(tracker, false);
                });
            }
            Some(Err(e)) => {
                tracing::error!("Error fetching {}: {}", label, e);
                self.update(|state| state.track(tracker, false));
            }
        }
    }
}
