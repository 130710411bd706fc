use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use log::{debug, error, info, warn};
use serde::Serialize;
use tokio::sync::watch;

use crate::{FetchRepositoriesUseCase, Repository};

/// Shown when a failure carries no description.
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// The phase of the repository list fetch cycle.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchPhase {
    /// No fetch has been triggered yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch completed, with an error message if it failed.
    Loaded {
        /// The description of the failure.
        error: Option<String>,
    },
    /// The last fetch was dropped before it completed.
    Cancelled,
}

/// An immutable view of the repository list state.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryListSnapshot {
    /// The repositories of the last successful fetch.
    pub repositories: Vec<Repository>,

    /// The description of the last failure, cleared when a fetch starts.
    pub error_message: Option<String>,

    /// Whether a fetch is in flight.
    pub is_loading: bool,

    /// The phase of the fetch cycle.
    pub phase: FetchPhase,
}

impl RepositoryListSnapshot {
    fn start_fetch(&mut self) {
        self.is_loading = true;
        self.error_message = None;
        self.phase = FetchPhase::Loading;
    }

    fn complete_fetch(&mut self, outcome: Result<Vec<Repository>, String>) {
        self.is_loading = false;
        match outcome {
            Ok(repositories) => {
                self.repositories = repositories;
                self.phase = FetchPhase::Loaded { error: None };
            }
            Err(message) => {
                self.error_message = Some(message.clone());
                self.phase = FetchPhase::Loaded {
                    error: Some(message),
                };
            }
        }
    }

    fn cancel_fetch(&mut self) {
        self.is_loading = false;
        self.phase = FetchPhase::Cancelled;
    }
}

/// How a trigger behaves while another fetch is still in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Every trigger runs; the last write wins.
    #[default]
    Concurrent,
    /// A trigger is ignored while another fetch is in flight.
    SkipWhileInFlight,
}

/// Marks the fetch as cancelled when dropped before [LoadingGuard::complete] is called.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<RepositoryListSnapshot>,
    completed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a watch::Sender<RepositoryListSnapshot>) -> Self {
        state.send_modify(RepositoryListSnapshot::start_fetch);

        Self {
            state,
            completed: false,
        }
    }

    fn complete(mut self, outcome: Result<Vec<Repository>, String>) {
        self.completed = true;
        self.state.send_modify(|state| state.complete_fetch(outcome));
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            warn!("Repositories fetch cancelled before completion");
            self.state.send_modify(RepositoryListSnapshot::cancel_fetch);
        }
    }
}

/// Releases the in-flight marker when dropped.
struct InFlightGuard<'a> {
    in_flight: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn try_acquire(in_flight: &'a AtomicBool) -> Option<Self> {
        in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { in_flight })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

/// Holds the repository list shown by the presentation layer and drives its fetch cycle.
pub struct RepositoryListState {
    use_case: Arc<dyn FetchRepositoriesUseCase>,
    state: watch::Sender<RepositoryListSnapshot>,
    overlap_policy: OverlapPolicy,
    in_flight: AtomicBool,
}

impl RepositoryListState {
    /// Creates a new `RepositoryListState` instance with the given use case.
    pub fn new(use_case: Arc<dyn FetchRepositoriesUseCase>) -> Self {
        Self::with_overlap_policy(use_case, OverlapPolicy::default())
    }

    /// Creates a new `RepositoryListState` instance with the given use case and overlap policy.
    pub fn with_overlap_policy(
        use_case: Arc<dyn FetchRepositoriesUseCase>,
        overlap_policy: OverlapPolicy,
    ) -> Self {
        Self {
            use_case,
            state: watch::Sender::new(RepositoryListSnapshot::default()),
            overlap_policy,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Fetches the repositories and records the outcome.
    ///
    /// On success the list is replaced wholesale. On failure the list is kept and
    /// the error message is set. The loading flag is always reset before returning.
    pub async fn trigger_fetch(&self) {
        let _in_flight = match self.overlap_policy {
            OverlapPolicy::Concurrent => None,
            OverlapPolicy::SkipWhileInFlight => match InFlightGuard::try_acquire(&self.in_flight) {
                Some(guard) => Some(guard),
                None => {
                    debug!("A fetch is already in flight, skipping trigger");
                    return;
                }
            },
        };

        let loading = LoadingGuard::start(&self.state);
        info!("Fetching repositories");

        let outcome = match self.use_case.execute().await {
            Ok(repositories) => {
                info!("Loaded {} repositories", repositories.len());
                Ok(repositories)
            }
            Err(e) => {
                error!("Failed to fetch repositories: {e:#}");
                match e.to_string() {
                    message if message.is_empty() => Err(UNKNOWN_ERROR_MESSAGE.to_string()),
                    message => Err(message),
                }
            }
        };
        loading.complete(outcome);
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> RepositoryListSnapshot {
        self.state.borrow().clone()
    }

    /// Subscribes to every state change.
    pub fn subscribe(&self) -> watch::Receiver<RepositoryListSnapshot> {
        self.state.subscribe()
    }

    /// Retrieves the repositories of the last successful fetch.
    pub fn repositories(&self) -> Vec<Repository> {
        self.state.borrow().repositories.clone()
    }

    /// Retrieves the description of the last failure.
    pub fn error_message(&self) -> Option<String> {
        self.state.borrow().error_message.clone()
    }

    /// Returns `true` while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    /// Retrieves the phase of the fetch cycle.
    pub fn phase(&self) -> FetchPhase {
        self.state.borrow().phase.clone()
    }
}
