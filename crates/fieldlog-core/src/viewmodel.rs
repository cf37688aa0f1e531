//! Per-screen observation state container.
//!
//! Each screen owns one `ObservationsViewModel`. The view model exposes a
//! snapshot of the collection plus loading/error flags, funnels mutations
//! to the repository, and keeps itself converged with every other screen
//! through the change bus: publish after own mutations, refresh on
//! everyone's.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::{NewObservation, Observation};
use crate::events::{ChangeBus, ChangeEvent};
use crate::repository::{ObservationRepository, RepositoryError};

#[derive(Debug, Default)]
struct ViewState {
    observations: Vec<Observation>,
    is_loading: bool,
    error: Option<String>,
}

/// View-facing state over the observation collection.
///
/// Cloning shares the underlying state; the listener task spawned by
/// [`mount`](Self::mount) holds one such clone.
#[derive(Clone)]
pub struct ObservationsViewModel {
    repository: Arc<ObservationRepository>,
    bus: ChangeBus,
    state: Arc<RwLock<ViewState>>,
}

impl ObservationsViewModel {
    /// Create a view model over a shared repository and change bus.
    pub fn new(repository: Arc<ObservationRepository>, bus: ChangeBus) -> Self {
        Self {
            repository,
            bus,
            state: Arc::new(RwLock::new(ViewState::default())),
        }
    }

    /// Snapshot of the collection as of the last refresh.
    pub async fn observations(&self) -> Vec<Observation> {
        self.state.read().await.observations.clone()
    }

    /// Whether a refresh is in flight.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    /// Message of the last failed operation, cleared by the next refresh.
    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Re-read the collection from the repository.
    ///
    /// Clears any recorded error. Read failures inside the repository
    /// degrade to the empty collection there, so this never fails.
    pub async fn refresh(&self) {
        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.error = None;
        }

        let records = self.repository.get_all().await;

        let mut state = self.state.write().await;
        state.observations = records;
        state.is_loading = false;
    }

    /// Record a new observation, then refresh and signal other views.
    ///
    /// On failure the error is recorded in view state and returned;
    /// nothing is published.
    pub async fn add(&self, input: NewObservation) -> Result<Observation, RepositoryError> {
        match self.repository.add(input).await {
            Ok(created) => {
                self.after_mutation().await;
                Ok(created)
            }
            Err(e) => {
                self.record_error(&e).await;
                Err(e)
            }
        }
    }

    /// Replace an existing observation, then refresh and signal.
    pub async fn update(&self, observation: Observation) -> Result<(), RepositoryError> {
        match self.repository.update(observation).await {
            Ok(()) => {
                self.after_mutation().await;
                Ok(())
            }
            Err(e) => {
                self.record_error(&e).await;
                Err(e)
            }
        }
    }

    /// Delete an observation by id, then refresh and signal.
    pub async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        match self.repository.delete(id).await {
            Ok(()) => {
                self.after_mutation().await;
                Ok(())
            }
            Err(e) => {
                self.record_error(&e).await;
                Err(e)
            }
        }
    }

    /// Start listening for collection changes published by other views.
    ///
    /// Returns a guard; the listener refreshes this view model on every
    /// event until the guard is unmounted or dropped. A listener that
    /// falls behind the bus refreshes once and keeps listening; storage,
    /// not the event stream, is the source of truth.
    #[must_use]
    pub fn mount(&self) -> Subscription {
        let mut receiver = self.bus.subscribe();
        let cancel_token = CancellationToken::new();
        let task_token = cancel_token.clone();
        let view = self.clone();

        let join_handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    () = task_token.cancelled() => break,
                    result = receiver.recv() => match result {
                        Ok(event) => {
                            debug!(event = event.event_name(), "Change signal received, refreshing");
                            view.refresh().await;
                        }
                        Err(RecvError::Lagged(missed)) => {
                            warn!(missed, "Change listener lagged, refreshing to catch up");
                            view.refresh().await;
                        }
                        Err(RecvError::Closed) => break,
                    },
                }
            }
            debug!("Change listener task completed");
        });

        Subscription {
            join_handle,
            cancel_token,
        }
    }

    async fn after_mutation(&self) {
        self.refresh().await;
        self.bus.publish(ChangeEvent::CollectionChanged);
    }

    async fn record_error(&self, error: &RepositoryError) {
        self.state.write().await.error = Some(error.to_string());
    }
}

/// Guard for a mounted change listener.
///
/// Dropping the guard cancels the listener; [`unmount`](Self::unmount)
/// additionally waits for the task to finish.
pub struct Subscription {
    join_handle: JoinHandle<()>,
    cancel_token: CancellationToken,
}

impl Subscription {
    /// Stop the listener and wait for its task to finish.
    pub async fn unmount(mut self) {
        self.cancel_token.cancel();

        match tokio::time::timeout(Duration::from_secs(2), &mut self.join_handle).await {
            Ok(Ok(())) => debug!("Change listener stopped"),
            Ok(Err(e)) => warn!(error = %e, "Change listener task panicked"),
            Err(_) => warn!("Change listener shutdown timed out"),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

// View model tests live in tests/viewmodel.rs: they drive the real
// `fieldlog_store::MemoryRecordStore`, which a unit-test module cannot
// link against (the core<->store dev-dependency cycle compiles this crate
// twice, splitting the `RecordStore` trait into two incompatible types).
