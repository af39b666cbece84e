use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use log::{debug, error, warn};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::gateway::configuration::FailurePolicy;
use crate::gateway::events::{EventListener, LifecycleEvent, ListenerResult};

#[derive(Debug)]
pub enum DispatchError {
    Rejected { listener: String, reason: String },
    ListenerPanicked { listener: String },
    ListenerTimedOut { listener: String, wait_ms: u64 },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Rejected { listener, reason } => {
                write!(f, "Listener '{}' rejected the event: {}", listener, reason)
            }
            DispatchError::ListenerPanicked { listener } => {
                write!(f, "Listener '{}' panicked while handling the event.", listener)
            }
            DispatchError::ListenerTimedOut { listener, wait_ms } => {
                write!(f, "Listener '{}' did not finish within {}ms.", listener, wait_ms)
            }
        }
    }
}

impl std::error::Error for DispatchError {}

#[derive(Clone)]
struct RegisteredListener {
    id: Uuid,
    name: String,
    listener: Arc<dyn EventListener>,
}

// Ordered listener registry. Dispatch iterates a snapshot of the registry
// taken under the read lock, so registrations and removals made while a
// dispatch is in flight only apply to later dispatches. Dispatches for
// independent tunnels never serialize on each other.
pub struct ListenerManager {
    listeners: RwLock<Vec<RegisteredListener>>,
    failure_policy: FailurePolicy,
    max_listener_wait: Option<Duration>,
}

impl ListenerManager {
    pub fn new(failure_policy: FailurePolicy, max_listener_wait: Option<Duration>) -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
            failure_policy,
            max_listener_wait,
        }
    }

    pub async fn add_listener(&self, name: &str, listener: Arc<dyn EventListener>) -> Uuid {
        let id = Uuid::new_v4();

        self.listeners.write().await.push(RegisteredListener {
            id,
            name: name.to_owned(),
            listener,
        });

        debug!("Registered listener '{}' as {}.", name, id);

        id
    }

    pub async fn remove_listener(&self, id: &Uuid) -> bool {
        let mut listeners = self.listeners.write().await;
        let count_before = listeners.len();

        listeners.retain(|entry| &entry.id != id);

        listeners.len() != count_before
    }

    pub async fn get_count(&self) -> usize {
        self.listeners.read().await.len()
    }

    pub async fn dispatch_event(&self, event: &dyn LifecycleEvent) -> Result<(), DispatchError> {
        let snapshot = self.listeners.read().await.clone();

        debug!(
            "Dispatching {:?} event to {} listeners.",
            event.get_kind(),
            snapshot.len()
        );

        for entry in snapshot.iter() {
            match self.invoke_listener(entry, event).await {
                Ok(ListenerResult::Accepted) => {}
                Ok(ListenerResult::Rejected { reason }) => {
                    debug!(
                        "Listener '{}' rejected {:?} event: {}",
                        entry.name,
                        event.get_kind(),
                        reason
                    );

                    return Err(DispatchError::Rejected {
                        listener: entry.name.clone(),
                        reason,
                    });
                }
                Err(fault) => match self.failure_policy {
                    FailurePolicy::FailClosed => {
                        error!("Stopping {:?} event dispatch: {}", event.get_kind(), fault);
                        return Err(fault);
                    }
                    FailurePolicy::FailOpen => {
                        warn!("Continuing {:?} event dispatch: {}", event.get_kind(), fault);
                    }
                },
            }
        }

        Ok(())
    }

    async fn invoke_listener(
        &self,
        entry: &RegisteredListener,
        event: &dyn LifecycleEvent,
    ) -> Result<ListenerResult, DispatchError> {
        let handler = AssertUnwindSafe(entry.listener.handle_event(event)).catch_unwind();

        let outcome = match self.max_listener_wait {
            Some(wait) => match tokio::time::timeout(wait, handler).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    return Err(DispatchError::ListenerTimedOut {
                        listener: entry.name.clone(),
                        wait_ms: wait.as_millis() as u64,
                    });
                }
            },
            None => handler.await,
        };

        outcome.map_err(|_| DispatchError::ListenerPanicked {
            listener: entry.name.clone(),
        })
    }
}
