use async_trait::async_trait;

use super::LifecycleEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerResult {
    Accepted,
    Rejected { reason: String },
}

// Implemented by extensions. Listeners are invoked inline on the task that
// triggered the occurrence and may run concurrently for independent tunnels,
// so implementations must not rely on exclusive access to shared state.
#[async_trait]
pub trait EventListener: Send + Sync {
    async fn handle_event(&self, event: &dyn LifecycleEvent) -> ListenerResult;
}
