use std::sync::Arc;

use crate::auth::{Credentials, UserContext};
use crate::gateway::session::tunnel::Tunnel;

use super::{CredentialEvent, EventKind, LifecycleEvent, TunnelEvent, UserEvent};

// Snapshot of a tunnel about to be closed. Dispatched before teardown so
// listeners can veto the close.
pub struct TunnelCloseEvent {
    user_context: Option<Arc<UserContext>>,
    credentials: Option<Arc<Credentials>>,
    tunnel: Arc<Tunnel>,
}

impl TunnelCloseEvent {
    pub fn new(
        user_context: Option<Arc<UserContext>>,
        credentials: Option<Arc<Credentials>>,
        tunnel: Arc<Tunnel>,
    ) -> Self {
        Self {
            user_context,
            credentials,
            tunnel,
        }
    }
}

impl UserEvent for TunnelCloseEvent {
    fn get_user_context(&self) -> Option<&UserContext> {
        self.user_context.as_deref()
    }
}

impl CredentialEvent for TunnelCloseEvent {
    fn get_credentials(&self) -> Option<&Credentials> {
        self.credentials.as_deref()
    }
}

impl TunnelEvent for TunnelCloseEvent {
    fn get_tunnel(&self) -> &Tunnel {
        &self.tunnel
    }
}

impl LifecycleEvent for TunnelCloseEvent {
    fn get_kind(&self) -> EventKind {
        EventKind::TunnelClose
    }

    fn as_user_event(&self) -> Option<&dyn UserEvent> {
        Some(self)
    }

    fn as_credential_event(&self) -> Option<&dyn CredentialEvent> {
        Some(self)
    }

    fn as_tunnel_event(&self) -> Option<&dyn TunnelEvent> {
        Some(self)
    }
}
