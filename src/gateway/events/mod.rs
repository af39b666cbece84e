use crate::auth::{Credentials, UserContext};
use crate::gateway::session::tunnel::Tunnel;

mod listener;
mod tunnel_close;
mod tunnel_connect;

pub use listener::{EventListener, ListenerResult};
pub use tunnel_close::TunnelCloseEvent;
pub use tunnel_connect::TunnelConnectEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    TunnelConnect,
    TunnelClose,
}

pub trait UserEvent {
    fn get_user_context(&self) -> Option<&UserContext>;
}

pub trait CredentialEvent {
    fn get_credentials(&self) -> Option<&Credentials>;
}

pub trait TunnelEvent {
    fn get_tunnel(&self) -> &Tunnel;
}

// A listener that only cares about one capability checks for it with the
// as_* accessors and ignores events that do not expose it. New event types
// implement whichever capabilities apply; dispatch does not change.
pub trait LifecycleEvent: Send + Sync {
    fn get_kind(&self) -> EventKind;

    fn as_user_event(&self) -> Option<&dyn UserEvent> {
        None
    }

    fn as_credential_event(&self) -> Option<&dyn CredentialEvent> {
        None
    }

    fn as_tunnel_event(&self) -> Option<&dyn TunnelEvent> {
        None
    }
}
