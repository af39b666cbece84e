use std::fmt;
use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

use crate::auth::{Credentials, UserContext};
use crate::gateway::events::TunnelCloseEvent;
use crate::gateway::services::{DispatchError, Services};

#[derive(Debug)]
pub enum CloseError {
    TunnelNotFound { tunnel_id: Uuid },
    Vetoed(DispatchError),
}

impl fmt::Display for CloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseError::TunnelNotFound { tunnel_id } => {
                write!(f, "Tunnel {} is not registered.", tunnel_id)
            }
            CloseError::Vetoed(e) => {
                write!(f, "Tunnel close was not accepted: {}", e)
            }
        }
    }
}

impl std::error::Error for CloseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CloseError::Vetoed(e) => Some(e),
            CloseError::TunnelNotFound { .. } => None,
        }
    }
}

// Listeners see the close event before teardown; a rejection vetoes the
// close and the tunnel stays registered and open.
pub async fn close_tunnel(
    services: &Arc<Services>,
    tunnel_id: &Uuid,
    user_context: Option<Arc<UserContext>>,
    credentials: Option<Arc<Credentials>>,
) -> Result<(), CloseError> {
    let Some(tunnel) = services.get_tunnel_manager().await.get_tunnel(tunnel_id) else {
        return Err(CloseError::TunnelNotFound {
            tunnel_id: *tunnel_id,
        });
    };

    let event = TunnelCloseEvent::new(user_context, credentials, tunnel.clone());

    if let Err(e) = services.get_listener_manager().dispatch_event(&event).await {
        debug!("Tunnel {} close vetoed: {}", tunnel_id, e);
        return Err(CloseError::Vetoed(e));
    }

    services.get_tunnel_manager().await.remove_tunnel(tunnel_id);
    tunnel.cancel();

    info!("Tunnel {} closed.", tunnel_id);

    Ok(())
}
