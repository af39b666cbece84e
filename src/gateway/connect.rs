use std::fmt;
use std::sync::Arc;

use log::{debug, info};

use crate::auth::{Credentials, UserContext};
use crate::gateway::events::TunnelConnectEvent;
use crate::gateway::services::{DispatchError, Services};
use crate::gateway::session::tunnel::Tunnel;

#[derive(Debug)]
pub enum ConnectError {
    TunnelLimitReached { max_tunnels: usize },
    Rejected(DispatchError),
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectError::TunnelLimitReached { max_tunnels } => {
                write!(f, "Too many tunnels connected. Max allowed: {}", max_tunnels)
            }
            ConnectError::Rejected(e) => {
                write!(f, "Tunnel connection was not accepted: {}", e)
            }
        }
    }
}

impl std::error::Error for ConnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConnectError::Rejected(e) => Some(e),
            ConnectError::TunnelLimitReached { .. } => None,
        }
    }
}

// The tunnel only becomes visible to the client once every listener has
// accepted the connect event. On any dispatch fault the tunnel is cancelled
// here, before the error surfaces.
pub async fn connect_tunnel(
    services: &Arc<Services>,
    user_context: Option<Arc<UserContext>>,
    credentials: Option<Arc<Credentials>>,
    connection_name: Option<String>,
) -> Result<Arc<Tunnel>, ConnectError> {
    let config = services.get_config();

    if services.get_tunnel_manager().await.get_count() >= config.get_max_tunnels() {
        return Err(ConnectError::TunnelLimitReached {
            max_tunnels: config.get_max_tunnels(),
        });
    }

    let tunnel = Arc::new(Tunnel::new(connection_name));

    let event = TunnelConnectEvent::new(user_context, credentials, tunnel.clone());

    if let Err(e) = services.get_listener_manager().dispatch_event(&event).await {
        debug!("Tunnel {} connection rejected: {}", tunnel.get_id(), e);
        tunnel.cancel();
        return Err(ConnectError::Rejected(e));
    }

    services
        .get_tunnel_manager()
        .await
        .register_tunnel(tunnel.clone());

    info!("Tunnel {} connected.", tunnel.get_id());

    Ok(tunnel)
}
