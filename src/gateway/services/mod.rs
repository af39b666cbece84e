use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::gateway::configuration::GatewayConfiguration;

pub mod listener_manager;
pub mod tunnel_manager;

pub use listener_manager::{DispatchError, ListenerManager};

use tunnel_manager::TunnelManager;

pub struct Services {
    tunnel_manager: Mutex<TunnelManager>,
    listener_manager: ListenerManager,
    config: Arc<GatewayConfiguration>,
}

impl Services {
    pub fn new(config: GatewayConfiguration) -> Self {
        let listener_manager = ListenerManager::new(
            config.get_failure_policy(),
            config.get_max_listener_wait(),
        );

        Self {
            tunnel_manager: Mutex::new(TunnelManager::new()),
            listener_manager,
            config: Arc::new(config),
        }
    }

    pub async fn get_tunnel_manager(&self) -> MutexGuard<TunnelManager> {
        self.tunnel_manager.lock().await
    }

    pub fn get_listener_manager(&self) -> &ListenerManager {
        &self.listener_manager
    }

    pub fn get_config(&self) -> Arc<GatewayConfiguration> {
        self.config.clone()
    }
}
