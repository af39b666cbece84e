use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::gateway::session::tunnel::Tunnel;

pub struct TunnelManager {
    tunnels: HashMap<Uuid, Arc<Tunnel>>,
}

impl TunnelManager {
    pub fn new() -> Self {
        Self {
            tunnels: HashMap::new(),
        }
    }

    pub fn register_tunnel(&mut self, tunnel: Arc<Tunnel>) {
        self.tunnels.insert(tunnel.get_id(), tunnel);
    }

    pub fn remove_tunnel(&mut self, id: &Uuid) -> Option<Arc<Tunnel>> {
        self.tunnels.remove(id)
    }

    pub fn get_tunnel(&self, id: &Uuid) -> Option<Arc<Tunnel>> {
        self.tunnels.get(id).cloned()
    }

    pub fn get_count(&self) -> usize {
        self.tunnels.len()
    }
}
