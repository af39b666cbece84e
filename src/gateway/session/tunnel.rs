use tokio_util::sync::CancellationToken;
use uuid::Uuid;

// One active backend connection. Framing and byte shuffling happen in the
// transport layer; this type only carries identity and teardown.
#[derive(Clone, Debug)]
pub struct Tunnel {
    id: Uuid,
    connection_name: Option<String>,
    cancel_token: CancellationToken,
}

impl Tunnel {
    pub fn new(connection_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            connection_name,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn get_id(&self) -> Uuid {
        self.id
    }

    pub fn get_connection_name(&self) -> Option<&str> {
        self.connection_name.as_deref()
    }

    pub fn get_cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn is_open(&self) -> bool {
        !self.cancel_token.is_cancelled()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub async fn wait_for_cancellation(&self) {
        self.cancel_token.cancelled().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tunnel_is_open() {
        let tunnel = Tunnel::new(Some("desktop-1".to_string()));

        assert!(tunnel.is_open());
        assert_eq!(tunnel.get_connection_name(), Some("desktop-1"));
    }

    #[test]
    fn test_cancel_closes_tunnel() {
        let tunnel = Tunnel::new(None);

        tunnel.cancel();
        assert!(!tunnel.is_open());

        tunnel.cancel();
        assert!(!tunnel.is_open());
    }
}
