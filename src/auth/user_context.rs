// An authenticated session's view of the gateway: who the user is and which
// backend connections the session may reach.
#[derive(Clone, Debug)]
pub struct UserContext {
    username: String,
    available_connections: Vec<String>,
}

impl UserContext {
    pub fn new(username: String, available_connections: Vec<String>) -> Self {
        Self {
            username,
            available_connections,
        }
    }

    pub fn get_username(&self) -> &str {
        &self.username
    }

    pub fn get_available_connections(&self) -> &[String] {
        &self.available_connections
    }

    pub fn can_access_connection(&self, connection_name: &str) -> bool {
        self.available_connections
            .iter()
            .any(|name| name == connection_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_access_connection() {
        let context = UserContext::new(
            "test".to_string(),
            vec!["desktop-1".to_string(), "desktop-2".to_string()],
        );

        assert!(context.can_access_connection("desktop-1"));
        assert!(context.can_access_connection("desktop-2"));
        assert!(!context.can_access_connection("desktop-3"));
    }
}
