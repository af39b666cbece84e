use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::common::validate::{Validatable, Validation};
use crate::common::validate_rules::MustBeGreaterThanZero;

const DEFAULT_MAX_TUNNELS: usize = 100;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfiguration {
    pub max_tunnels: Option<usize>,
    pub listeners: Option<ListenerConfiguration>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListenerConfiguration {
    pub failure_policy: Option<FailurePolicy>,
    pub max_listener_wait_ms: Option<u64>,
}

// Applies only to listener defects (a panic or an exhausted execution
// budget); a deliberate rejection always stops the dispatch. FailClosed
// treats a defect as a rejection and is the default.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    FailClosed,
    FailOpen,
}

impl GatewayConfiguration {
    pub fn parse_from_file(path: &str) -> Result<Self, std::io::Error> {
        let contents = std::fs::read_to_string(path)?;

        serde_json::from_str(&contents)
            .map_err(|e| std::io::Error::other(format!("Invalid configuration: {}", e)))
    }

    pub fn get_max_tunnels(&self) -> usize {
        self.max_tunnels.unwrap_or(DEFAULT_MAX_TUNNELS)
    }

    pub fn get_failure_policy(&self) -> FailurePolicy {
        self.listeners
            .as_ref()
            .and_then(|listeners| listeners.failure_policy)
            .unwrap_or(FailurePolicy::FailClosed)
    }

    pub fn get_max_listener_wait(&self) -> Option<Duration> {
        self.listeners
            .as_ref()
            .and_then(|listeners| listeners.max_listener_wait_ms)
            .map(Duration::from_millis)
    }
}

impl Validatable for GatewayConfiguration {
    fn validate(&self, result: &mut Validation) {
        if let Some(max_tunnels) = self.max_tunnels {
            result.validate_rule::<MustBeGreaterThanZero, usize>("max_tunnels", &max_tunnels);
        }

        if let Some(listeners) = &self.listeners {
            result.validate_child("listeners", listeners);
        }
    }
}

impl Validatable for ListenerConfiguration {
    fn validate(&self, result: &mut Validation) {
        if let Some(wait) = self.max_listener_wait_ms {
            result.validate_rule::<MustBeGreaterThanZero, u64>("max_listener_wait_ms", &wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfiguration {
            max_tunnels: None,
            listeners: None,
        };

        assert_eq!(config.get_max_tunnels(), DEFAULT_MAX_TUNNELS);
        assert_eq!(config.get_failure_policy(), FailurePolicy::FailClosed);
        assert_eq!(config.get_max_listener_wait(), None);
    }

    #[test]
    fn test_configured_values() {
        let config = GatewayConfiguration {
            max_tunnels: Some(5),
            listeners: Some(ListenerConfiguration {
                failure_policy: Some(FailurePolicy::FailOpen),
                max_listener_wait_ms: Some(250),
            }),
        };

        assert_eq!(config.get_max_tunnels(), 5);
        assert_eq!(config.get_failure_policy(), FailurePolicy::FailOpen);
        assert_eq!(
            config.get_max_listener_wait(),
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn test_parse() {
        let config: GatewayConfiguration = serde_json::from_str(
            r#"{
                "max_tunnels": 10,
                "listeners": {
                    "failure_policy": "fail_open",
                    "max_listener_wait_ms": 1000
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.get_max_tunnels(), 10);
        assert_eq!(config.get_failure_policy(), FailurePolicy::FailOpen);
    }

    #[test]
    fn test_parse_from_file() {
        let path = std::env::temp_dir().join("tunnelgate-config-test.json");
        std::fs::write(&path, r#"{"max_tunnels": 3, "listeners": null}"#).unwrap();

        let config = GatewayConfiguration::parse_from_file(path.to_str().unwrap()).unwrap();

        assert_eq!(config.get_max_tunnels(), 3);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_validation() {
        let valid = GatewayConfiguration {
            max_tunnels: Some(10),
            listeners: Some(ListenerConfiguration {
                failure_policy: None,
                max_listener_wait_ms: Some(500),
            }),
        };

        assert!(Validation::validate(&valid).is_valid());

        let invalid = GatewayConfiguration {
            max_tunnels: Some(0),
            listeners: Some(ListenerConfiguration {
                failure_policy: None,
                max_listener_wait_ms: Some(0),
            }),
        };

        let result = Validation::validate(&invalid);

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 2);
        assert_eq!(
            result.errors()[1],
            "listeners.max_listener_wait_ms: Value must be greater than zero."
        );
    }
}
