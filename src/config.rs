use crate::error::{PaymenterError, Result};
use std::time::Duration;

/// Client configuration shared by every request issued through a client.
///
/// Constructed once and immutable thereafter.
#[derive(Debug, Clone)]
pub struct PaymenterConfig {
    /// Base URL of the Paymenter instance, e.g. `https://example.com/api`
    pub base_url: String,
    /// API bearer token
    pub api_key: String,
    /// Per-request timeout; the in-flight request is aborted once it elapses
    pub timeout: Option<Duration>,
}

impl PaymenterConfig {
    /// Create a configuration with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let api_key = api_key.into();

        if base_url.trim().is_empty() {
            return Err(PaymenterError::invalid_config("base URL must not be empty"));
        }
        if api_key.trim().is_empty() {
            return Err(PaymenterError::invalid_config("API key must not be empty"));
        }

        Ok(Self {
            base_url,
            api_key,
            timeout: None,
        })
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(PaymenterError::invalid_config("timeout must be non-zero"));
        }
        self.timeout = Some(timeout);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_is_accepted() {
        let config = PaymenterConfig::new("https://example.com/api", "token").unwrap();
        assert_eq!(config.base_url, "https://example.com/api");
        assert_eq!(config.api_key, "token");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let result = PaymenterConfig::new("", "token");
        assert!(matches!(result, Err(PaymenterError::InvalidConfig { .. })));
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let result = PaymenterConfig::new("https://example.com", "  ");
        assert!(matches!(result, Err(PaymenterError::InvalidConfig { .. })));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = PaymenterConfig::new("https://example.com", "token").unwrap();
        let result = config.with_timeout(Duration::ZERO);
        assert!(matches!(result, Err(PaymenterError::InvalidConfig { .. })));
    }

    #[test]
    fn timeout_is_stored() {
        let config = PaymenterConfig::new("https://example.com", "token")
            .unwrap()
            .with_timeout(Duration::from_secs(30))
            .unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
