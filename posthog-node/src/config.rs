//! Credentials and client configuration
//!
//! Credentials are supplied by the host's credential store once per
//! execution. This crate only reads them; it never persists or mutates
//! them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// PostHog API credentials, as resolved by the host credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Base URL of the PostHog instance (e.g. `https://app.posthog.com`).
    /// Used verbatim; the host owns any trailing-slash normalization.
    pub url: String,

    /// Project API key (format: "phc_xxxx")
    pub api_key: String,
}

impl Credentials {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// Validate credentials, returning an error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(Error::Config("credentials url is required".to_string()));
        }
        if self.api_key.is_empty() {
            return Err(Error::Config("credentials apiKey is required".to_string()));
        }
        Ok(())
    }
}

/// HTTP client tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_credentials_validation() {
        let credentials = Credentials::new("https://app.posthog.com", "phc_test");
        assert!(credentials.validate().is_ok());

        let credentials = Credentials::new("", "phc_test");
        assert!(credentials.validate().is_err());

        let credentials = Credentials::new("https://app.posthog.com", "");
        assert!(credentials.validate().is_err());
    }

    #[test]
    fn test_credentials_wire_form() {
        let json = r#"{"url": "https://app.posthog.com", "apiKey": "phc_test"}"#;
        let credentials: Credentials = serde_json::from_str(json).unwrap();
        assert_eq!(credentials.url, "https://app.posthog.com");
        assert_eq!(credentials.api_key, "phc_test");
    }

    #[test]
    fn test_client_config_parse_with_default() {
        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.timeout_secs, 30);

        let config: ClientConfig = serde_json::from_str(r#"{"timeout_secs": 5}"#).unwrap();
        assert_eq!(config.timeout_secs, 5);
    }
}
