//! HTTP client for the PostHog API
//!
//! A thin authenticated wrapper around `reqwest`: every call injects the
//! project `api_key` into the JSON body, sends to `{baseUrl}{path}`, and
//! maps structured error responses into [`Error::Api`]. No retries; each
//! call is exactly one request.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{Map, Value};

use crate::config::{ClientConfig, Credentials};
use crate::error::{Error, Result};

/// Authenticated client for one PostHog instance
pub struct PostHogClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PostHogClient {
    /// Create a client from host-supplied credentials and default tuning
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_config(credentials, &ClientConfig::default())
    }

    /// Create a client with explicit tuning
    pub fn with_config(credentials: &Credentials, config: &ClientConfig) -> Result<Self> {
        credentials.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            // Used verbatim; the host owns any trailing-slash normalization.
            base_url: credentials.url.clone(),
            api_key: credentials.api_key.clone(),
        })
    }

    /// Issue one API request and return the parsed JSON response.
    ///
    /// The project `api_key` is injected into `body` before dispatch. A body
    /// that is empty even after injection is omitted from the request.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        mut body: Map<String, Value>,
        query: &[(String, String)],
    ) -> Result<Value> {
        body.insert("api_key".to_string(), Value::String(self.api_key.clone()));

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, url = %url, "Dispatching PostHog API request");

        let mut request = self.http_client.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if !body.is_empty() {
            request = request.json(&Value::Object(body));
        }

        let response = request.send().await?;
        let status = response.status();

        let status_error = response.error_for_status_ref().err();
        if let Some(source) = status_error {
            let text = response.text().await.unwrap_or_default();
            if let Some(message) = structured_error_message(&text) {
                tracing::warn!(
                    status = status.as_u16(),
                    message = %message,
                    "PostHog API rejected the request"
                );
                return Err(Error::Api {
                    status: status.as_u16(),
                    message,
                });
            }
            return Err(Error::Transport(source));
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

/// Extract the `error` field from a structured failure body, if present.
///
/// A non-string `error` value is stringified into the message.
fn structured_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("error")? {
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
