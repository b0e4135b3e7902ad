//! HTTP feedback provider client
//!
//! Speaks the backend's analysis API:
//! - `POST {endpoint}/analyze` with `{"code": "<file text>"}` returns the
//!   feedback payload for one file.
//! - `GET {endpoint}/` returns a `{"status": ...}` health payload.

use std::time::Duration;

use async_trait::async_trait;
use critique_core::{Config, Feedback, FeedbackProvider, Secrets, SourceFile};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::{Error, Result};

/// Request body for the analyze endpoint
#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    code: &'a str,
}

/// Health payload returned by the provider root endpoint
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// HTTP client for a code feedback provider
pub struct HttpProvider {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HttpProvider {
    /// Create a provider client for the given endpoint
    ///
    /// The endpoint is validated up front so a typo fails at startup rather
    /// than on the first file.
    pub fn new(endpoint: &str, timeout: Duration, api_key: Option<String>) -> Result<Self> {
        let mut endpoint = Url::parse(endpoint)
            .map_err(|e| Error::InvalidEndpoint(endpoint.to_string(), e))?;

        // Url::join drops the last path segment unless the base ends with '/'
        if !endpoint.path().ends_with('/') {
            endpoint.set_path(&format!("{}/", endpoint.path()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("critique")
            .build()?;

        info!(endpoint = %endpoint, timeout = ?timeout, "Created provider client");

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Create a provider client from loaded configuration and secrets
    ///
    /// The API key is resolved from (in priority order):
    /// 1. CRITIQUE_API_KEY environment variable
    /// 2. ~/.config/critique/secrets.toml
    pub fn from_config(config: &Config, secrets: &Secrets) -> Result<Self> {
        Self::new(
            &config.provider.endpoint,
            config.provider.timeout,
            secrets.api_key(),
        )
    }

    /// Base URL this client talks to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Resolve a path relative to the endpoint
    fn url_for(&self, path: &str) -> Result<Url> {
        self.endpoint
            .join(path)
            .map_err(|e| Error::InvalidEndpoint(format!("{}/{}", self.endpoint, path), e))
    }

    /// Attach the bearer token when one is configured
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.api_key {
            Some(ref key) => request.bearer_auth(key),
            None => request,
        }
    }

    /// Submit one file's text for analysis
    async fn analyze(&self, source: &SourceFile) -> Result<Feedback> {
        let url = self.url_for("analyze")?;

        debug!(
            url = %url,
            path = %source.path().display(),
            bytes = source.contents().len(),
            "Sending analyze request"
        );

        let request = self.client.post(url).json(&AnalyzeRequest {
            code: source.contents(),
        });

        let response = self.authorize(request).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(Error::Auth(format!(
                "provider rejected credentials (status {})",
                status.as_u16()
            )));
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response".to_string());
            return Err(Error::Status {
                code: status.as_u16(),
                body,
            });
        }

        response
            .json::<Feedback>()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }

    /// Test the connection by fetching the provider's health endpoint
    pub async fn test_connection(&self) -> Result<String> {
        let url = self.url_for("")?;

        debug!(url = %url, "Testing provider connection");

        let response = self.authorize(self.client.get(url)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response".to_string());
            return Err(Error::Status {
                code: status.as_u16(),
                body,
            });
        }

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        info!(status = %health.status, "Provider connection successful");
        Ok(health.status)
    }
}

impl std::fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProvider")
            .field("endpoint", &self.endpoint.as_str())
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl FeedbackProvider for HttpProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn review(&self, source: &SourceFile) -> critique_core::Result<Feedback> {
        Ok(self.analyze(source).await?)
    }
}
