//! Folio backend API client.
//!
//! This crate provides a small client for the two portfolio endpoints:
//!
//! - `GET {base}/api/portfolio/` returning the full [`PortfolioContent`]
//!   document
//! - `POST {base}/api/contact-messages/` accepting a contact message
//!
//! Configuration is an explicit [`ApiConfig`] value rather than module-level
//! state, so tests can inject a fake base URL. The base URL is resolved once
//! from `FOLIO_BACKEND_URL` (or the legacy `FOLIO_API_BASE_URL`), falling
//! back to `http://localhost:8000` for local development.
//!
//! # Example
//!
//! ```ignore
//! use folio_api::{ApiConfig, PortfolioClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), folio_api::ApiError> {
//!     let client = PortfolioClient::new(ApiConfig::from_env())?;
//!     let content = client.fetch_portfolio().await?;
//!     println!("{} projects", content.projects.len());
//!     Ok(())
//! }
//! ```

use std::env;
use std::time::Duration;

use folio_types::{ContactMessagePayload, PortfolioContent};
use reqwest::{Client, StatusCode, header};
use thiserror::Error;
use tracing::{debug, warn};

/// Primary environment variable naming the backend base URL.
pub const BACKEND_URL_ENV: &str = "FOLIO_BACKEND_URL";
/// Legacy fallback variable consulted when the primary one is unset.
pub const BACKEND_URL_FALLBACK_ENV: &str = "FOLIO_API_BASE_URL";
/// Base URL used when neither environment variable is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the content document endpoint, relative to the base URL.
pub const PORTFOLIO_PATH: &str = "/api/portfolio/";
/// Path of the contact message endpoint, relative to the base URL.
pub const CONTACT_MESSAGES_PATH: &str = "/api/contact-messages/";

/// Error surfaced by [`PortfolioClient`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed or used.
    #[error("invalid backend base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    BuildClient(#[source] reqwest::Error),
    /// Network-level failure (connection refused, timeout, DNS).
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a non-success status and no usable detail.
    #[error("Request failed with status {status}")]
    Status { status: u16 },
    /// The server rejected a submission with a human-readable `detail`.
    #[error("{message}")]
    Rejected { message: String },
    /// The response body was not valid JSON for the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Explicit client configuration.
///
/// Constructed once at application start and handed to
/// [`PortfolioClient::new`]; nothing in this crate reads process-wide mutable
/// state after that point.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout applied to the underlying client.
    pub timeout: Duration,
    /// Additional attempts for the content GET after a retryable failure.
    /// The contact POST is never retried.
    pub fetch_retries: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            fetch_retries: 2,
        }
    }
}

impl ApiConfig {
    /// Resolve the base URL from the environment.
    ///
    /// `FOLIO_BACKEND_URL` wins, then `FOLIO_API_BASE_URL`, then the
    /// localhost default. Any trailing slash is trimmed so endpoint paths
    /// concatenate cleanly.
    pub fn from_env() -> Self {
        let raw = env::var(BACKEND_URL_ENV)
            .ok()
            .or_else(|| env::var(BACKEND_URL_FALLBACK_ENV).ok())
            .filter(|value| !value.trim().is_empty());

        let base_url = match raw {
            Some(value) => value.trim().trim_end_matches('/').to_string(),
            None => DEFAULT_BASE_URL.to_string(),
        };

        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Replace the base URL, trimming any trailing slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let value: String = base_url.into();
        self.base_url = value.trim_end_matches('/').to_string();
        self
    }
}

/// Thin wrapper around a configured `reqwest::Client` for the portfolio API.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    config: ApiConfig,
    http: Client,
}

impl PortfolioClient {
    /// Validate the configured base URL and build the HTTP client.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        validate_base_url(&config.base_url)?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::BuildClient)?;

        Ok(Self { config, http })
    }

    /// The resolved base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Absolute URL of the content document endpoint.
    pub fn portfolio_url(&self) -> String {
        format!("{}{}", self.config.base_url, PORTFOLIO_PATH)
    }

    /// Absolute URL of the contact message endpoint.
    pub fn contact_messages_url(&self) -> String {
        format!("{}{}", self.config.base_url, CONTACT_MESSAGES_PATH)
    }

    /// Fetch the full portfolio content document.
    ///
    /// The GET is idempotent, so transport errors and 5xx responses are
    /// retried up to `fetch_retries` additional times before the failure is
    /// returned. Non-2xx responses map to [`ApiError::Status`].
    pub async fn fetch_portfolio(&self) -> Result<PortfolioContent, ApiError> {
        let url = self.portfolio_url();
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match self.fetch_portfolio_once(&url).await {
                Ok(content) => return Ok(content),
                Err(error) if attempt <= self.config.fetch_retries && is_retryable(&error) => {
                    warn!(%url, attempt, error = %error, "content fetch failed; retrying");
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn fetch_portfolio_once(&self, url: &str) -> Result<PortfolioContent, ApiError> {
        debug!(%url, "fetching portfolio content");
        let response = self.http.get(url).send().await.map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16() });
        }
        response.json::<PortfolioContent>().await.map_err(ApiError::Decode)
    }

    /// Submit a contact message.
    ///
    /// Never retried: the POST creates a record server-side. On a non-2xx
    /// response the body is inspected for a JSON `detail` field, which is
    /// surfaced verbatim; otherwise the generic status message is returned.
    pub async fn post_contact_message(&self, payload: &ContactMessagePayload) -> Result<(), ApiError> {
        let url = self.contact_messages_url();
        debug!(%url, "posting contact message");

        let response = self
            .http
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(rejection_from_body(status, &body))
    }
}

/// Map a failed submission response to an error, preferring the server's
/// `detail` message when the body parses as JSON.
fn rejection_from_body(status: StatusCode, body: &str) -> ApiError {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body)
        && let Some(detail) = value.get("detail").and_then(|d| d.as_str())
    {
        return ApiError::Rejected {
            message: detail.to_string(),
        };
    }
    ApiError::Status {
        status: status.as_u16(),
    }
}

/// Whether a content-fetch failure is worth another attempt.
///
/// Transport errors and server-side 5xx responses qualify; client errors
/// (4xx) and decode failures do not.
fn is_retryable(error: &ApiError) -> bool {
    match error {
        ApiError::Transport(_) => true,
        ApiError::Status { status } => *status >= 500,
        _ => false,
    }
}

/// Validate that a base URL is usable: parseable, http(s), and with a host.
fn validate_base_url(base: &str) -> Result<(), ApiError> {
    let parsed = url::Url::parse(base).map_err(|error| ApiError::InvalidBaseUrl {
        url: base.to_string(),
        reason: error.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ApiError::InvalidBaseUrl {
            url: base.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    if parsed.host_str().is_none() {
        return Err(ApiError::InvalidBaseUrl {
            url: base.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::ContactMessagePayload;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PortfolioClient {
        PortfolioClient::new(ApiConfig::default().with_base_url(server.uri())).unwrap()
    }

    fn client_without_retries(server: &MockServer) -> PortfolioClient {
        let config = ApiConfig {
            fetch_retries: 0,
            ..ApiConfig::default().with_base_url(server.uri())
        };
        PortfolioClient::new(config).unwrap()
    }

    #[test]
    fn env_resolution_prefers_primary_variable() {
        temp_env::with_vars(
            [
                (BACKEND_URL_ENV, Some("https://api.example.com/")),
                (BACKEND_URL_FALLBACK_ENV, Some("https://legacy.example.com")),
            ],
            || {
                let config = ApiConfig::from_env();
                assert_eq!(config.base_url, "https://api.example.com");
            },
        );
    }

    #[test]
    fn env_resolution_falls_back_to_secondary_then_default() {
        temp_env::with_vars(
            [
                (BACKEND_URL_ENV, None::<&str>),
                (BACKEND_URL_FALLBACK_ENV, Some("https://legacy.example.com/")),
            ],
            || {
                assert_eq!(ApiConfig::from_env().base_url, "https://legacy.example.com");
            },
        );
        temp_env::with_vars(
            [(BACKEND_URL_ENV, None::<&str>), (BACKEND_URL_FALLBACK_ENV, None::<&str>)],
            || {
                assert_eq!(ApiConfig::from_env().base_url, DEFAULT_BASE_URL);
            },
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(PortfolioClient::new(ApiConfig::default().with_base_url("ftp://example.com")).is_err());
        assert!(PortfolioClient::new(ApiConfig::default().with_base_url("not a url")).is_err());
    }

    #[tokio::test]
    async fn fetch_decodes_portfolio_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PORTFOLIO_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "site": null,
                "projects": [{ "title": "Aurora Commerce", "order": 1 }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let content = client_for(&server).fetch_portfolio().await.unwrap();
        assert!(content.site.is_none());
        assert_eq!(content.projects.len(), 1);
        assert_eq!(content.projects[0].title, "Aurora Commerce");
    }

    #[tokio::test]
    async fn fetch_maps_non_success_to_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PORTFOLIO_PATH))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let error = client_without_retries(&server).fetch_portfolio().await.unwrap_err();
        assert_eq!(error.to_string(), "Request failed with status 404");
    }

    #[tokio::test]
    async fn fetch_retries_server_errors_up_to_the_bound() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PORTFOLIO_PATH))
            .respond_with(ResponseTemplate::new(503))
            .expect(3) // initial attempt + fetch_retries
            .mount(&server)
            .await;

        let error = client_for(&server).fetch_portfolio().await.unwrap_err();
        assert!(matches!(error, ApiError::Status { status: 503 }));
    }

    #[tokio::test]
    async fn fetch_does_not_retry_client_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PORTFOLIO_PATH))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let error = client_for(&server).fetch_portfolio().await.unwrap_err();
        assert!(matches!(error, ApiError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn contact_post_sends_json_payload_once() {
        let payload = ContactMessagePayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            project: "Engine".into(),
            message: "Hello".into(),
        };

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CONTACT_MESSAGES_PATH))
            .and(header("content-type", "application/json"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).post_contact_message(&payload).await.unwrap();
    }

    #[tokio::test]
    async fn contact_post_surfaces_server_detail_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CONTACT_MESSAGES_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({ "detail": "Email invalid" })))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .post_contact_message(&ContactMessagePayload::default())
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Email invalid");
    }

    #[tokio::test]
    async fn contact_post_falls_back_to_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CONTACT_MESSAGES_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
            .expect(1) // no automatic retry for submissions
            .mount(&server)
            .await;

        let error = client_for(&server)
            .post_contact_message(&ContactMessagePayload::default())
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Request failed with status 500");
    }
}
