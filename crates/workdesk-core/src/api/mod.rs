//! Thin HTTP client for the external workspace backend.
//!
//! Every data operation in Workdesk is a small JSON call to the backend's
//! REST API; nothing is cached, retried, or reconciled here (the backend
//! owns the data and its conflicts). `ApiClient` carries the base URL and a
//! configured `reqwest` client; each service file adds the calls for one
//! backend area:
//!
//! - notes / todos / projects + tasks: conventional CRUD
//! - chat: message forwarding and the model catalog
//! - search: basic, knowledge-base, and web search
//!
//! Most endpoints wrap payloads in a `{success, data, error, message}`
//! envelope; the few that do not (health, chat, web search) are parsed
//! directly. Backend-reported failures surface as [`ApiError::Backend`]
//! with the server's message, bare HTTP failures as [`ApiError::Status`].

mod chat;
mod notes;
mod projects;
mod search;
mod todos;

pub use chat::{ChatReply, DEFAULT_CHAT_MODEL};
pub use search::{KnowledgeBucket, KnowledgeResults, KnowledgeSearch, WebSearch, WebSearchHit};

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Response envelope used by most backend endpoints.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    error: Option<String>,
    message: Option<String>,
}

/// Error bodies are either an envelope or a bare `{"error": ...}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Backend health probe response (no envelope).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}

/// HTTP client for the workspace backend.
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Client with the default 30 second timeout.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        // Validate eagerly so a bad config fails at construction, not on
        // the first request.
        Url::parse(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Backend health probe.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_raw("/api/health").await
    }

    // ── Request plumbing ─────────────────────────────────────────────

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!("{}{path}", self.base))?)
    }

    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.http.get(self.endpoint(path)?).send().await?;
        Self::unwrap_data(resp).await
    }

    pub(crate) async fn post_data<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.http.post(self.endpoint(path)?).json(body).send().await?;
        Self::unwrap_data(resp).await
    }

    pub(crate) async fn put_data<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.http.put(self.endpoint(path)?).json(body).send().await?;
        Self::unwrap_data(resp).await
    }

    /// DELETE endpoints acknowledge without a payload.
    pub(crate) async fn delete_ack(&self, path: &str) -> Result<(), ApiError> {
        let resp = self.http.delete(self.endpoint(path)?).send().await?;
        let resp = Self::check_status(resp).await?;
        let envelope: ApiEnvelope<serde_json::Value> = resp.json().await?;
        if envelope.success {
            Ok(())
        } else {
            Err(ApiError::Backend {
                message: backend_message(envelope.error, envelope.message),
            })
        }
    }

    /// GET an endpoint that answers without the envelope.
    pub(crate) async fn get_raw<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.http.get(self.endpoint(path)?).send().await?;
        let resp = Self::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// POST to an endpoint that answers without the envelope.
    pub(crate) async fn post_raw<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.http.post(self.endpoint(path)?).json(body).send().await?;
        let resp = Self::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    async fn unwrap_data<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let resp = Self::check_status(resp).await?;
        let envelope: ApiEnvelope<T> = resp.json().await?;
        if !envelope.success {
            return Err(ApiError::Backend {
                message: backend_message(envelope.error, envelope.message),
            });
        }
        envelope.data.ok_or(ApiError::MissingData)
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if let Ok(body) = resp.json::<ErrorBody>().await {
            if let Some(message) = body.error.or(body.message) {
                return Err(ApiError::Backend { message });
            }
        }
        Err(ApiError::Status { status })
    }
}

fn backend_message(error: Option<String>, message: Option<String>) -> String {
    error
        .or(message)
        .unwrap_or_else(|| "unspecified backend failure".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_validated_and_trimmed() {
        let client = ApiClient::new("http://localhost:5001/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5001");
        assert!(ApiClient::new("not a url").is_err());
    }

    #[test]
    fn endpoint_concatenates_paths() {
        let client = ApiClient::new("http://localhost:5001").unwrap();
        let url = client.endpoint("/api/notes/3").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5001/api/notes/3");
    }
}
