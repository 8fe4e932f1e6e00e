//! The memories API client.
//!
//! Three operations against the external backend:
//!
//! - `GET  {base}/names`            -> `["Alice", ...]`
//! - `GET  {base}/memories/{name}`  -> `[{id, date, note, years, months, days}, ...]`
//! - `POST {base}/memories/{name}`  -> new memory id (JSON), body form-encoded `{date, note}`
//!
//! The backend owns ordering (oldest-to-newest) and the precomputed age
//! fields; nothing is sorted or filtered here.

use reqwest::Client;
use tracing::{debug, warn};

use memories_core::{Memory, MemoryId, Name, NewMemory};

use crate::error::ApiError;

/// Client for the memories API, cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (absolute, no trailing slash
    /// required). The SPA resolves the page-relative `../api` against the
    /// document URL before constructing this.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// The resolved base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn names_url(&self) -> String {
        format!("{}/names", self.base_url)
    }

    fn memories_url(&self, name: &Name) -> String {
        format!("{}/memories/{name}", self.base_url)
    }

    /// Fetch the full list of known names, in backend order.
    pub async fn names(&self) -> Result<Vec<Name>, ApiError> {
        let url = self.names_url();
        debug!(%url, "fetching names");

        let response = self.http.get(&url).send().await?;
        Self::check_ok(response).await?.json().await.map_err(|e| {
            warn!(error = %e, "name list was not valid JSON");
            ApiError::Parse(e.to_string())
        })
    }

    /// Fetch `name`'s memories, oldest-to-newest, ages precomputed.
    pub async fn memories(&self, name: &Name) -> Result<Vec<Memory>, ApiError> {
        let url = self.memories_url(name);
        debug!(%url, "fetching memories");

        let response = self.http.get(&url).send().await?;
        Self::check_ok(response).await?.json().await.map_err(|e| {
            warn!(error = %e, "memory list was not valid JSON");
            ApiError::Parse(e.to_string())
        })
    }

    /// Create a memory for `name`. Returns the backend-assigned id of the
    /// new memory; a non-OK response surfaces as [`ApiError::Rejected`]
    /// with the backend's textual error body.
    pub async fn create_memory(
        &self,
        name: &Name,
        memory: &NewMemory,
    ) -> Result<MemoryId, ApiError> {
        let url = self.memories_url(name);
        debug!(%url, date = %memory.date, "creating memory");

        let response = self.http.post(&url).form(memory).send().await?;
        Self::check_ok(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Turn a non-OK response into [`ApiError::Rejected`], capturing the
    /// error body the backend sent.
    async fn check_ok(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), %body, "API rejected the request");
        Err(ApiError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.names_url(), "http://localhost:8080/api/names");
    }

    #[test]
    fn memory_urls_embed_the_name() {
        let client = ApiClient::new("http://localhost:8080/api");
        assert_eq!(
            client.memories_url(&Name::from("Alice")),
            "http://localhost:8080/api/memories/Alice"
        );
    }
}
