/// HTTP client for the worker API
///
/// Thin typed wrapper over the REST endpoints. Error responses are decoded from
/// their `{ "error": ... }` body.

use crate::{
    api::{DeleteResponse, ErrorResponse},
    client::ClientError,
    config::ClientConfig,
    registry::{Worker, WorkerFields},
};
use serde::de::DeserializeOwned;

/// Typed handle on a running worker API
#[derive(Debug, Clone)]
pub struct WorkerApi {
    http: reqwest::Client,
    base_url: String,
}

impl WorkerApi {
    /// Create a client for the API at `base_url` (e.g. "http://localhost:3001")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /workers
    pub async fn get_all_workers(&self) -> Result<Vec<Worker>, ClientError> {
        let response = self.http.get(self.url("/workers")).send().await?;
        decode(response).await
    }

    /// GET /workers/{id}
    pub async fn get_worker(&self, id: i64) -> Result<Worker, ClientError> {
        let response = self
            .http
            .get(self.url(&format!("/workers/{}", id)))
            .send()
            .await?;
        decode(response).await
    }

    /// POST /workers
    pub async fn add_worker(&self, fields: &WorkerFields) -> Result<Worker, ClientError> {
        let response = self
            .http
            .post(self.url("/workers"))
            .json(fields)
            .send()
            .await?;
        decode(response).await
    }

    /// PUT /workers/{id}
    pub async fn update_worker(
        &self,
        id: i64,
        fields: &WorkerFields,
    ) -> Result<Worker, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/workers/{}", id)))
            .json(fields)
            .send()
            .await?;
        decode(response).await
    }

    /// DELETE /workers/{id}
    pub async fn delete_worker(&self, id: i64) -> Result<DeleteResponse, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/workers/{}", id)))
            .send()
            .await?;
        decode(response).await
    }

    /// GET /workers/search?searchTerm=...
    pub async fn search_workers(&self, term: &str) -> Result<Vec<Worker>, ClientError> {
        let response = self
            .http
            .get(self.url("/workers/search"))
            .query(&[("searchTerm", term)])
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string(),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
