use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::types::{GenreList, MovieList};
use crate::config::TmdbConfig;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("network error: {0}")]
    Network(String),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for UpstreamError {
    fn from(e: serde_json::Error) -> Self {
        UpstreamError::Decode(e.to_string())
    }
}

/// Access to the upstream movie metadata API.
///
/// Implementors only provide `get_json`; the typed endpoint calls are built
/// on top of it. A call succeeds only when upstream answered 200 with a JSON
/// body, everything else is an `UpstreamError`.
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, UpstreamError>;

    async fn genre_list(&self) -> Result<GenreList, UpstreamError> {
        let value = self.get_json("/genre/movie/list", &[]).await?;
        decode(value)
    }

    async fn search_movies(&self, query: &str) -> Result<MovieList, UpstreamError> {
        let value = self.get_json("/search/movie", &[("query", query)]).await?;
        decode(value)
    }

    async fn movie_details(&self, movie_id: i64) -> Result<Value, UpstreamError> {
        self.get_json(&format!("/movie/{}", movie_id), &[]).await
    }

    async fn recommendations(&self, movie_id: i64) -> Result<MovieList, UpstreamError> {
        let value = self
            .get_json(&format!("/movie/{}/recommendations", movie_id), &[])
            .await?;
        decode(value)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, UpstreamError> {
    Ok(serde_json::from_value(value)?)
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn fetch(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, UpstreamError> {
        let mut all_params = vec![("api_key", self.api_key.as_str())];
        all_params.extend_from_slice(params);

        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "TMDB request");

        let resp = self
            .client
            .get(&url)
            .query(&all_params)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        if resp.status() != reqwest::StatusCode::OK {
            return Err(UpstreamError::Status(resp.status().as_u16()));
        }

        resp.json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MovieApi for TmdbClient {
    async fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, UpstreamError> {
        let result = self.fetch(path, params).await;
        if let Err(ref e) = result {
            warn!(path = %path, error = %e, "TMDB request failed");
        }
        result
    }
}
