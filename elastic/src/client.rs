use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{query::SearchBody, response::SearchResponse, ElasticUrl};

/// Client for an Elasticsearch-compatible engine. Holds one reusable
/// `reqwest::Client`; clone freely.
#[derive(Clone)]
pub struct ElasticClient {
    client: reqwest::Client,
    base_url: ElasticUrl,
    api_key: Option<String>,
}

impl ElasticClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: ElasticUrl::from(base_url),
            api_key,
        }
    }

    /// Checks that the engine answers at all. Used once at startup.
    pub async fn ping(&self) -> Result<(), ElasticFetchError> {
        let resp = self
            .request(&self.base_url)
            .send()
            .await
            .map_err(|e| ElasticFetchError::RequestError(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ElasticFetchError::StatusError(resp.status().as_u16()));
        }

        Ok(())
    }

    /// Runs the search body against the given index and decodes the hit
    /// sources as `T`. The engine accepts a GET with a JSON body.
    pub async fn search<T: DeserializeOwned>(
        &self,
        index: &str,
        body: &SearchBody,
    ) -> Result<SearchResponse<T>, ElasticFetchError> {
        let url = self.base_url.append_path(index).append_path("_search");
        tracing::debug!("searching {}", url.as_ref());

        let resp = self
            .request(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ElasticFetchError::RequestError(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ElasticFetchError::StatusError(resp.status().as_u16()));
        }

        resp.json::<SearchResponse<T>>().await.map_err(|e| {
            ElasticFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    fn request(&self, url: &ElasticUrl) -> reqwest::RequestBuilder {
        let req = self.client.get(url.as_ref());
        match &self.api_key {
            Some(key) => req.header("Authorization", format!("ApiKey {}", key)),
            None => req,
        }
    }
}

#[derive(Error, Debug)]
pub enum ElasticFetchError {
    #[error("RequestError: {0}")]
    RequestError(String),
    #[error("StatusError: {0}")]
    StatusError(u16),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}
