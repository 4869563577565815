use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    domain::{Event, Post, Professional, SearchParams},
    protocol::{Collection, CollectionResponse, ONLY_FUTURE_EVENTS},
};
use tracing::{debug, warn};
use url::{form_urlencoded, Url};

use crate::error::NetworkError;

/// Read side of the backend API used by the orchestrator.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn professionals(&self, params: &SearchParams)
        -> Result<Vec<Professional>, NetworkError>;
    async fn events(&self) -> Result<Vec<Event>, NetworkError>;
    async fn posts(&self) -> Result<Vec<Post>, NetworkError>;
}

/// Thin GET-and-parse adapter over the backend's collection endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Builds `base_url + path` with the non-empty query pairs attached.
    pub fn collection_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, NetworkError> {
        let raw = format!("{}{path}", self.base_url);
        let mut url = Url::parse(&raw).map_err(|source| NetworkError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;
        let encoded = encode_query(query);
        url.set_query((!encoded.is_empty()).then_some(encoded.as_str()));
        Ok(url)
    }

    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<CollectionResponse<T>, NetworkError> {
        let url = self.collection_url(path, query)?;
        debug!(%url, "fetching collection");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "collection endpoint returned non-success status");
        }
        let body = response.bytes().await?;
        Ok(CollectionResponse::from_json_slice(&body)?)
    }
}

#[async_trait]
impl DirectoryApi for ApiClient {
    async fn professionals(
        &self,
        params: &SearchParams,
    ) -> Result<Vec<Professional>, NetworkError> {
        let response = self
            .fetch_collection(Collection::Professionals.path(), &params.query_pairs())
            .await?;
        Ok(response.items)
    }

    async fn events(&self) -> Result<Vec<Event>, NetworkError> {
        let response = self
            .fetch_collection(Collection::Events.path(), &[ONLY_FUTURE_EVENTS])
            .await?;
        Ok(response.items)
    }

    async fn posts(&self) -> Result<Vec<Post>, NetworkError> {
        let response = self
            .fetch_collection(Collection::Posts.path(), &[])
            .await?;
        Ok(response.items)
    }
}

fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

// Spaces go out as %20 rather than the form-encoding '+'; a literal '+' is
// already escaped to %2B by this point.
fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
