//! Client Module
//!
//! Fetch-or-cache access to the PokeAPI. Full request URLs double as cache
//! keys, and raw response bodies are cached before they are decoded.

mod endpoints;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::ExpiringCache;
use crate::error::{FetchError, FetchResult};

/// User agent for API requests.
const USER_AGENT_VALUE: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// PokeAPI client backed by an [`ExpiringCache`].
///
/// Two concurrent misses on the same URL both go to the network; the later
/// `put` wins.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    /// HTTP client.
    http: reqwest::Client,

    /// Response cache shared with any other holder of the `Arc`.
    cache: Arc<ExpiringCache>,

    /// API root, without a trailing slash.
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(cache: Arc<ExpiringCache>, base_url: impl Into<String>) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()?;

        Ok(Self::with_http(http, cache, base_url))
    }

    /// Creates a client around an existing HTTP client.
    pub fn with_http(
        http: reqwest::Client,
        cache: Arc<ExpiringCache>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            cache,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    /// Returns the record at `url`, from the cache when possible.
    ///
    /// On a miss the body is fetched and cached as received, then decoded. A
    /// decode failure therefore leaves the cached bytes in place.
    ///
    /// # Errors
    /// - [`FetchError::RequestFailed`] if the request fails or the status is not a success
    /// - [`FetchError::BodyReadFailed`] if the body cannot be read
    /// - [`FetchError::DecodeFailed`] if the bytes are not a `T`
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        if let Some(bytes) = self.cache.get(url).await {
            debug!(url = %url, bytes = bytes.len(), "cache hit");
            return decode(url, &bytes);
        }

        debug!(url = %url, "cache miss, fetching");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| {
                warn!(url = %url, error = %source, "request failed");
                FetchError::RequestFailed {
                    url: url.to_string(),
                    source,
                }
            })?;

        let body = response.bytes().await.map_err(|source| {
            warn!(url = %url, error = %source, "failed to read response body");
            FetchError::BodyReadFailed {
                url: url.to_string(),
                source,
            }
        })?;

        self.cache.put(url, body.to_vec()).await;

        decode(url, &body)
    }
}

fn decode<T: DeserializeOwned>(url: &str, bytes: &[u8]) -> FetchResult<T> {
    serde_json::from_slice(bytes).map_err(|source| {
        warn!(url = %url, error = %source, "failed to decode response");
        FetchError::DecodeFailed {
            url: url.to_string(),
            source,
        }
    })
}
