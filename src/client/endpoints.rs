//! Typed helpers for the three endpoint shapes the REPL uses.

use reqwest::Url;
use tracing::debug;

use super::PokeApiClient;
use crate::error::{FetchError, FetchResult};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

impl PokeApiClient {
    /// URL of the first `location-area` page holding `page_size` areas.
    pub fn first_location_page_url(&self, page_size: u32) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, page_size
        )
    }

    /// Fetches one page of the location area listing.
    ///
    /// `url` is either [`first_location_page_url`](Self::first_location_page_url)
    /// or a `next`/`previous` cursor from an earlier page.
    pub async fn location_areas(&self, url: &str) -> FetchResult<LocationAreaPage> {
        debug!(url = %url, "fetching location area page");
        self.fetch(url).await
    }

    /// Fetches the encounters of the named location area.
    pub async fn location_area(&self, name: &str) -> FetchResult<LocationAreaDetail> {
        let url = self.resource_url("location-area", name)?;
        self.fetch(&url).await
    }

    /// Fetches the detail record of the named creature.
    pub async fn pokemon(&self, name: &str) -> FetchResult<Pokemon> {
        let url = self.resource_url("pokemon", name)?;
        self.fetch(&url).await
    }

    /// Builds `{base}/{collection}/{name}` with `name` percent-encoded as a
    /// single path segment, so `/`, `?` and `#` cannot change the resource.
    ///
    /// # Errors
    /// Returns [`FetchError::InvalidName`] for empty, `.` and `..` names.
    pub fn resource_url(&self, collection: &str, name: &str) -> FetchResult<String> {
        if matches!(name, "" | "." | "..") {
            return Err(FetchError::InvalidName {
                name: name.to_string(),
            });
        }

        let Ok(mut url) = Url::parse(&self.base_url) else {
            // An unparseable base fails at request time as RequestFailed
            return Ok(format!("{}/{}/{}", self.base_url, collection, name));
        };

        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().push(collection).push(name);
            }
            Err(()) => return Ok(format!("{}/{}/{}", self.base_url, collection, name)),
        }

        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use crate::cache::ExpiringCache;

    fn client(base: &str) -> PokeApiClient {
        let cache = Arc::new(ExpiringCache::new(Duration::from_secs(60)).unwrap());
        PokeApiClient::new(cache, base).unwrap()
    }

    #[tokio::test]
    async fn test_resource_url_plain_name() {
        let client = client("https://pokeapi.co/api/v2");

        assert_eq!(
            client.resource_url("pokemon", "pikachu").unwrap(),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[tokio::test]
    async fn test_resource_url_base_without_path() {
        let client = client("http://127.0.0.1:8080");

        assert_eq!(
            client.resource_url("location-area", "canalave-city-area").unwrap(),
            "http://127.0.0.1:8080/location-area/canalave-city-area"
        );
    }

    #[tokio::test]
    async fn test_resource_url_encodes_reserved_characters() {
        let client = client("https://pokeapi.co/api/v2");

        assert_eq!(
            client.resource_url("location-area", "../pokemon/ditto").unwrap(),
            "https://pokeapi.co/api/v2/location-area/..%2Fpokemon%2Fditto"
        );
        assert_eq!(
            client.resource_url("pokemon", "a?b").unwrap(),
            "https://pokeapi.co/api/v2/pokemon/a%3Fb"
        );
        assert_eq!(
            client.resource_url("pokemon", "a#b").unwrap(),
            "https://pokeapi.co/api/v2/pokemon/a%23b"
        );
    }

    #[tokio::test]
    async fn test_resource_url_rejects_dot_names() {
        let client = client("https://pokeapi.co/api/v2");

        for name in ["", ".", ".."] {
            assert!(matches!(
                client.resource_url("pokemon", name),
                Err(FetchError::InvalidName { .. })
            ));
        }
    }
}
