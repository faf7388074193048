//! Error types for the pokedex client
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing the expiring cache.
///
/// Lookups never fail: a missing or reaped key is a plain `None`.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The expiry interval must be longer than zero
    #[error("Invalid cache interval: {0:?} (must be greater than zero)")]
    InvalidInterval(Duration),
}

// == Fetch Error Enum ==
/// Errors surfaced by a fetch-or-cache lookup.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be completed or returned a non-success status
    #[error("Request failed for '{url}': {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be fully read
    #[error("Failed to read response body from '{url}': {source}")]
    BodyReadFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The resource name cannot be used as a single URL path segment
    #[error("Invalid resource name: '{name}'")]
    InvalidName { name: String },

    /// Cached or freshly fetched bytes did not match the expected record shape
    #[error("Failed to decode response from '{url}': {source}")]
    DecodeFailed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Returns the URL the failed lookup was made for, if one was built.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::RequestFailed { url, .. }
            | FetchError::BodyReadFailed { url, .. }
            | FetchError::DecodeFailed { url, .. } => Some(url),
            FetchError::InvalidName { .. } => None,
        }
    }
}

// == REPL Error Enum ==
/// Errors reported by interactive commands. None of them end the session.
#[derive(Error, Debug)]
pub enum ReplError {
    /// A command was invoked without its required argument
    #[error("command '{command}' requires argument ({what})")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    /// The underlying lookup failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing to the terminal failed; ends the session
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Aliases ==
pub type CacheResult<T> = std::result::Result<T, CacheError>;

pub type FetchResult<T> = std::result::Result<T, FetchError>;

pub type ReplResult<T> = std::result::Result<T, ReplError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_slice::<serde_json::Value>(b"{not json").unwrap_err()
    }

    #[test]
    fn test_invalid_interval_message() {
        let err = CacheError::InvalidInterval(Duration::ZERO);
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_decode_failed_carries_url() {
        let err = FetchError::DecodeFailed {
            url: "https://example.test/area/1".to_string(),
            source: decode_error(),
        };

        assert_eq!(err.url(), Some("https://example.test/area/1"));
        assert!(err.to_string().starts_with("Failed to decode response"));
    }

    #[test]
    fn test_repl_error_wraps_fetch_error() {
        let err: ReplError = FetchError::DecodeFailed {
            url: "u".to_string(),
            source: decode_error(),
        }
        .into();

        assert!(matches!(err, ReplError::Fetch(FetchError::DecodeFailed { .. })));
    }

    #[test]
    fn test_missing_argument_message() {
        let err = ReplError::MissingArgument {
            command: "explore",
            what: "location area name",
        };
        assert_eq!(
            err.to_string(),
            "command 'explore' requires argument (location area name)"
        );
    }
}
