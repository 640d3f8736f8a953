//! Word provider abstraction
//!
//! The game never picks its own words. A `WordProvider` hands out one target
//! word per session; `HttpWordProvider` talks to the remote word service.

mod http;

pub use http::{HttpWordProvider, RestartResponse, WordResponse};

use crate::core::{Word, WordError};
use async_trait::async_trait;
use derive_more::{Display, Error};

/// Source of target words.
#[async_trait]
pub trait WordProvider: Send + Sync {
    /// Fetches a fresh target word.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` on transport failure, non-success status,
    /// malformed body, or a word that is not five letters.
    async fn fetch_word(&self) -> Result<Word, ProviderError>;
}

/// Word provider failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ProviderError {
    /// Network or connection failure.
    #[display("Transport error: {message}")]
    Transport {
        /// Description from the HTTP client.
        message: String,
    },
    /// The request exceeded the configured timeout.
    #[display("Request timed out")]
    Timeout,
    /// The service answered with a non-success status.
    #[display("Server returned status {code}")]
    Status {
        /// HTTP status code.
        code: u16,
    },
    /// The body was missing or not the expected JSON.
    #[display("Malformed response: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },
    /// The service sent something that is not a playable word.
    #[display("Unplayable word '{word}': {detail}")]
    InvalidWord {
        /// Raw word as received.
        word: String,
        /// Why it was rejected.
        detail: WordError,
    },
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::Status {
                code: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}
