//! HTTP client for the remote word service.

use super::{ProviderError, WordProvider};
use crate::config::ProviderConfig;
use crate::core::Word;
use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

const WORD_PATH: &str = "api/wordie/word";
const RESTART_PATH: &str = "api/wordie/restart";

/// Body of `GET /api/wordie/word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResponse {
    /// The target word, in whatever case the service uses.
    pub word: String,
}

/// Body of `POST /api/wordie/restart`.
///
/// The service does not document this shape, so unknown fields are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestartResponse {
    /// Optional human-readable status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Every other field of the response object.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Word provider backed by the HTTP word service.
#[derive(Debug, Clone)]
pub struct HttpWordProvider {
    client: reqwest::Client,
    word_url: Url,
    restart_url: Url,
}

impl HttpWordProvider {
    /// Creates a provider for the service at `config.base_url()`.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Transport` if the HTTP client cannot be built
    /// or the endpoint URLs cannot be derived from the base URL.
    #[instrument(skip_all, fields(base_url = %config.base_url()))]
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        let word_url = join(config.base_url(), WORD_PATH)?;
        let restart_url = join(config.base_url(), RESTART_PATH)?;
        debug!(%word_url, %restart_url, "Word provider configured");

        Ok(Self {
            client,
            word_url,
            restart_url,
        })
    }

    /// Calls the restart endpoint.
    ///
    /// The game itself never uses this; a new game is always a fresh word fetch.
    ///
    /// # Errors
    ///
    /// Returns a `ProviderError` on transport failure, non-success status, or
    /// a body that is not a JSON object.
    #[instrument(skip(self))]
    pub async fn restart(&self) -> Result<RestartResponse, ProviderError> {
        info!("Requesting restart");

        let response = self
            .client
            .post(self.restart_url.clone())
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(RestartResponse::default());
        }

        serde_json::from_str(&body).map_err(|e| ProviderError::Decode {
            message: e.to_string(),
        })
    }

    /// URL of the word endpoint.
    #[must_use]
    pub const fn word_url(&self) -> &Url {
        &self.word_url
    }
}

#[async_trait]
impl WordProvider for HttpWordProvider {
    #[instrument(skip(self))]
    async fn fetch_word(&self) -> Result<Word, ProviderError> {
        debug!(url = %self.word_url, "Fetching word");

        let response = self.client.get(self.word_url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(code = status.as_u16(), "Word fetch rejected");
            return Err(ProviderError::Status {
                code: status.as_u16(),
            });
        }

        let body: WordResponse = response.json().await?;
        let word = Word::new(&body.word).map_err(|detail| {
            warn!(word = %body.word, %detail, "Unplayable word from service");
            ProviderError::InvalidWord {
                word: body.word.clone(),
                detail,
            }
        })?;

        info!("Word fetched");
        Ok(word)
    }
}

fn join(base: &Url, path: &str) -> Result<Url, ProviderError> {
    base.join(path).map_err(|e| ProviderError::Transport {
        message: format!("cannot build URL from {base} and {path}: {e}"),
    })
}
