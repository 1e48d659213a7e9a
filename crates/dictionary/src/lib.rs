use correction_api::{get_correction, CORRECTION_API_URL, DEFAULT_LANGUAGE};
use dictionary_api::{get_entries, DICTIONARY_API_URL};
pub use reqwest::StatusCode;
use thiserror::Error;

mod correction_api;
mod dictionary;
mod dictionary_api;
#[cfg(test)]
mod test_server;

pub use dictionary::{Phonetic, Word, WordDefinition, WordMeaning};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("request failed")]
    Fetch(#[source] reqwest::Error),
    #[error("could not read the response body")]
    Deserialize(#[source] reqwest::Error),
    #[error("request failed with status code: {}", .0.as_u16())]
    Status(StatusCode),
    #[error(transparent)]
    NotFound(NotFoundError),
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct NotFoundError {
    message: String,
}

impl NotFoundError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    /// Targets another deployment of the dictionary api, the word is appended as the last path segment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Every entry the service knows for the word, in the order it returned them
    pub async fn get_entries(&self, word: &str) -> Result<Vec<Word>, DictionaryError> {
        get_entries(&self.client, &self.base_url, word).await
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        self.get_entries(word)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                DictionaryError::NotFound(NotFoundError {
                    message: format!("No definitions found for {word}"),
                })
            })
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct CorrectionConfig {
    pub api_key: String,
    pub language: String,
    pub endpoint: String,
}

impl CorrectionConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: DEFAULT_LANGUAGE.to_owned(),
            endpoint: CORRECTION_API_URL.to_owned(),
        }
    }
}

pub struct Corrector {
    client: reqwest::Client,
    config: CorrectionConfig,
}

impl Corrector {
    pub fn new(config: CorrectionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Returns the corrected spelling, or the word itself when the service offers no correction
    pub async fn correct(&self, word: &str) -> Result<String, DictionaryError> {
        get_correction(&self.client, &self.config, word).await
    }
}
