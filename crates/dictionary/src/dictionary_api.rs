// https://dictionaryapi.dev/ - free, no key, answers 404 with a json body for unknown words

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{DictionaryError, NotFoundError, Word};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Deserialize)]
struct NoDefinitions {
    message: Option<String>,
}

pub(crate) async fn get_entries(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Vec<Word>, DictionaryError> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), word);
    tracing::debug!(%url, "looking up definitions");
    let res: reqwest::Response = client.get(&url).send().await.map_err(DictionaryError::Fetch)?;
    let status = res.status();
    tracing::debug!(%status, "dictionary api responded");
    if status == StatusCode::NOT_FOUND {
        let message = res
            .json::<NoDefinitions>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("No definitions found for {word}"));
        return Err(DictionaryError::NotFound(NotFoundError { message }));
    }
    if !status.is_success() {
        return Err(DictionaryError::Status(status));
    }
    res.json::<Vec<Word>>()
        .await
        .map_err(DictionaryError::Deserialize)
}
