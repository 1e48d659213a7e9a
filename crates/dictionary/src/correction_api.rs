// https://textgears.com/api - the key goes in the query string, a bad key still answers 200

use serde_json::Value;

use crate::{CorrectionConfig, DictionaryError};

pub(crate) const CORRECTION_API_URL: &str = "https://api.textgears.com/correct";
pub(crate) const DEFAULT_LANGUAGE: &str = "en-GB";

pub(crate) async fn get_correction(
    client: &reqwest::Client,
    config: &CorrectionConfig,
    word: &str,
) -> Result<String, DictionaryError> {
    tracing::debug!(word, language = %config.language, "requesting spelling correction");
    let res: reqwest::Response = client
        .get(&config.endpoint)
        .query(&[
            ("text", word),
            ("language", config.language.as_str()),
            ("key", config.api_key.as_str()),
        ])
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    tracing::debug!(%status, "correction api responded");
    if !status.is_success() {
        return Err(DictionaryError::Status(status));
    }
    let body = res
        .json::<Value>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    Ok(corrected_or_original(&body, word))
}

fn corrected_or_original(body: &Value, word: &str) -> String {
    match body.pointer("/response/corrected").and_then(Value::as_str) {
        Some(corrected) => corrected.to_owned(),
        None => {
            tracing::debug!(word, "no correction in the response, keeping the word as typed");
            word.to_owned()
        }
    }
}
