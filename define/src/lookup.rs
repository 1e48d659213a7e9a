use std::io::{self, Write};

use async_trait::async_trait;
use dictionary::{Corrector, Dictionary, DictionaryError, Word};
use thiserror::Error;

use crate::report::{write_report, ReportError};
use crate::utilities::is_valid_word;

#[async_trait]
pub trait SpellCorrector: Send + Sync {
    async fn correct(&self, word: &str) -> Result<String, DictionaryError>;
}

#[async_trait]
pub trait EntrySource: Send + Sync {
    async fn get_entries(&self, word: &str) -> Result<Vec<Word>, DictionaryError>;
}

#[async_trait]
impl SpellCorrector for Corrector {
    async fn correct(&self, word: &str) -> Result<String, DictionaryError> {
        Corrector::correct(self, word).await
    }
}

#[async_trait]
impl EntrySource for Dictionary {
    async fn get_entries(&self, word: &str) -> Result<Vec<Word>, DictionaryError> {
        Dictionary::get_entries(self, word).await
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Please enter string only!")]
    InvalidWord,
    #[error("spelling correction failed")]
    Correction(#[source] DictionaryError),
    #[error("dictionary lookup failed")]
    Dictionary(#[source] DictionaryError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to write to stdout")]
    Output(#[from] io::Error),
}

impl LookupError {
    pub fn exit_code(&self) -> u8 {
        match self {
            LookupError::InvalidWord => 1,
            LookupError::Correction(_) => 2,
            LookupError::Dictionary(_) => 3,
            LookupError::Report(ReportError::NoEntries | ReportError::NoMeanings) => 4,
            LookupError::Report(ReportError::Io(_)) | LookupError::Output(_) => 1,
        }
    }
}

/// Validates, corrects and defines `input`, writing the report to `out`.
/// The correction step is skipped without a corrector.
pub async fn look_up(
    input: &str,
    corrector: Option<&dyn SpellCorrector>,
    source: &dyn EntrySource,
    out: &mut impl Write,
) -> Result<(), LookupError> {
    if !is_valid_word(input) {
        return Err(LookupError::InvalidWord);
    }

    let word = match corrector {
        Some(corrector) => corrector
            .correct(input)
            .await
            .map_err(LookupError::Correction)?,
        None => input.to_owned(),
    };
    if word != input {
        tracing::info!(input, corrected = %word, "spelling corrected");
    }
    writeln!(out, "Searching for: {word}")?;

    let entries = source
        .get_entries(&word.to_uppercase())
        .await
        .map_err(LookupError::Dictionary)?;
    tracing::debug!(entries = entries.len(), "received dictionary entries");
    write_report(out, &entries)?;
    Ok(())
}
