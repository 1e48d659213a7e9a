use std::collections::HashSet;
use std::io::{self, Write};

use dictionary::{Word, WordMeaning};
use thiserror::Error;

const MAX_DEFINITIONS: usize = 2;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("the dictionary returned no entries")]
    NoEntries,
    #[error("the first dictionary entry has no meanings")]
    NoMeanings,
    #[error("failed to write the report")]
    Io(#[from] io::Error),
}

/// Audio of every entry, then the meanings of the first entry only.
/// Nothing is written when the entries can't produce a report.
pub fn write_report(out: &mut impl Write, entries: &[Word]) -> Result<(), ReportError> {
    let first = entries.first().ok_or(ReportError::NoEntries)?;
    if first.meanings.is_empty() {
        return Err(ReportError::NoMeanings);
    }

    let mut seen = HashSet::new();
    for audio in entries.iter().flat_map(Word::audio_urls) {
        if seen.insert(audio) {
            writeln!(out, "Audio: {audio}")?;
        }
    }

    for meaning in &first.meanings {
        write_meaning(out, meaning)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_meaning(out: &mut impl Write, meaning: &WordMeaning) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Part of Speech: {}", meaning.part_of_speech)?;

    writeln!(out, "Definition(s):")?;
    for (index, definition) in meaning.definitions.iter().take(MAX_DEFINITIONS).enumerate() {
        writeln!(out, "{}. {}", index + 1, definition.definition)?;
    }

    // the example may come from a definition that wasn't listed
    let example = meaning
        .definitions
        .iter()
        .filter_map(|definition| definition.example.as_deref())
        .find(|example| example.len() > 1);
    if let Some(example) = example {
        writeln!(out)?;
        writeln!(out, "Example: {example}")?;
    }

    if !meaning.synonyms.is_empty() {
        writeln!(out, "Synonym(s): {}", meaning.synonyms.join(", "))?;
    }
    if !meaning.antonyms.is_empty() {
        writeln!(out, "Antonym(s): {}", meaning.antonyms.join(", "))?;
    }
    Ok(())
}
