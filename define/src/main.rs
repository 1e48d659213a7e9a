use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dictionary::{Corrector, Dictionary};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Args, Config};
use lookup::{look_up, LookupError, SpellCorrector};
use utilities::input;

mod config;
mod lookup;
mod report;
mod utilities;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(Args::parse().into()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => exit_code_for(error),
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let word = match config.word {
        Some(word) => word,
        None => input("Enter one word: ").context("failed to read a word from stdin")?,
    };

    let corrector = config.correction.map(Corrector::new);
    let dict = match config.dictionary_url {
        Some(url) => Dictionary::with_base_url(url),
        None => Dictionary::new(),
    };

    let mut stdout = io::stdout().lock();
    look_up(
        &word,
        corrector.as_ref().map(|corrector| corrector as &dyn SpellCorrector),
        &dict,
        &mut stdout,
    )
    .await?;
    Ok(())
}

fn exit_code_for(error: anyhow::Error) -> ExitCode {
    match error.downcast_ref::<LookupError>() {
        Some(LookupError::InvalidWord) => {
            println!("{error}");
            ExitCode::from(1)
        }
        Some(lookup) => {
            tracing::error!("{error:#}");
            ExitCode::from(lookup.exit_code())
        }
        None => {
            tracing::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
