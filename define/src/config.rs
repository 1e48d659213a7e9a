use clap::{ArgAction, Parser};
use dictionary::CorrectionConfig;

/// Look up a word: spelling correction, pronunciation audio, definitions, examples, synonyms and antonyms.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// The word to look up, asked for interactively when missing.
    /// Only ascii letters are accepted.
    #[arg(allow_hyphen_values = true)]
    pub word: Option<String>,

    /// Anything after the word is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// TextGears api key used by the spelling correction.
    #[arg(long, env = "TEXTGEARS_API", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Language of the spelling correction.
    #[arg(long, env = "DEFINE_LANGUAGE")]
    pub language: Option<String>,

    /// Spelling correction endpoint.
    #[arg(long, env = "DEFINE_CORRECTION_URL")]
    pub correction_url: Option<String>,

    /// Dictionary endpoint, the word is appended as the last path segment.
    #[arg(long, env = "DEFINE_DICTIONARY_URL")]
    pub dictionary_url: Option<String>,

    /// Look the word up as typed, without spelling correction.
    #[arg(long, default_value_t = false)]
    pub no_correct: bool,

    /// Print help. Long form only, `-h` is looked up like any other word.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version.
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub word: Option<String>,
    /// `None` when spelling correction is turned off
    pub correction: Option<CorrectionConfig>,
    pub dictionary_url: Option<String>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        if !args.ignored.is_empty() {
            tracing::debug!(ignored = ?args.ignored, "only the first word is looked up");
        }
        let correction = (!args.no_correct).then(|| {
            let defaults = CorrectionConfig::default();
            CorrectionConfig {
                api_key: args.api_key.unwrap_or(defaults.api_key),
                language: args.language.unwrap_or(defaults.language),
                endpoint: args.correction_url.unwrap_or(defaults.endpoint),
            }
        });
        Self {
            word: args.word,
            correction,
            dictionary_url: args.dictionary_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        Args::try_parse_from(std::iter::once("define").chain(args.iter().copied()))
            .unwrap()
            .into()
    }

    #[test]
    fn word_is_optional() {
        assert_eq!(config(&[]).word, None);
        assert_eq!(config(&["hello"]).word.as_deref(), Some("hello"));
    }

    #[test]
    fn flags_override_the_correction_defaults() {
        let config = config(&[
            "helo",
            "--api-key",
            "KEY",
            "--language",
            "en-US",
            "--correction-url",
            "http://localhost:1/correct",
        ]);
        let correction = config.correction.unwrap();
        assert_eq!(correction.api_key, "KEY");
        assert_eq!(correction.language, "en-US");
        assert_eq!(correction.endpoint, "http://localhost:1/correct");
    }

    #[test]
    fn no_correct_turns_correction_off() {
        let config = config(&["hello", "--no-correct", "--dictionary-url", "http://localhost:1"]);
        assert!(config.correction.is_none());
        assert_eq!(config.dictionary_url.as_deref(), Some("http://localhost:1"));
    }

    #[test]
    fn words_after_the_first_are_ignored() {
        let config = config(&["hello", "world", "-x"]);
        assert_eq!(config.word.as_deref(), Some("hello"));
        assert!(config.correction.is_some());
    }

    #[test]
    fn hyphenated_words_reach_the_validator() {
        assert_eq!(config(&["-hello"]).word.as_deref(), Some("-hello"));
        assert_eq!(config(&["-x"]).word.as_deref(), Some("-x"));
        assert_eq!(config(&["-h"]).word.as_deref(), Some("-h"));
        assert_eq!(config(&["--hello"]).word.as_deref(), Some("--hello"));
    }

    #[test]
    fn help_is_long_only() {
        let error = Args::try_parse_from(["define", "--help"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
