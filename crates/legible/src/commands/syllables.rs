//! Syllables command: per-word syllable estimates.

use anyhow::Context;
use clap::Args;
use legible_core::config::Config;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// Words to count.
    #[arg(required = true, value_name = "WORD")]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct WordCount {
    word: String,
    syllables: usize,
}

/// Print the syllable count of each word, honoring configured pronunciations.
#[instrument(name = "cmd_syllables", skip_all, fields(words = args.words.len()))]
pub fn cmd_syllables(args: SyllablesArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let counter = config
        .syllable_counter()
        .context("invalid pronunciation overrides")?;
    debug!(overrides = counter.override_count(), "executing syllables command");

    let counts: Vec<WordCount> = args
        .words
        .into_iter()
        .map(|word| WordCount {
            syllables: counter.count(&word),
            word,
        })
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        let width = counts.iter().map(|c| c.word.len()).max().unwrap_or(0);
        for c in &counts {
            println!("{:<width$}  {}", c.word.bold(), c.syllables);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> SyllablesArgs {
        SyllablesArgs {
            words: words.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn counts_words() {
        assert!(cmd_syllables(args(&["privacy", "policy"]), false, &Config::default()).is_ok());
    }

    #[test]
    fn json_output_succeeds() {
        assert!(cmd_syllables(args(&["the"]), true, &Config::default()).is_ok());
    }

    #[test]
    fn zero_override_is_rejected() {
        let mut config = Config::default();
        config.pronunciations.insert("gdpr".to_string(), 0);
        assert!(cmd_syllables(args(&["gdpr"]), false, &config).is_err());
    }
}
