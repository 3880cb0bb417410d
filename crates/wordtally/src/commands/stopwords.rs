//! Stopwords command: list the exclusions in effect.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};
use wordtally_core::config::Config;
use wordtally_core::{Locale, StopWordsReport};

/// Arguments for the `stopwords` subcommand.
#[derive(Args, Debug, Default)]
pub struct StopwordsArgs {
    /// Locale to list (overrides config).
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// Show only the built-in words, ignoring configured extras.
    #[arg(long)]
    pub defaults_only: bool,
}

/// Print the default and configured stop words.
#[instrument(name = "cmd_stopwords", skip_all)]
pub fn cmd_stopwords(
    args: StopwordsArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(
        locale = ?args.locale,
        defaults_only = args.defaults_only,
        "executing stopwords command"
    );

    let report = if args.defaults_only {
        StopWordsReport::for_locale(args.locale.or(config.locale).unwrap_or_default())
    } else {
        let set = config
            .stop_word_set(args.locale)
            .context("invalid stop_words in configuration")?;
        StopWordsReport::from(&set)
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "Locale".dimmed(), report.locale.bold());
    println!("{}: {}", "Defaults".cyan(), report.defaults.join(" "));
    if report.custom.is_empty() {
        println!("{}: {}", "Custom".cyan(), "(none)".dimmed());
    } else {
        println!("{}: {}", "Custom".cyan(), report.custom.join(" "));
    }

    Ok(())
}
