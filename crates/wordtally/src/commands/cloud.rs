//! Cloud command: top words with layout attributes.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};
use wordtally_core::config::Config;
use wordtally_core::{RandomSource, SeededRandom, ThreadRandom, WordCloudReport};

use super::InputArgs;

/// Arguments for the `cloud` subcommand.
#[derive(Args, Debug, Default)]
pub struct CloudArgs {
    /// Input selection.
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of words in the ranked list (overrides config; default 20).
    #[arg(long)]
    pub top: Option<usize>,

    /// Number of words in the cloud (overrides config; default 100).
    #[arg(long)]
    pub cloud_words: Option<usize>,

    /// Seed for reproducible rotation and color.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Build a word cloud and print it.
#[instrument(name = "cmd_cloud", skip_all, fields(input = %args.input.label()))]
pub fn cmd_cloud(
    args: CloudArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(seed = ?args.seed, "executing cloud command");

    let session = args.input.load_session(config, max_input)?;
    let mut rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::default()),
    };
    let report = WordCloudReport::build_with_limits(
        session.table(),
        session.stop_words(),
        args.top.unwrap_or_else(|| config.top_words_or_default()),
        args.cloud_words
            .unwrap_or_else(|| config.cloud_words_or_default()),
        rng.as_mut(),
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.input.label().bold());
    println!(
        "  {} {} tokens, {} unique ({})",
        "Counted:".cyan(),
        report.total_tokens,
        report.unique_words,
        report.locale,
    );

    if report.cloud.is_empty() {
        println!("\n  {}", "no countable words".yellow());
        return Ok(());
    }

    println!();
    println!("{}", "Cloud".bold().underline());
    for token in &report.cloud {
        println!(
            "  {:<20} {:>4}  size {:>2}px  opacity {:.2}  rotate {:>6.1}°  {}",
            token.word,
            token.count,
            token.font_size,
            token.opacity,
            token.rotation,
            token.color.dimmed(),
        );
    }

    println!();
    println!("{}", "Top words".bold().underline());
    for (rank, word) in report.top_words.iter().enumerate() {
        println!("  {:>3}. {} {}", rank + 1, word.word, word.count.green());
    }

    Ok(())
}
