//! Analyze command: ranked word frequencies.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};
use wordtally_core::FrequencyReport;
use wordtally_core::config::Config;

use super::InputArgs;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Input selection.
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of words to list (overrides config; default 20).
    #[arg(long, conflicts_with = "all")]
    pub top: Option<usize>,

    /// List every counted word.
    #[arg(long)]
    pub all: bool,
}

/// Count word frequencies and print them ranked.
#[instrument(name = "cmd_analyze", skip_all, fields(input = %args.input.label()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(top = ?args.top, all = args.all, "executing analyze command");

    let session = args.input.load_session(config, max_input)?;
    let limit = if args.all {
        None
    } else {
        Some(args.top.unwrap_or_else(|| config.top_words_or_default()))
    };
    let report = FrequencyReport::build(session.table(), session.stop_words(), limit);

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
    if !report.custom_stop_words.is_empty() {
        println!(
            "  {} {}",
            "Excluded:".cyan(),
            report.custom_stop_words.join(", ")
        );
    }

    if report.words.is_empty() {
        println!("\n  {}", "no countable words".yellow());
        return Ok(());
    }

    println!();
    let width = report
        .words
        .iter()
        .map(|w| w.word.chars().count())
        .max()
        .unwrap_or(0);
    for (rank, word) in report.words.iter().enumerate() {
        let pad = width - word.word.chars().count();
        println!(
            "  {:>3}. {}{}  {}",
            (rank + 1).dimmed(),
            word.word.bold(),
            " ".repeat(pad),
            word.count.green(),
        );
    }

    Ok(())
}
