//! Info command: version and the analysis settings in effect.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};
use wordtally_core::config::{Config, ConfigSources};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

/// `info` output. Name and version sit at the top level of the JSON form.
#[derive(Serialize)]
struct InfoReport {
    name: &'static str,
    version: &'static str,
    config: EffectiveSettings,
}

#[derive(Serialize)]
struct EffectiveSettings {
    config_file: Option<String>,
    log_level: &'static str,
    locale: String,
    stop_words: Vec<String>,
    top_words: usize,
    cloud_words: usize,
    max_input_bytes: Option<usize>,
}

impl EffectiveSettings {
    fn resolve(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str(),
            locale: config.locale.unwrap_or_default().to_string(),
            stop_words: config.stop_words.clone().unwrap_or_default(),
            top_words: config.top_words_or_default(),
            cloud_words: config.cloud_words_or_default(),
            max_input_bytes: config.input_limit(),
        }
    }

    /// Label/value rows for the text view.
    fn rows(&self) -> Vec<(&'static str, String)> {
        let or_none = |words: &[String]| {
            if words.is_empty() {
                "(none)".to_string()
            } else {
                words.join(", ")
            }
        };
        vec![
            (
                "config",
                self.config_file
                    .clone()
                    .unwrap_or_else(|| "none loaded".to_string()),
            ),
            ("log level", self.log_level.to_string()),
            ("locale", self.locale.clone()),
            ("extra stop words", or_none(&self.stop_words)),
            ("top words", self.top_words.to_string()),
            ("cloud words", self.cloud_words.to_string()),
            (
                "input limit",
                self.max_input_bytes
                    .map_or_else(|| "disabled".to_string(), |max| format!("{max} bytes")),
            ),
        ]
    }
}

/// Print the version and effective analysis settings.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let report = InfoReport {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        config: EffectiveSettings::resolve(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", report.name.bold(), report.version.green());
    for (label, value) in report.config.rows() {
        println!("  {:<17} {value}", label.dimmed());
    }
    Ok(())
}
