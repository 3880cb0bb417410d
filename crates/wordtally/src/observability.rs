//! Logging setup: human-readable stderr plus optional JSONL log files.
//!
//! Filter precedence: `RUST_LOG` > `-q`/`-v` flags > configured `log_level`.
//! File output goes to `WORDTALLY_LOG_PATH` if set, otherwise to a daily
//! rolling file in `WORDTALLY_LOG_DIR`, the configured `log_dir`, or the
//! platform data directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const ENV_LOG_PATH: &str = "WORDTALLY_LOG_PATH";
const ENV_LOG_DIR: &str = "WORDTALLY_LOG_DIR";
const LOG_FILE_PREFIX: &str = "wordtally";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where log files should go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact file to append to. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily rolling files.
    pub log_dir: Option<PathBuf>,
    /// Platform fallback directory; failures to use it are ignored.
    pub fallback_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log locations from the environment, then `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(ENV_LOG_PATH).map(PathBuf::from);
        let log_dir = std::env::var_os(ENV_LOG_DIR)
            .map(PathBuf::from)
            .or(config_log_dir);
        let fallback_dir = wordtally_core::config::user_data_local_dir()
            .map(|dir| dir.join("logs").into_std_path_buf());
        Self {
            log_path,
            log_dir,
            fallback_dir,
        }
    }

    fn appender(&self) -> anyhow::Result<Option<RollingFileAppender>> {
        if let Some(ref path) = self.log_path {
            return exact_file_appender(path).map(Some);
        }
        if let Some(ref dir) = self.log_dir {
            return rolling_appender(dir).map(Some);
        }
        Ok(self
            .fallback_dir
            .as_deref()
            .and_then(|dir| rolling_appender(dir).ok()))
    }
}

fn exact_file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

fn rolling_appender(dir: &Path) -> anyhow::Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(dir)
        .with_context(|| format!("failed to open log files in {}", dir.display()))
}

/// Filter directive implied by the CLI flags and configured level.
fn filter_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Build the log filter. `RUST_LOG` wins when it parses.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(quiet, verbose, config_level)))
}

/// Install the global subscriber.
///
/// Hold the returned guard for the life of the process; dropping it flushes
/// buffered file output.
pub fn init_observability(
    config: &ObservabilityConfig,
    env_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match config.appender()? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
