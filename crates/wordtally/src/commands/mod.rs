//! Command implementations.

use std::io::Read;

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use tracing::debug;
use wordtally_core::config::Config;
use wordtally_core::{Locale, Session, SourceKind};

pub mod analyze;
pub mod cloud;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stopwords;

/// Input selection shared by `analyze` and `cloud`.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// File to read. Omit or pass `-` to read stdin.
    pub file: Option<Utf8PathBuf>,

    /// How to interpret the input.
    #[arg(long, value_enum, default_value_t)]
    pub source: SourceKind,

    /// Locale for default stop words (overrides config).
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    /// Extra words to exclude (repeatable or comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

impl InputArgs {
    /// Label for logs and headings.
    pub fn label(&self) -> &str {
        match self.file {
            Some(ref path) if path.as_str() != "-" => path.as_str(),
            _ => "<stdin>",
        }
    }

    /// Read the input and build an analyzed session.
    ///
    /// Exclusions come from config first, then `--exclude`. Fails when the
    /// prepared text has no content.
    pub fn load_session(
        &self,
        config: &Config,
        max_bytes: Option<usize>,
    ) -> anyhow::Result<Session> {
        let raw = match self.file {
            Some(ref path) if path.as_str() != "-" => read_input_file(path, max_bytes)?,
            _ => read_stdin(max_bytes)?,
        };
        let text = self.source.prepare(&raw);
        if text.trim().is_empty() {
            bail!("nothing to analyze: {} is empty", self.label());
        }

        let stop_words = config
            .stop_word_set(self.locale)
            .context("invalid stop_words in configuration")?;
        let mut session = Session::with_stop_words(stop_words);
        for word in &self.exclude {
            session
                .add_stop_word(word)
                .with_context(|| format!("cannot exclude {word:?}"))?;
        }
        session.set_text(text);

        debug!(
            input = self.label(),
            source = ?self.source,
            locale = %session.stop_words().locale(),
            unique = session.table().len(),
            "input analyzed"
        );
        Ok(session)
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // check size via metadata before reading into memory
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(strip_bom(content))
}

/// Drop a leading byte order mark so it never reaches the first token.
fn strip_bom(mut text: String) -> String {
    if text.starts_with('\u{feff}') {
        text.drain(..'\u{feff}'.len_utf8());
    }
    text
}

/// Read stdin, stopping one byte past the limit.
pub fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    read_limited(std::io::stdin().lock(), max_bytes).map(strip_bom)
}

fn read_limited<R: Read>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut buf = String::new();
    match max_bytes {
        Some(max) => {
            reader
                .take((max as u64).saturating_add(1))
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            if buf.len() > max {
                bail!("input too large: stdin exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
        }
    }
    Ok(buf)
}
