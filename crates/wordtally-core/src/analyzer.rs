//! Word-frequency analysis.
//!
//! [`analyze`] turns free-form text into a [`WordFrequencyTable`] in one pass:
//!
//! 1. lowercase the whole input
//! 2. delete the ASCII punctuation in [`STRIPPED_PUNCTUATION`]
//! 3. split on runs of whitespace
//! 4. drop single-character tokens and stop words
//! 5. count what is left
//!
//! Only the listed ASCII characters are deleted. Curly quotes, em-dashes,
//! full-width and Korean punctuation stay attached to their tokens.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::stopwords::StopWordSet;

/// Characters deleted before tokenizing.
pub const STRIPPED_PUNCTUATION: &str = ".,/#!$%^&*;:{}=-_`~()";

static PUNCTUATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()]").expect("valid regex"));

/// Token → occurrence count for one analysis pass.
///
/// Entries keep the order in which each token was first seen. Ranking uses
/// that order to break ties between equal counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordFrequencyTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, token: &str) {
        if let Some(&slot) = self.index.get(token) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(token.to_string(), self.entries.len());
            self.entries.push((token.to_string(), 1));
        }
    }

    /// Count for `token`, if it was seen.
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no token survived filtering.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// `(token, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }
}

impl Serialize for WordFrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (token, count) in &self.entries {
            map.serialize_entry(token, count)?;
        }
        map.end()
    }
}

/// Lowercase, strip punctuation, and split on whitespace.
///
/// This is the raw token stream before length and stop-word filtering.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    PUNCTUATION_PATTERN
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whether a normalized token is counted under `stop_words`.
///
/// Length is measured in UTF-16 code units. A lone Hangul syllable or ASCII
/// letter is dropped; a lone emoji outside the BMP (two units) is kept.
pub fn is_countable(token: &str, stop_words: &StopWordSet) -> bool {
    token.encode_utf16().nth(1).is_some() && !stop_words.contains(token)
}

/// Count the words in `text`, skipping anything in `stop_words`.
///
/// Blank input yields an empty table. Never fails.
#[tracing::instrument(skip_all, fields(text_len = text.len(), stop_words = stop_words.len()))]
pub fn analyze(text: &str, stop_words: &StopWordSet) -> WordFrequencyTable {
    let mut table = WordFrequencyTable::new();
    if text.trim().is_empty() {
        return table;
    }

    for token in tokenize(text) {
        if is_countable(&token, stop_words) {
            table.record(&token);
        }
    }

    tracing::debug!(
        unique = table.len(),
        total = table.total(),
        "text analyzed"
    );
    table
}
