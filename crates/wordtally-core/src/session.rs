//! Explicit state container for an interactive word-cloud session.
//!
//! A [`Session`] owns the source text, the stop-word set, and the latest
//! frequency table. Every change to the text or the stop words re-runs the
//! analysis in full; nothing is cached between runs.

use crate::analyzer::{WordFrequencyTable, analyze};
use crate::error::StopWordResult;
use crate::layout::RandomSource;
use crate::ranking::{self, RankedWord};
use crate::reports::WordCloudReport;
use crate::stopwords::{self, Locale, StopWordSet};

/// Held text, exclusions, and the table derived from them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    text: String,
    stop_words: StopWordSet,
    table: WordFrequencyTable,
}

impl Session {
    /// Start an empty session with the default stop words for `locale`.
    pub fn new(locale: Locale) -> Self {
        Self::with_stop_words(StopWordSet::new(locale))
    }

    /// Start an empty session with a prepared stop-word set.
    pub fn with_stop_words(stop_words: StopWordSet) -> Self {
        Self {
            text: String::new(),
            stop_words,
            table: WordFrequencyTable::new(),
        }
    }

    /// Replace the source text and re-analyze.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.refresh();
    }

    /// Exclude `word` and re-analyze.
    ///
    /// On error the stop words and the table are left as they were.
    pub fn add_stop_word(&mut self, word: &str) -> StopWordResult<()> {
        self.stop_words = stopwords::add_stop_word(word, &self.stop_words)?;
        self.refresh();
        Ok(())
    }

    /// Stop excluding a custom `word` and re-analyze.
    pub fn remove_stop_word(&mut self, word: &str) {
        self.stop_words = stopwords::remove_stop_word(word, &self.stop_words);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.table = analyze(&self.text, &self.stop_words);
    }

    /// Current source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current exclusions.
    pub const fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Table from the most recent analysis.
    pub const fn table(&self) -> &WordFrequencyTable {
        &self.table
    }

    /// Top words for the ranked list.
    pub fn top_words(&self) -> Vec<RankedWord> {
        ranking::list_words(&self.table)
    }

    /// Top words for the visual cloud.
    pub fn cloud_words(&self) -> Vec<RankedWord> {
        ranking::cloud_words(&self.table)
    }

    /// Report for the current state, with fresh layout randomness.
    pub fn report(&self, rng: &mut dyn RandomSource) -> WordCloudReport {
        WordCloudReport::build(&self.table, &self.stop_words, rng)
    }
}
