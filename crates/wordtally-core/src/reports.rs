//! Serializable analysis results.
//!
//! Used for CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analyzer::WordFrequencyTable;
use crate::layout::{self, RandomSource, VisualToken};
use crate::ranking::{self, RankedWord};
use crate::stopwords::{Locale, StopWordSet};

/// Everything a word-cloud view needs from one analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WordCloudReport {
    /// Locale whose default stop words were applied.
    pub locale: String,
    /// Number of counted tokens (sum of all counts).
    pub total_tokens: usize,
    /// Number of distinct counted tokens.
    pub unique_words: usize,
    /// Most frequent words for the ranked list.
    pub top_words: Vec<RankedWord>,
    /// Most frequent words with layout attributes.
    pub cloud: Vec<VisualToken>,
    /// User-added stop words in effect.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub custom_stop_words: Vec<String>,
}

impl WordCloudReport {
    /// Build a report with the standard list and cloud sizes.
    pub fn build(
        table: &WordFrequencyTable,
        stop_words: &StopWordSet,
        rng: &mut dyn RandomSource,
    ) -> Self {
        Self::build_with_limits(
            table,
            stop_words,
            ranking::LIST_LIMIT,
            ranking::CLOUD_LIMIT,
            rng,
        )
    }

    /// Build a report with custom list and cloud sizes.
    pub fn build_with_limits(
        table: &WordFrequencyTable,
        stop_words: &StopWordSet,
        list_limit: usize,
        cloud_limit: usize,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let cloud_words = ranking::top_n(table, cloud_limit);
        Self {
            locale: stop_words.locale().as_str().to_string(),
            total_tokens: table.total(),
            unique_words: table.len(),
            top_words: ranking::top_n(table, list_limit),
            cloud: layout::layout(&cloud_words, rng),
            custom_stop_words: stop_words.custom().map(str::to_string).collect(),
        }
    }
}

/// Ranked counts without layout, for tabular output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FrequencyReport {
    /// Locale whose default stop words were applied.
    pub locale: String,
    /// Number of counted tokens (sum of all counts).
    pub total_tokens: usize,
    /// Number of distinct counted tokens.
    pub unique_words: usize,
    /// Words ranked by count, highest first.
    pub words: Vec<RankedWord>,
    /// User-added stop words in effect.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub custom_stop_words: Vec<String>,
}

impl FrequencyReport {
    /// Rank the table, keeping at most `limit` words (`None` keeps all).
    pub fn build(
        table: &WordFrequencyTable,
        stop_words: &StopWordSet,
        limit: Option<usize>,
    ) -> Self {
        Self {
            locale: stop_words.locale().as_str().to_string(),
            total_tokens: table.total(),
            unique_words: table.len(),
            words: ranking::top_n(table, limit.unwrap_or(usize::MAX)),
            custom_stop_words: stop_words.custom().map(str::to_string).collect(),
        }
    }
}

/// The stop words in effect for a locale, for listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StopWordsReport {
    /// Locale tag.
    pub locale: String,
    /// Built-in words for the locale.
    pub defaults: Vec<String>,
    /// User-added words.
    pub custom: Vec<String>,
}

impl From<&StopWordSet> for StopWordsReport {
    fn from(set: &StopWordSet) -> Self {
        Self {
            locale: set.locale().as_str().to_string(),
            defaults: set.defaults().map(str::to_string).collect(),
            custom: set.custom().map(str::to_string).collect(),
        }
    }
}

impl StopWordsReport {
    /// Defaults for `locale` with no custom words.
    pub fn for_locale(locale: Locale) -> Self {
        Self::from(&StopWordSet::new(locale))
    }
}
