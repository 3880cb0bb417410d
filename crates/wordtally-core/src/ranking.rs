//! Rank-ordered views over a [`WordFrequencyTable`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analyzer::WordFrequencyTable;

/// Words shown in the visual cloud.
pub const CLOUD_LIMIT: usize = 100;

/// Words shown in the ranked list.
pub const LIST_LIMIT: usize = 20;

/// A token with its count, as it appears in a ranked view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RankedWord {
    /// The normalized token.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// The `n` most frequent words, highest count first.
///
/// Equal counts keep the order in which the words first appeared in the
/// text, so the result is deterministic for a given input.
pub fn top_n(table: &WordFrequencyTable, n: usize) -> Vec<RankedWord> {
    let mut ranked: Vec<RankedWord> = table
        .iter()
        .map(|(word, count)| RankedWord {
            word: word.to_string(),
            count,
        })
        .collect();

    // stable: ties stay in first-seen order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

/// The top [`CLOUD_LIMIT`] words, used for the visual layout.
pub fn cloud_words(table: &WordFrequencyTable) -> Vec<RankedWord> {
    top_n(table, CLOUD_LIMIT)
}

/// The top [`LIST_LIMIT`] words, used for the tabular list.
pub fn list_words(table: &WordFrequencyTable) -> Vec<RankedWord> {
    top_n(table, LIST_LIMIT)
}
