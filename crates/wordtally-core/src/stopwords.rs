//! Stop-word tables and the user-editable exclusion set.
//!
//! A [`StopWordSet`] is split in two: the default words for a [`Locale`],
//! fixed when the set is built, and the custom words a user adds and removes
//! while working. Lookups consult both halves.
//!
//! Editing is value-oriented: [`add_stop_word`] and [`remove_stop_word`]
//! return a new set and leave the input untouched, so the caller decides
//! when to re-run analysis.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{LocaleError, StopWordError, StopWordResult};

/// English function words. Always excluded.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
];

/// Korean particles, pronouns, and copulas. Excluded only for [`Locale::Ko`].
pub const KOREAN_STOP_WORDS: &[&str] = &[
    "이", "그", "저", "이것", "저것", "그것", "을", "를", "이다", "있다", "하다", "및", "또는",
];

/// Locale that selects the default stop-word table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Locale {
    /// English only.
    En,
    /// Korean plus English (default).
    #[default]
    Ko,
}

impl Locale {
    /// All supported locales.
    pub const ALL: &'static [Self] = &[Self::En, Self::Ko];

    /// Returns the locale as a lowercase language tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
        }
    }

    /// Default stop words for this locale.
    ///
    /// English function words are always part of the table; Korean words are
    /// appended for [`Locale::Ko`].
    pub fn default_stop_words(&self) -> impl Iterator<Item = &'static str> {
        let korean: &'static [&'static str] = match self {
            Self::En => &[],
            Self::Ko => KOREAN_STOP_WORDS,
        };
        ENGLISH_STOP_WORDS.iter().chain(korean).copied()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Parses `en`, `ko`, or a region-qualified tag like `ko-KR` / `en_US`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Ok(Self::En),
            "ko" => Ok(Self::Ko),
            _ => Err(LocaleError {
                tag: s.to_string(),
                available: Self::ALL
                    .iter()
                    .map(Self::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// The active exclusion set: locale defaults plus user-added words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordSet {
    locale: Locale,
    defaults: BTreeSet<String>,
    custom: BTreeSet<String>,
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl StopWordSet {
    /// Build a set holding the default words for `locale` and no custom words.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            defaults: locale.default_stop_words().map(str::to_string).collect(),
            custom: BTreeSet::new(),
        }
    }

    /// A set with no default words at all.
    ///
    /// Useful when every exclusion should come from the user.
    pub fn empty() -> Self {
        Self {
            locale: Locale::En,
            defaults: BTreeSet::new(),
            custom: BTreeSet::new(),
        }
    }

    /// Build a set for `locale` and add each of `words` as a custom word.
    ///
    /// Fails on the first blank or duplicate entry.
    pub fn with_custom<I, S>(locale: Locale, words: I) -> StopWordResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .try_fold(Self::new(locale), |set, w| add_stop_word(w.as_ref(), &set))
    }

    /// Locale the defaults were resolved for.
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Whether `word` is excluded. Expects an already-lowercased token.
    pub fn contains(&self, word: &str) -> bool {
        self.defaults.contains(word) || self.custom.contains(word)
    }

    /// Default words, sorted.
    pub fn defaults(&self) -> impl Iterator<Item = &str> {
        self.defaults.iter().map(String::as_str)
    }

    /// User-added words, sorted.
    pub fn custom(&self) -> impl Iterator<Item = &str> {
        self.custom.iter().map(String::as_str)
    }

    /// Number of user-added words.
    pub fn custom_len(&self) -> usize {
        self.custom.len()
    }

    /// Total number of excluded words.
    pub fn len(&self) -> usize {
        self.defaults.len() + self.custom.len()
    }

    /// True when nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.custom.is_empty()
    }
}

/// Add `word` to the custom stop words, returning the updated set.
///
/// The word is trimmed and lowercased first. Blank input fails with
/// [`StopWordError::EmptyInput`]; a word already present among the defaults
/// or the custom words fails with [`StopWordError::Duplicate`].
#[tracing::instrument(skip(current), fields(custom = current.custom_len()))]
pub fn add_stop_word(word: &str, current: &StopWordSet) -> StopWordResult<StopWordSet> {
    let normalized = normalize(word);
    if normalized.is_empty() {
        return Err(StopWordError::EmptyInput);
    }
    if current.contains(&normalized) {
        return Err(StopWordError::Duplicate { word: normalized });
    }

    let mut next = current.clone();
    next.custom.insert(normalized);
    tracing::debug!(custom = next.custom_len(), "stop word added");
    Ok(next)
}

/// Remove `word` from the custom stop words, returning the updated set.
///
/// Default words cannot be removed. Removing a word that is not present is a
/// no-op.
#[tracing::instrument(skip(current), fields(custom = current.custom_len()))]
pub fn remove_stop_word(word: &str, current: &StopWordSet) -> StopWordSet {
    let mut next = current.clone();
    if next.custom.remove(&normalize(word)) {
        tracing::debug!(custom = next.custom_len(), "stop word removed");
    }
    next
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
