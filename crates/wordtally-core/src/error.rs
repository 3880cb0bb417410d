//! Error types for wordtally-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A configured stop word was rejected by the stop-word set.
    #[error("invalid stop word in configuration: {0}")]
    StopWord(#[from] StopWordError),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised when editing the custom stop-word list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StopWordError {
    /// The submitted word was blank after trimming.
    #[error("stop word must not be empty")]
    EmptyInput,

    /// The word is already excluded, either by default or by the user.
    #[error("\"{word}\" is already a stop word")]
    Duplicate {
        /// The normalized (trimmed, lowercased) word that was rejected.
        word: String,
    },
}

/// Result type alias using [`StopWordError`].
pub type StopWordResult<T> = Result<T, StopWordError>;

/// Errors raised when parsing a locale tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale: {tag}. Use: {available}")]
pub struct LocaleError {
    /// The tag that was requested.
    pub tag: String,
    /// Comma-separated list of supported tags.
    pub available: String,
}
