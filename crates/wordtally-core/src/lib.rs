//! Core library for wordtally.
//!
//! Turns free-form text into word frequencies and word-cloud layouts.
//!
//! # Modules
//!
//! - [`analyzer`] - Normalization, tokenizing, and counting
//! - [`stopwords`] - Locale defaults and the editable exclusion set
//! - [`ranking`] - Top-N views over a frequency table
//! - [`layout`] - Font size, opacity, rotation, and color per word
//! - [`session`] - Stateful container that re-analyzes on every change
//! - [`sources`] - Adapters for titles, comments, and markdown input
//! - [`reports`] - Serializable results
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordtally_core::{Locale, Session};
//!
//! let mut session = Session::new(Locale::En);
//! session.set_text("Launch the campaign, then launch the ads.");
//! session.add_stop_word("then").unwrap();
//!
//! let top = session.top_words();
//! assert_eq!(top[0].word, "launch");
//! assert_eq!(top[0].count, 2);
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod layout;
pub mod ranking;
pub mod reports;
pub mod session;
pub mod sources;
pub mod stopwords;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

pub use analyzer::{WordFrequencyTable, analyze};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, LocaleError, StopWordError, StopWordResult};
pub use layout::{RandomSource, SeededRandom, ThreadRandom, VisualToken};
pub use ranking::{RankedWord, top_n};
pub use reports::{FrequencyReport, StopWordsReport, WordCloudReport};
pub use session::Session;
pub use sources::SourceKind;
pub use stopwords::{Locale, StopWordSet, add_stop_word, remove_stop_word};
