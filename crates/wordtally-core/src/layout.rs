//! Visual attributes for the word cloud.
//!
//! Size and opacity follow each word's count relative to the most frequent
//! word in the rendered set. Rotation and hue are random on every render;
//! the randomness comes from a [`RandomSource`] so callers can swap in a
//! seeded or fixed source.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::ThreadRng;
use rand_chacha::ChaCha8Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ranking::RankedWord;

/// Smallest font size, in pixels.
pub const MIN_FONT_SIZE: u32 = 12;

/// Font size of the most frequent word, in pixels.
pub const MAX_FONT_SIZE: u32 = 48;

/// Opacity of a word whose count is negligible next to the maximum.
pub const MIN_OPACITY: f64 = 0.3;

/// Rotation is drawn from `-MAX_ROTATION_DEGREES..MAX_ROTATION_DEGREES`.
pub const MAX_ROTATION_DEGREES: f64 = 10.0;

/// Saturation used for every word's color, in percent.
pub const SATURATION: u8 = 70;

/// Lightness used for every word's color, in percent.
pub const LIGHTNESS: u8 = 50;

/// Supplies uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Non-reproducible source backed by the thread-local RNG.
#[derive(Debug, Clone)]
pub struct ThreadRandom(ThreadRng);

impl Default for ThreadRandom {
    fn default() -> Self {
        Self(rand::thread_rng())
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Reproducible source: the same seed yields the same layout.
#[derive(Debug, Clone)]
pub struct SeededRandom(ChaCha8Rng);

impl SeededRandom {
    /// Seed the generator.
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Returns the same sample every time.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// A word with its rendering attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VisualToken {
    /// The normalized token.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
    /// Font size in pixels.
    pub font_size: u32,
    /// Opacity in `[0.3, 1.0]`.
    pub opacity: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// CSS color string built from the hue.
    pub color: String,
}

/// Font size for a word with `count` when the largest count is `max_count`.
pub fn font_size(count: usize, max_count: usize) -> u32 {
    let scaled = (ratio(count, max_count) * f64::from(MAX_FONT_SIZE)).floor() as u32;
    scaled.max(MIN_FONT_SIZE)
}

/// Opacity for a word with `count` when the largest count is `max_count`.
pub fn opacity(count: usize, max_count: usize) -> f64 {
    MIN_OPACITY + ratio(count, max_count) * (1.0 - MIN_OPACITY)
}

fn ratio(count: usize, max_count: usize) -> f64 {
    if max_count == 0 {
        return 0.0;
    }
    count as f64 / max_count as f64
}

/// Attach size, opacity, rotation, and color to each ranked word.
///
/// The maximum is taken within `words`, which for the cloud is the top-100
/// set. Two samples are drawn from `rng` per word: rotation, then hue.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn layout(words: &[RankedWord], rng: &mut dyn RandomSource) -> Vec<VisualToken> {
    let max_count = words.iter().map(|w| w.count).max().unwrap_or(0);

    words
        .iter()
        .map(|w| {
            let rotation = rng.next_unit() * 2.0 * MAX_ROTATION_DEGREES - MAX_ROTATION_DEGREES;
            let hue = rng.next_unit() * 360.0;
            VisualToken {
                word: w.word.clone(),
                count: w.count,
                font_size: font_size(w.count, max_count),
                opacity: opacity(w.count, max_count),
                rotation,
                hue,
                color: format!("hsl({hue:.1}, {SATURATION}%, {LIGHTNESS}%)"),
            }
        })
        .collect()
}
