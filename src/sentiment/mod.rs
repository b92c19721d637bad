//! Headline sentiment: a compound polarity score and its Bullish/Bearish/Neutral label.

mod lexicon;
mod scorer;

pub use scorer::LexiconScorer;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Scores at or above this are Bullish.
pub const BULLISH_THRESHOLD: f64 = 0.05;
/// Scores at or below this are Bearish.
pub const BEARISH_THRESHOLD: f64 = -0.05;

/// Anything that maps text to a compound polarity in [-1, 1].
///
/// Implemented by [`LexiconScorer`] and by any `Fn(&str) -> f64`, so a fixed or
/// model-backed scorer can be substituted without touching the dashboard.
pub trait PolarityScorer {
    /// Returns the compound polarity of `text`. Must not fail for any input.
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Polarity label derived from a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Score at or above [`BULLISH_THRESHOLD`].
    Bullish,
    /// Score at or below [`BEARISH_THRESHOLD`].
    Bearish,
    /// Anything strictly between the thresholds.
    Neutral,
}

impl SentimentLabel {
    /// All labels, in display order.
    pub const ALL: [Self; 3] = [Self::Bullish, Self::Bearish, Self::Neutral];

    /// Thresholds a compound score. Both boundaries are inclusive on the polar side;
    /// NaN falls to `Neutral`.
    pub fn from_score(score: f64) -> Self {
        if score >= BULLISH_THRESHOLD {
            Self::Bullish
        } else if score <= BEARISH_THRESHOLD {
            Self::Bearish
        } else {
            Self::Neutral
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Bearish => "Bearish",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A scored piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// Compound score in [-1, 1].
    pub score: f64,
}

impl Sentiment {
    /// Builds a sentiment from a raw score, clamping it to [-1, 1] (NaN becomes 0).
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_nan() { 0.0 } else { score.clamp(-1.0, 1.0) };
        Self {
            label: SentimentLabel::from_score(score),
            score,
        }
    }
}

static DEFAULT_SCORER: LazyLock<LexiconScorer> = LazyLock::new(LexiconScorer::new);

/// Scores `text` with the built-in [`LexiconScorer`].
pub fn analyze(text: &str) -> Sentiment {
    analyze_with(&*DEFAULT_SCORER, text)
}

/// Scores `text` with the given scorer.
pub fn analyze_with<S: PolarityScorer + ?Sized>(scorer: &S, text: &str) -> Sentiment {
    Sentiment::from_score(scorer.polarity(text))
}
