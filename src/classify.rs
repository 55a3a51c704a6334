//! Sentiment classification from polarity scores
//!
//! Maps a continuous polarity value in `[-1.0, 1.0]` onto exactly one of
//! three discrete labels through fixed thresholds. The partition is total
//! and non-overlapping; boundary ties favor [`Sentiment::Neutral`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity strictly above this value classifies as Positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Polarity strictly below this value classifies as Negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Discrete sentiment label derived from polarity
///
/// Variants are declared in polarity-axis order so the derived `Ord`
/// matches the partition: `Negative < Neutral < Positive`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Sentiment {
    /// polarity < -0.1
    Negative,
    /// -0.1 <= polarity <= 0.1
    Neutral,
    /// polarity > 0.1
    Positive,
}

impl Sentiment {
    /// All variants in reporting order (matches the chart slice order)
    pub const ALL: [Self; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Classify a polarity score
    ///
    /// Total over every finite float; callers are responsible for keeping
    /// inputs inside `[-1.0, 1.0]`. Out-of-range values still classify by
    /// the same thresholds rather than being handled specially.
    ///
    /// # Example
    /// ```
    /// use resena::Sentiment;
    ///
    /// assert_eq!(Sentiment::from_polarity(0.6), Sentiment::Positive);
    /// assert_eq!(Sentiment::from_polarity(0.1), Sentiment::Neutral);
    /// assert_eq!(Sentiment::from_polarity(-0.35), Sentiment::Negative);
    /// ```
    #[must_use]
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Human-readable label, as printed in reports and the CSV export
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
