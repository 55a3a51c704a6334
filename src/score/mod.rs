//! Polarity scoring
//!
//! The scorer is a pluggable capability: anything implementing
//! [`PolarityScorer`] can drive the pipeline, which makes substitution and
//! mocking in tests trivial. The built-in [`LexiconScorer`] is a
//! deterministic word-valence model with intensity modifiers and a
//! negation window, so the crate works out of the box without an external
//! NLP service.

mod lexicon;

pub use lexicon::Lexicon;

use crate::error::Result;

/// Maps cleaned text to a polarity score in `[-1.0, 1.0]`
///
/// Implementations must be deterministic for a given input. A returned
/// error means the text could not be scored at all (e.g. an external
/// scorer rejecting an encoding); the pipeline recovers by skipping the
/// record, so implementors should not abort a whole run from here.
pub trait PolarityScorer {
    /// Score one cleaned review text
    ///
    /// # Errors
    /// Returns [`crate::Error::Score`] when the text cannot be scored.
    fn score(&self, text: &str) -> Result<f64>;
}

/// Lexicon-based polarity scorer
///
/// Tokenizes on whitespace (input is expected to be pre-cleaned by
/// [`crate::normalize::clean_text`]), looks each token up in the valence
/// lexicon, applies the pending intensity modifier, and inverts valences
/// within a fixed window after a negation token. The final score is the
/// mean of matched valences clamped to `[-1.0, 1.0]`; a text with no
/// lexicon hits scores 0.0.
///
/// # Example
/// ```
/// use resena::score::{LexiconScorer, PolarityScorer};
///
/// let scorer = LexiconScorer::new();
/// assert!(scorer.score("loved this place").unwrap() > 0.1);
/// assert!(scorer.score("crust is not good").unwrap() < -0.1);
/// assert_eq!(scorer.score("table by the window").unwrap(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Lexicon,
    negation_window: usize,
}

/// Damping applied when a negation inverts a valence
const NEGATION_DAMPING: f64 = 0.8;

const DEFAULT_NEGATION_WINDOW: usize = 3;

impl LexiconScorer {
    /// Create a scorer with the built-in lexicon
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
            negation_window: DEFAULT_NEGATION_WINDOW,
        }
    }

    /// Replace the lexicon
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Set how many tokens after a negation have their valence inverted
    #[must_use]
    pub const fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64> {
        let mut total = 0.0;
        let mut hits: u32 = 0;
        let mut pending_modifier = 1.0;
        let mut negation_active = false;
        let mut tokens_since_negation = 0;

        for token in text.split_whitespace() {
            if self.lexicon.is_negation(token) {
                negation_active = true;
                tokens_since_negation = 0;
                continue;
            }

            if let Some(factor) = self.lexicon.modifier(token) {
                pending_modifier = factor;
                continue;
            }

            if let Some(valence) = self.lexicon.valence(token) {
                let mut scored = valence * pending_modifier;
                if negation_active && tokens_since_negation < self.negation_window {
                    scored = -scored * NEGATION_DAMPING;
                }
                total += scored;
                hits += 1;
                pending_modifier = 1.0;
            }

            if negation_active {
                tokens_since_negation += 1;
                if tokens_since_negation >= self.negation_window {
                    negation_active = false;
                }
            }
        }

        if hits == 0 {
            return Ok(0.0);
        }
        Ok((total / f64::from(hits)).clamp(-1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Sentiment;

    fn score(text: &str) -> f64 {
        LexiconScorer::new().score(text).unwrap()
    }

    #[test]
    fn test_positive_review() {
        let polarity = score("wow loved this place the food was amazing");
        assert!(polarity > 0.1, "got {polarity}");
        assert_eq!(Sentiment::from_polarity(polarity), Sentiment::Positive);
    }

    #[test]
    fn test_negative_review() {
        let polarity = score("the service was terrible and the crust was stale");
        assert!(polarity < -0.1, "got {polarity}");
        assert_eq!(Sentiment::from_polarity(polarity), Sentiment::Negative);
    }

    #[test]
    fn test_no_hits_scores_zero() {
        assert!(score("table by the window").abs() < f64::EPSILON);
        assert!(score("").abs() < f64::EPSILON);
    }

    #[test]
    fn test_negation_inverts() {
        let plain = score("the crust is good");
        let negated = score("the crust is not good");
        assert!(plain > 0.0);
        assert!(negated < 0.0, "got {negated}");
    }

    #[test]
    fn test_negation_window_expires() {
        // Four tokens between "not" and "good": outside the default window
        let polarity = score("not that i can say anything good");
        assert!(polarity > 0.0, "got {polarity}");
    }

    #[test]
    fn test_modifier_intensifies() {
        let plain = score("good");
        let intensified = score("very good");
        assert!(intensified > plain);
    }

    #[test]
    fn test_modifier_dampens() {
        let plain = score("good");
        let dampened = score("slightly good");
        assert!(dampened < plain);
        assert!(dampened > 0.0);
    }

    #[test]
    fn test_score_within_range() {
        for text in [
            "extremely amazing incredible perfect delicious",
            "absolutely disgusting horrible vile worst",
        ] {
            let polarity = score(text);
            assert!((-1.0..=1.0).contains(&polarity), "{text} -> {polarity}");
        }
    }

    #[test]
    fn test_deterministic() {
        let scorer = LexiconScorer::new();
        let a = scorer.score("loved the fresh bread").unwrap();
        let b = scorer.score("loved the fresh bread").unwrap();
        assert!((a - b).abs() < f64::EPSILON);
    }
}
