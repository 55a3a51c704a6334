//! Valence lexicon for review scoring
//!
//! Word lists are tuned for short consumer reviews (food, service,
//! atmosphere vocabulary) with general English fallbacks. Valences live in
//! `[-1.0, 1.0]`; modifiers scale the next valence word; negation tokens
//! are matched against normalized text, so contracted forms ("wasn't")
//! must appear with their apostrophes intact.

use std::collections::HashMap;

/// Word valences, intensity modifiers, and negation markers
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<&'static str, f64>,
    modifiers: HashMap<&'static str, f64>,
    negations: Vec<&'static str>,
}

impl Lexicon {
    /// Build the built-in review lexicon
    #[must_use]
    pub fn new() -> Self {
        let mut valences = HashMap::new();

        // Strongly positive (0.7 - 1.0)
        let strong_positive = [
            ("excellent", 0.8),
            ("amazing", 0.8),
            ("incredible", 0.85),
            ("fantastic", 0.8),
            ("wonderful", 0.8),
            ("perfect", 0.85),
            ("delicious", 0.85),
            ("outstanding", 0.85),
            ("superb", 0.8),
            ("best", 0.75),
            ("awesome", 0.75),
            ("great", 0.7),
            ("love", 0.7),
            ("loved", 0.7),
            ("gem", 0.7),
            ("tasty", 0.7),
            ("heavenly", 0.8),
            ("divine", 0.75),
            ("exceptional", 0.8),
        ];

        // Moderately positive (0.3 - 0.6)
        let moderate_positive = [
            ("good", 0.5),
            ("nice", 0.45),
            ("fresh", 0.55),
            ("friendly", 0.6),
            ("enjoyed", 0.6),
            ("enjoy", 0.55),
            ("recommend", 0.6),
            ("recommended", 0.6),
            ("favorite", 0.65),
            ("pleasant", 0.5),
            ("cozy", 0.5),
            ("clean", 0.45),
            ("attentive", 0.55),
            ("generous", 0.5),
            ("fast", 0.35),
            ("quick", 0.35),
            ("happy", 0.55),
            ("satisfied", 0.55),
            ("worth", 0.45),
            ("solid", 0.4),
            ("fine", 0.3),
            ("decent", 0.3),
        ];

        // Strongly negative (-0.7 to -1.0)
        let strong_negative = [
            ("terrible", -0.8),
            ("horrible", -0.85),
            ("awful", -0.8),
            ("worst", -0.85),
            ("disgusting", -0.9),
            ("inedible", -0.9),
            ("gross", -0.75),
            ("hate", -0.75),
            ("hated", -0.75),
            ("filthy", -0.8),
            ("rude", -0.7),
            ("dirty", -0.7),
            ("appalling", -0.85),
            ("revolting", -0.9),
            ("vile", -0.85),
        ];

        // Moderately negative (-0.3 to -0.6)
        let moderate_negative = [
            ("bad", -0.5),
            ("bland", -0.55),
            ("stale", -0.6),
            ("soggy", -0.5),
            ("dry", -0.4),
            ("greasy", -0.4),
            ("cold", -0.35),
            ("slow", -0.4),
            ("mediocre", -0.45),
            ("overpriced", -0.55),
            ("disappointed", -0.6),
            ("disappointing", -0.6),
            ("disappointment", -0.6),
            ("poor", -0.55),
            ("avoid", -0.6),
            ("waste", -0.65),
            ("wasted", -0.65),
            ("tasteless", -0.55),
            ("undercooked", -0.6),
            ("overcooked", -0.55),
            ("burnt", -0.55),
            ("salty", -0.35),
            ("noisy", -0.35),
            ("cramped", -0.35),
            ("unfriendly", -0.6),
            ("ignored", -0.55),
        ];

        for (word, valence) in strong_positive
            .iter()
            .chain(moderate_positive.iter())
            .chain(strong_negative.iter())
            .chain(moderate_negative.iter())
        {
            valences.insert(*word, *valence);
        }

        let mut modifiers = HashMap::new();
        for (word, factor) in [
            ("very", 1.5),
            ("really", 1.3),
            ("extremely", 1.8),
            ("absolutely", 1.6),
            ("incredibly", 1.7),
            ("so", 1.3),
            ("super", 1.4),
            ("quite", 1.2),
            ("pretty", 1.2),
            ("totally", 1.4),
            ("somewhat", 0.7),
            ("slightly", 0.6),
            ("barely", 0.4),
            ("kinda", 0.7),
        ] {
            modifiers.insert(word, factor);
        }

        let negations = vec![
            "not", "no", "never", "nothing", "nobody", "neither", "nor", "none",
            "isn't", "wasn't", "aren't", "weren't", "don't", "didn't", "doesn't",
            "won't", "can't", "couldn't", "wouldn't", "shouldn't", "ain't",
        ];

        Self {
            valences,
            modifiers,
            negations,
        }
    }

    /// Valence for a normalized word, if it carries one
    #[must_use]
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }

    /// Intensity factor for a normalized word, if it is a modifier
    #[must_use]
    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }

    /// Whether a normalized word marks a negation
    #[must_use]
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word)
    }

    /// Number of valence entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// Whether the lexicon carries no valence entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
