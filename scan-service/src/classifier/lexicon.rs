//! Lexicon classifier for development and testing
//!
//! Counts hits against small positive and negative word lists. It stands
//! in for the inference backend when no model endpoint is reachable.

use super::{Classification, Classifier, Label};
use crate::error::Result;
use tracing::debug;

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "best", "excellent", "fantastic", "fine", "glad", "good", "great",
    "happy", "like", "love", "nice", "perfect", "pleased", "thank", "thanks", "wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "angry", "awful", "bad", "broken", "disappointed", "fail", "failed", "hate", "horrible",
    "poor", "sad", "scam", "terrible", "ugly", "useless", "worse", "worst", "wrong",
];

/// Keyword-counting classifier
pub struct LexiconClassifier {
    model_name: String,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self {
            model_name: "lexicon-v1".to_string(),
        }
    }

    /// Count positive and negative hits in `text`
    fn count_hits(text: &str) -> (usize, usize) {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .fold((0, 0), |(pos, neg), word| {
                if POSITIVE_WORDS.contains(&word) {
                    (pos + 1, neg)
                } else if NEGATIVE_WORDS.contains(&word) {
                    (pos, neg + 1)
                } else {
                    (pos, neg)
                }
            })
    }

    /// Classify synchronously
    pub fn predict(&self, text: &str) -> Classification {
        let (pos, neg) = Self::count_hits(text);
        let label = if neg > pos {
            Label::Negative
        } else {
            Label::Positive
        };

        // Stays in [0.5, 1)
        let margin = pos.abs_diff(neg) as f64;
        let score = 0.5 + 0.5 * margin / ((pos + neg) as f64 + 1.0);

        Classification { label, score }
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Classifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<Classification> {
        let classification = self.predict(text);
        debug!(
            "Lexicon: {} ({:.3}) for {} chars",
            classification.label,
            classification.score,
            text.len()
        );
        Ok(classification)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
