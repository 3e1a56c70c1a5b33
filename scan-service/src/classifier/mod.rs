//! Text classifier abstraction

use crate::config::{ClassifierBackend, ClassifierConfig};
use crate::error::{Result, ScanError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub mod inference;
pub mod lexicon;

pub use inference::InferenceClassifier;
pub use lexicon::LexiconClassifier;

/// Sentiment label produced by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Label {
    Positive,
    Negative,
}

impl FromStr for Label {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Ok(Label::Positive),
            "NEGATIVE" => Ok(Label::Negative),
            other => Err(ScanError::Classifier(format!("Unknown label: {}", other))),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Positive => f.write_str("POSITIVE"),
            Label::Negative => f.write_str("NEGATIVE"),
        }
    }
}

/// Top-ranked prediction for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Winning label
    pub label: Label,
    /// Probability of the winning label
    pub score: f64,
}

/// Classifier trait
///
/// Implementations are built once at startup and shared read-only
/// across requests.
#[async_trait::async_trait]
pub trait Classifier: Send + Sync {
    /// Classify text, returning the top-ranked label and its score
    async fn classify(&self, text: &str) -> Result<Classification>;

    /// Get model name
    fn model_name(&self) -> &str;

    /// Probe the backend once before serving traffic
    async fn warm_up(&self) -> Result<()> {
        Ok(())
    }
}

/// Build the classifier selected by the configuration
pub fn from_config(config: &ClassifierConfig) -> Result<Arc<dyn Classifier>> {
    let classifier: Arc<dyn Classifier> = match config.backend {
        ClassifierBackend::Inference => Arc::new(InferenceClassifier::from_config(config)?),
        ClassifierBackend::Lexicon => Arc::new(LexiconClassifier::new()),
    };
    Ok(classifier)
}
