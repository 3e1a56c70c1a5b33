//! SMS scanning
//!
//! Runs text through the configured classifier and renames its sentiment
//! label to a spam verdict. The classifier is a generic sentiment model,
//! so "spam" here means "negative sentiment".

use crate::classifier::{Classifier, Label};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Scan request body
#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub text: String,
}

/// Scan result body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Input text, echoed unchanged
    pub text: String,
    pub is_spam: bool,
    /// Score of the classifier's top label
    pub confidence: f64,
}

/// Spam verdict for a sentiment label
pub fn is_spam(label: Label) -> bool {
    matches!(label, Label::Negative)
}

/// Scan service, shared across requests
#[derive(Clone)]
pub struct ScanService {
    classifier: Arc<dyn Classifier>,
}

impl ScanService {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn model_name(&self) -> &str {
        self.classifier.model_name()
    }

    /// Classify `text` and map the result to a spam verdict
    pub async fn scan(&self, text: String) -> Result<ScanResult> {
        debug!("Scanning text: {:?}", text);

        let classification = self.classifier.classify(&text).await?;
        let result = ScanResult {
            is_spam: is_spam(classification.label),
            confidence: classification.score,
            text,
        };

        info!(
            "Scan verdict: is_spam={} label={} confidence={:.3}",
            result.is_spam, classification.label, result.confidence
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classification;
    use crate::error::ScanError;

    /// `None` behaves like an unreachable backend
    struct FixedClassifier(Option<Classification>);

    #[async_trait::async_trait]
    impl Classifier for FixedClassifier {
        async fn classify(&self, _text: &str) -> Result<Classification> {
            self.0
                .ok_or_else(|| ScanError::Unavailable("down".to_string()))
        }

        fn model_name(&self) -> &str {
            "fixed"
        }
    }

    fn service(label: Label, score: f64) -> ScanService {
        ScanService::new(Arc::new(FixedClassifier(Some(Classification { label, score }))))
    }

    #[test]
    fn test_negative_is_spam() {
        assert!(is_spam(Label::Negative));
        assert!(!is_spam(Label::Positive));
    }

    #[tokio::test]
    async fn test_scan_positive() {
        let result = service(Label::Positive, 0.9998)
            .scan("I love this product".to_string())
            .await
            .unwrap();

        assert_eq!(
            result,
            ScanResult {
                text: "I love this product".to_string(),
                is_spam: false,
                confidence: 0.9998,
            }
        );
    }

    #[tokio::test]
    async fn test_scan_negative() {
        let result = service(Label::Negative, 0.9995)
            .scan("This is terrible and broken".to_string())
            .await
            .unwrap();

        assert!(result.is_spam);
        assert_eq!(result.confidence, 0.9995);
        assert_eq!(result.text, "This is terrible and broken");
    }

    #[tokio::test]
    async fn test_scan_propagates_classifier_failure() {
        let service = ScanService::new(Arc::new(FixedClassifier(None)));

        let err = service.scan(String::new()).await.unwrap_err();
        assert!(matches!(err, ScanError::Unavailable(_)));
    }

    #[test]
    fn test_result_json_keys() {
        let json = serde_json::to_value(ScanResult {
            text: "hi".to_string(),
            is_spam: true,
            confidence: 0.5,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({"text": "hi", "isSpam": true, "confidence": 0.5})
        );
    }
}
