//! Inference endpoint classifier
//!
//! Sends text to a Hugging Face Inference API compatible endpoint
//! (`POST {base_url}/models/{model}`) and keeps the top-ranked label.

use super::{Classification, Classifier, Label};
use crate::config::ClassifierConfig;
use crate::error::{Result, ScanError};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const WARM_UP_TEXT: &str = "warm up";

/// Inference endpoint classifier
pub struct InferenceClassifier {
    model_name: String,
    base_url: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

impl InferenceClassifier {
    pub fn new(model_name: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScanError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: None,
            client,
        })
    }

    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        let classifier = Self::new(
            config.model.clone(),
            config.base_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )?;

        Ok(match &config.api_token {
            Some(token) => classifier.with_api_token(token.clone()),
            None => classifier,
        })
    }

    pub fn with_api_token(mut self, api_token: String) -> Self {
        self.api_token = Some(api_token);
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model_name)
    }
}

/// Inference request
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// One scored label
#[derive(Debug, Deserialize)]
struct InferencePrediction {
    label: String,
    score: f64,
}

/// Inference response, nested per input or flat
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<InferencePrediction>>),
    Flat(Vec<InferencePrediction>),
}

impl InferenceResponse {
    /// Pick the highest-scoring prediction and validate it
    fn top_prediction(self) -> Result<Classification> {
        let predictions = match self {
            InferenceResponse::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
            InferenceResponse::Flat(predictions) => predictions,
        };

        let top = predictions
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| ScanError::Classifier("Empty prediction list".to_string()))?;

        if !top.score.is_finite() || !(0.0..=1.0).contains(&top.score) {
            return Err(ScanError::Classifier(format!(
                "Score out of range: {}",
                top.score
            )));
        }

        Ok(Classification {
            label: top.label.parse::<Label>()?,
            score: top.score,
        })
    }
}

fn map_transport_error(err: reqwest::Error) -> ScanError {
    if err.is_connect() || err.is_timeout() {
        ScanError::Unavailable(err.to_string())
    } else {
        ScanError::Classifier(err.to_string())
    }
}

#[async_trait::async_trait]
impl Classifier for InferenceClassifier {
    async fn classify(&self, text: &str) -> Result<Classification> {
        let url = self.endpoint();
        debug!("Inference: Sending {} chars to {}", text.len(), url);

        let mut request = self.client.post(&url).json(&InferenceRequest { inputs: text });
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Inference: Could not read error body: {}", e);
                    String::new()
                }
            };
            warn!("Inference: Request failed with status {}: {}", status, error_text);

            return Err(if status == StatusCode::SERVICE_UNAVAILABLE {
                ScanError::Unavailable(format!("{} - {}", status, error_text))
            } else {
                ScanError::Classifier(format!(
                    "Inference request failed: {} - {}",
                    status, error_text
                ))
            });
        }

        // A timeout while the body streams in is still a transport failure
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        let body: InferenceResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ScanError::Classifier(format!("Invalid inference response: {}", e)))?;

        let classification = body.top_prediction()?;
        debug!(
            "Inference: {} ({:.3})",
            classification.label, classification.score
        );

        Ok(classification)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn warm_up(&self) -> Result<()> {
        self.classify(WARM_UP_TEXT).await.map(|_| ())
    }
}
