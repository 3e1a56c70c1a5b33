//! Configuration for scan-service

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ScanError};

/// Main service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Classifier configuration
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address (e.g., "0.0.0.0:8000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// Which classifier implementation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    /// Remote inference endpoint
    Inference,
    /// Built-in keyword classifier
    Lexicon,
}

/// Classifier configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    #[serde(default = "default_backend")]
    pub backend: ClassifierBackend,
    /// Model identifier on the inference endpoint
    #[serde(default = "default_model")]
    pub model: String,
    /// Inference endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token for the inference endpoint
    pub api_token: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Probe the classifier once before serving
    #[serde(default = "default_warm_up")]
    pub warm_up: bool,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_backend() -> ClassifierBackend {
    ClassifierBackend::Inference
}

fn default_model() -> String {
    "distilbert-base-uncased-finetuned-sst-2-english".to_string()
}

fn default_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_warm_up() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            model: default_model(),
            base_url: default_base_url(),
            api_token: None,
            timeout_seconds: default_timeout(),
            warm_up: default_warm_up(),
        }
    }
}

impl ScanConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        toml::from_str(&content)
            .map_err(|e| ScanError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Apply `SCAN_*` / `HF_API_TOKEN` environment overrides
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("SCAN_LISTEN_ADDR") {
            self.server.listen_addr = addr;
        }
        if let Some(backend) = lookup("SCAN_CLASSIFIER") {
            self.classifier.backend = match backend.to_ascii_lowercase().as_str() {
                "inference" => ClassifierBackend::Inference,
                "lexicon" => ClassifierBackend::Lexicon,
                other => {
                    return Err(ScanError::Config(format!(
                        "Unknown classifier backend '{}'",
                        other
                    )))
                }
            };
        }
        if let Some(model) = lookup("SCAN_MODEL") {
            self.classifier.model = model;
        }
        if let Some(url) = lookup("SCAN_INFERENCE_URL") {
            self.classifier.base_url = url;
        }
        if let Some(token) = lookup("HF_API_TOKEN") {
            self.classifier.api_token = Some(token);
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.listen_addr.trim().is_empty() {
            return Err(ScanError::Config("Empty listen address".to_string()));
        }

        if self.classifier.backend == ClassifierBackend::Inference {
            if self.classifier.model.trim().is_empty() {
                return Err(ScanError::Config("Empty model name".to_string()));
            }
            if self.classifier.timeout_seconds == 0 {
                return Err(ScanError::Config(
                    "timeout_seconds must be greater than zero".to_string(),
                ));
            }
            url::Url::parse(&self.classifier.base_url).map_err(|e| {
                ScanError::Config(format!(
                    "Invalid inference URL '{}': {}",
                    self.classifier.base_url, e
                ))
            })?;
        }

        Ok(())
    }
}
