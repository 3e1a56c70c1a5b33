//! scan-service: SMS spam scanning over HTTP
//!
//! Forwards text to a pre-trained sentiment classifier and reports a
//! negative verdict as spam.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:8000"
//!
//! [classifier]
//! backend = "inference"
//! model = "distilbert-base-uncased-finetuned-sst-2-english"
//! base_url = "https://api-inference.huggingface.co"
//! timeout_seconds = 30
//! ```
//!
//! # Modules
//!
//! - [`api`]: HTTP routes
//! - [`classifier`]: Classifier trait and backends
//! - [`config`]: Configuration management
//! - [`error`]: Error types and HTTP mapping
//! - [`scan`]: Label to spam verdict mapping

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod scan;

pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use scan::{ScanRequest, ScanResult, ScanService};
