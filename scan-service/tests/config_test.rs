use scan_service::config::ClassifierBackend;
use scan_service::{ScanConfig, ScanError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[server]
listen_addr = "127.0.0.1:8123"

[classifier]
backend = "inference"
model = "distilbert-base-uncased-finetuned-sst-2-english"
base_url = "http://localhost:8080"
api_token = "hf_file_token"
timeout_seconds = 10
warm_up = false
"#
    )
    .unwrap();

    let config = ScanConfig::from_file(file.path()).unwrap();

    assert_eq!(config.server.listen_addr, "127.0.0.1:8123");
    assert_eq!(config.classifier.backend, ClassifierBackend::Inference);
    assert_eq!(config.classifier.base_url, "http://localhost:8080");
    assert_eq!(config.classifier.api_token.as_deref(), Some("hf_file_token"));
    assert_eq!(config.classifier.timeout_seconds, 10);
    assert!(!config.classifier.warm_up);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_config_uses_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[classifier]\nbackend = \"lexicon\"").unwrap();

    let config = ScanConfig::from_file(file.path()).unwrap();

    assert_eq!(config.server.listen_addr, "0.0.0.0:8000");
    assert_eq!(config.classifier.backend, ClassifierBackend::Lexicon);
    assert!(config.classifier.warm_up);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[server\nlisten_addr = ").unwrap();

    let err = ScanConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ScanError::Config(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ScanConfig::from_file(std::path::Path::new("/nonexistent/scan.toml")).unwrap_err();
    match err {
        ScanError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_zero_timeout_rejected() {
    let mut config = ScanConfig::default();
    config.classifier.timeout_seconds = 0;
    assert!(config.validate().is_err());
}
