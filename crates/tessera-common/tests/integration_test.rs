//! Integration tests for tessera-common logging.
//!
//! Installing a global subscriber is process-wide, so everything that needs
//! one lives in a single test.

use std::fs;
use tessera_common::{init_logging, LoggingConfig, LoggingError};

#[test]
fn test_json_file_logging_and_double_init() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tessera.log");

    let config = LoggingConfig {
        level: "info".to_string(),
        json_format: true,
        file_path: Some(path.clone()),
        ..LoggingConfig::default()
    };
    init_logging(&config).unwrap();

    tracing::info!(locale = "fr", "Negotiated translation bundles");

    let written = fs::read_to_string(&path).unwrap();
    if std::env::var_os("RUST_LOG").is_none() {
        let line = written.lines().last().unwrap();
        assert!(line.starts_with('{'));
        assert!(line.contains("Negotiated translation bundles"));
        assert!(line.contains(r#""locale":"fr""#));
    }

    let err = init_logging(&LoggingConfig::default()).unwrap_err();
    assert!(matches!(err, LoggingError::AlreadyInitialized(_)));
}
