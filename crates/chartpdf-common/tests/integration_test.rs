//! Integration tests for chartpdf-common crate.

use chartpdf_common::{init_logging, sanitize_filename, ChartPdfError, LogFormat, LoggingConfig};

#[test]
fn test_file_logging_writes_to_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("logs").join("chartpdf.log");

    let config = LoggingConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        file_path: Some(log_path.clone()),
        ..LoggingConfig::default()
    };

    let guard = init_logging(&config).expect("logging should initialise once");
    tracing::info!(request_id = "abc", "hello from the test");
    drop(guard);

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("hello from the test"));
    assert!(contents.contains("\"request_id\":\"abc\""));
}

#[test]
fn test_sanitized_names_stay_inside_directory() {
    let dir = tempfile::tempdir().unwrap();
    let name = sanitize_filename("../../outside.csv").unwrap();
    let joined = dir.path().join(&name);
    assert_eq!(joined.parent().unwrap(), dir.path());
}

#[test]
fn test_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChartPdfError>();
}
